use super::*;

/// Tests that an anonymous session resolves to no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_not_logged_in() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).current().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that a logged in session resolves to its user.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let stored = factory::user::create_user(db).await?;
    AuthSession::new(session)
        .set_user_id(stored.discord_id.parse().unwrap())
        .await?;

    let user = AuthGuard::new(db, session).current().await?.unwrap();

    assert_eq!(user.discord_id.to_string(), stored.discord_id);

    Ok(())
}
