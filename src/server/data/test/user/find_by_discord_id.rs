use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let stored = factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .find_by_discord_id(stored.discord_id.parse().unwrap())
        .await?
        .unwrap();

    assert_eq!(user.name, stored.name);
    assert!(user.admin);

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_discord_id(123456789012345678).await?.is_none());

    Ok(())
}
