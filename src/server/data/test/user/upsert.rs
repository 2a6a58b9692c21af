use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with user created and admin status set to false
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(param(123456789012345678, "TestUser", None))
        .await?;

    assert_eq!(user.discord_id, 123456789012345678);
    assert_eq!(user.name, "TestUser");
    assert!(!user.admin);

    Ok(())
}

/// Tests creating a new user with admin status.
///
/// Expected: Ok with admin status set to true
#[tokio::test]
async fn creates_new_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(param(123456789012345678, "AdminUser", Some(true)))
        .await?;

    assert!(user.admin);

    Ok(())
}

/// Tests updating an existing user's profile without affecting admin status.
///
/// Expected: Ok with name and avatar updated and admin status preserved
#[tokio::test]
async fn updates_profile_preserves_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .discord_id("123456789012345678")
        .name("OldName")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let mut update = param(123456789012345678, "NewName", None);
    update.avatar = Some("https://cdn.discordapp.com/avatars/1/a.png".to_string());
    let user = repo.upsert(update).await?;

    assert_eq!(user.name, "NewName");
    assert_eq!(
        user.avatar.as_deref(),
        Some("https://cdn.discordapp.com/avatars/1/a.png")
    );
    assert!(user.admin);

    Ok(())
}

/// Tests that an explicit admin flag overrides the stored one.
///
/// Expected: Ok with admin status revoked
#[tokio::test]
async fn explicit_admin_flag_overrides() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .discord_id("123456789012345678")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(param(123456789012345678, "User", Some(false)))
        .await?;

    assert!(!user.admin);

    Ok(())
}
