use super::*;

/// Tests loading a bot created by the factory.
///
/// Expected: Ok(Some) with the stored fields converted
#[tokio::test]
async fn finds_existing_bot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, stored) = factory::helpers::create_bot_with_owner(db).await?;

    let repo = BotRepository::new(db);
    let bot = repo.find_by_id(stored.id.parse().unwrap()).await?.unwrap();

    assert_eq!(bot.id.to_string(), stored.id);
    assert_eq!(bot.owner.to_string(), owner.discord_id);
    assert_eq!(bot.token, stored.token);
    assert_eq!(bot.content.format, DescriptionFormat::Markdown);

    Ok(())
}

/// Tests loading a bot that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_bot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);

    assert!(repo.find_by_id(200000000000000001).await?.is_none());
    assert!(repo.find_profile_by_id(200000000000000001).await?.is_none());

    Ok(())
}

/// Tests that a stored row with an unknown description type is reported as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_unknown_description_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stored = factory::bot::BotFactory::new(db, "100000000000000001")
        .kind("bbcode")
        .build()
        .await?;

    let repo = BotRepository::new(db);
    let result = repo.find_by_id(stored.id.parse().unwrap()).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
