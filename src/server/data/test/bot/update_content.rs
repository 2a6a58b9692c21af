use super::*;

/// Tests that an edit replaces content fields only.
///
/// Expected: Ok(1) with owner, approval, token and timestamp untouched
#[tokio::test]
async fn updates_content_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stored = factory::bot::BotFactory::new(db, "100000000000000001")
        .approved(true)
        .build()
        .await?;
    let id: u64 = stored.id.parse().unwrap();

    let repo = BotRepository::new(db);
    let mut new_content = content("Renamed");
    new_content.format = DescriptionFormat::Html;
    new_content.count = 7;
    let rows = repo.update_content(id, new_content.clone()).await?;

    assert_eq!(rows, 1);
    let bot = repo.find_by_id(id).await?.unwrap();
    assert_eq!(bot.content, new_content);
    assert_eq!(bot.owner.to_string(), stored.owner);
    assert!(bot.approved);
    assert_eq!(bot.token, stored.token);
    assert_eq!(bot.timestamp, stored.timestamp);

    Ok(())
}

/// Tests editing a bot that no longer exists.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_missing_bot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);
    let rows = repo
        .update_content(200000000000000001, content("Ghost"))
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
