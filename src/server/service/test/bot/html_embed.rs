use super::*;

/// Tests the embed of an HTML bot.
///
/// Expected: exactly the stored long description
#[tokio::test]
async fn returns_raw_html() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bot = stored(
        factory::bot::BotFactory::new(db, "100000000000000001")
            .kind("html")
            .long_desc("<h1>Hi</h1><script>go()</script>")
            .build()
            .await?,
    )?;
    let (notifications, _events) = NotificationDispatcher::channel();

    let html = BotService::new(db, &notifications)
        .html_embed(bot.id)
        .await?;

    assert_eq!(html.as_deref(), Some("<h1>Hi</h1><script>go()</script>"));
    assert!(!html.unwrap().contains(&bot.token));

    Ok(())
}

/// Tests the embed of a markdown bot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn markdown_bot_has_no_embed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bot = stored(factory::create_bot(db, "100000000000000001").await?)?;
    let (notifications, _events) = NotificationDispatcher::channel();

    let html = BotService::new(db, &notifications)
        .html_embed(bot.id)
        .await?;

    assert!(html.is_none());

    Ok(())
}

/// Tests the embed of a missing bot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_bot_has_no_embed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifications, _events) = NotificationDispatcher::channel();

    let html = BotService::new(db, &notifications)
        .html_embed(200000000000000001)
        .await?;

    assert!(html.is_none());

    Ok(())
}
