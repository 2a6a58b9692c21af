use super::*;

/// Tests the page of a missing bot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_bot_has_no_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifications, _events) = NotificationDispatcher::channel();

    let page = BotService::new(db, &notifications)
        .page(None, 200000000000000001)
        .await?;

    assert!(page.is_none());

    Ok(())
}

/// Tests who gets edit controls on the page.
///
/// Expected: owner and admin do, anonymous and other users do not
#[tokio::test]
async fn editable_only_for_owner_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let stranger = user(db).await?;
    let moderator = admin(db).await?;
    let bot = stored(factory::create_bot(db, owner.discord_id.to_string()).await?)?;
    let (notifications, _events) = NotificationDispatcher::channel();
    let service = BotService::new(db, &notifications);

    let editable = |page: Option<crate::server::service::bot::BotPage>| page.unwrap().editable;

    assert!(!editable(service.page(None, bot.id).await?));
    assert!(editable(service.page(Some(&owner), bot.id).await?));
    assert!(!editable(service.page(Some(&stranger), bot.id).await?));
    assert!(editable(service.page(Some(&moderator), bot.id).await?));

    Ok(())
}

/// Tests that the page resolves the owner and renders the description without the token.
///
/// Expected: owner profile present, markdown rendered inline, token absent
#[tokio::test]
async fn renders_markdown_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let bot = stored(
        factory::bot::BotFactory::new(db, owner.discord_id.to_string())
            .long_desc("Uses **bold** text")
            .build()
            .await?,
    )?;
    let (notifications, _events) = NotificationDispatcher::channel();

    let page = BotService::new(db, &notifications)
        .page(None, bot.id)
        .await?
        .unwrap();

    assert_eq!(page.owner.map(|owner| owner.discord_id), Some(owner.discord_id));
    let RenderedDescription::Html(html) = page.description else {
        panic!("Expected inline HTML");
    };
    assert!(html.contains("<strong>bold</strong>"));
    assert!(!html.contains(&bot.token));
    assert!(!format!("{:?}", page.profile).contains(&bot.token));

    Ok(())
}

/// Tests the page of an HTML bot.
///
/// Expected: the description is framed from the iframe endpoint
#[tokio::test]
async fn html_description_is_framed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bot = stored(
        factory::bot::BotFactory::new(db, "100000000000000001")
            .kind("html")
            .long_desc("<script>alert(1)</script>")
            .build()
            .await?,
    )?;
    let (notifications, _events) = NotificationDispatcher::channel();

    let page = BotService::new(db, &notifications)
        .page(None, bot.id)
        .await?
        .unwrap();

    assert!(page.owner.is_none());
    assert_eq!(
        page.description,
        RenderedDescription::Frame {
            src: format!("/bot/{}/iframe", bot.id)
        }
    );

    Ok(())
}
