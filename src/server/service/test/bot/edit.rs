use super::*;

/// Tests an edit that changes fields.
///
/// Expected: Changed, content replaced, owner/approved/token/timestamp kept, one Edited
/// event carrying the name loaded before the edit
#[tokio::test]
async fn changes_only_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let before = stored(
        factory::bot::BotFactory::new(db, owner.discord_id.to_string())
            .name("Old name")
            .approved(true)
            .build()
            .await?,
    )?;
    let (notifications, mut events) = NotificationDispatcher::channel();

    let mut updated = content("New name");
    updated.format = DescriptionFormat::Asciidoc;
    let outcome = BotService::new(db, &notifications)
        .edit(&owner, &before, updated.clone())
        .await?;

    assert_eq!(outcome, EditOutcome::Changed);
    let after = BotRepository::new(db).find_by_id(before.id).await?.unwrap();
    assert_eq!(after.content, updated);
    assert_eq!(after.owner, before.owner);
    assert_eq!(after.approved, before.approved);
    assert_eq!(after.token, before.token);
    assert_eq!(after.timestamp, before.timestamp);

    assert_eq!(
        drain(&mut events),
        vec![BotEvent::Edited {
            actor: owner.discord_id,
            name: "Old name".to_string(),
            id: before.id,
            owner: before.owner,
        }]
    );

    Ok(())
}

/// Tests an edit that submits the stored values.
///
/// Expected: Unchanged and no event
#[tokio::test]
async fn identical_edit_is_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let bot = stored(factory::create_bot(db, owner.discord_id.to_string()).await?)?;
    let (notifications, mut events) = NotificationDispatcher::channel();

    let outcome = BotService::new(db, &notifications)
        .edit(&owner, &bot, bot.content.clone())
        .await?;

    assert_eq!(outcome, EditOutcome::Unchanged);
    assert!(drain(&mut events).is_empty());

    Ok(())
}

/// Tests an edit of a bot deleted after it was loaded.
///
/// Expected: Missing and no event
#[tokio::test]
async fn vanished_bot_is_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let bot = stored(factory::create_bot(db, owner.discord_id.to_string()).await?)?;
    BotRepository::new(db).delete(bot.id).await?;
    let (notifications, mut events) = NotificationDispatcher::channel();

    let outcome = BotService::new(db, &notifications)
        .edit(&owner, &bot, content("Renamed"))
        .await?;

    assert_eq!(outcome, EditOutcome::Missing);
    assert!(drain(&mut events).is_empty());

    Ok(())
}

/// Tests deleting a bot.
///
/// Expected: record gone and one Deleted event
#[tokio::test]
async fn delete_removes_and_announces() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let bot = stored(factory::create_bot(db, owner.discord_id.to_string()).await?)?;
    let (notifications, mut events) = NotificationDispatcher::channel();

    BotService::new(db, &notifications)
        .delete(&owner, &bot)
        .await?;

    assert!(BotRepository::new(db).find_by_id(bot.id).await?.is_none());
    assert_eq!(
        drain(&mut events),
        vec![BotEvent::Deleted {
            actor: owner.discord_id,
            name: bot.content.name.clone(),
            id: bot.id,
            owner: bot.owner,
        }]
    );

    Ok(())
}

/// Tests rotating the token.
///
/// Expected: a different 128 hex char token, nothing else changed
#[tokio::test]
async fn rotate_token_replaces_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bot = stored(factory::create_bot(db, "100000000000000001").await?)?;
    let (notifications, mut events) = NotificationDispatcher::channel();

    BotService::new(db, &notifications)
        .rotate_token(bot.id)
        .await?;

    let after = BotRepository::new(db).find_by_id(bot.id).await?.unwrap();
    assert_ne!(after.token, bot.token);
    assert_eq!(after.token.len(), 128);
    assert_eq!(after.content, bot.content);
    assert!(drain(&mut events).is_empty());

    Ok(())
}
