use super::*;

/// Tests approving a pending bot twice.
///
/// Expected: Approved then AlreadyApproved, exactly one Approved event
#[tokio::test]
async fn approval_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let moderator = admin(db).await?;
    let bot = stored(factory::create_bot(db, "100000000000000001").await?)?;
    let (notifications, mut events) = NotificationDispatcher::channel();
    let service = BotService::new(db, &notifications);

    let first = service.approve(&moderator, bot.id).await?;
    let second = service.approve(&moderator, bot.id).await?;

    assert_eq!(first, ApproveOutcome::Approved(bot.clone()));
    assert_eq!(second, ApproveOutcome::AlreadyApproved);
    assert!(BotRepository::new(db).find_by_id(bot.id).await?.unwrap().approved);
    assert_eq!(
        drain(&mut events),
        vec![BotEvent::Approved {
            actor: moderator.discord_id,
            name: bot.content.name.clone(),
            id: bot.id,
            owner: bot.owner,
        }]
    );

    Ok(())
}

/// Tests approving a bot that does not exist.
///
/// Expected: NotFound and no event
#[tokio::test]
async fn missing_bot_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let moderator = admin(db).await?;
    let (notifications, mut events) = NotificationDispatcher::channel();

    let outcome = BotService::new(db, &notifications)
        .approve(&moderator, 200000000000000001)
        .await?;

    assert_eq!(outcome, ApproveOutcome::NotFound);
    assert!(drain(&mut events).is_empty());

    Ok(())
}

/// Tests the listings split by approval.
///
/// Expected: approved bot on the index list, pending bot in the queue
#[tokio::test]
async fn lists_split_by_approval() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let listed = stored(
        factory::bot::BotFactory::new(db, "100000000000000001")
            .approved(true)
            .build()
            .await?,
    )?;
    let pending = stored(factory::create_bot(db, "100000000000000001").await?)?;
    let (notifications, _events) = NotificationDispatcher::channel();
    let service = BotService::new(db, &notifications);

    let approved: Vec<u64> = service.list_approved().await?.iter().map(|b| b.id).collect();
    let queue: Vec<u64> = service.list_pending().await?.iter().map(|b| b.id).collect();

    assert_eq!(approved, vec![listed.id]);
    assert_eq!(queue, vec![pending.id]);

    Ok(())
}
