use super::*;

/// Tests a first submission.
///
/// Expected: stored unapproved, owned by the caller, with a 128 hex char token and one
/// Added event
#[tokio::test]
async fn creates_unapproved_bot_owned_by_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caller = user(db).await?;
    let (notifications, mut events) = NotificationDispatcher::channel();

    let outcome = BotService::new(db, &notifications)
        .submit(&caller, 200000000000000001, content("Helper"))
        .await?;

    let SubmitOutcome::Created(bot) = outcome else {
        panic!("Expected Created, got: {:?}", outcome);
    };
    assert_eq!(bot.owner, caller.discord_id);
    assert!(!bot.approved);
    assert_eq!(bot.token.len(), 128);
    assert!(bot.token.chars().all(|c| c.is_ascii_hexdigit()));

    let reloaded = BotRepository::new(db)
        .find_by_id(200000000000000001)
        .await?
        .unwrap();
    assert_eq!(reloaded, bot);
    assert_eq!(reloaded.content.count, 42);

    assert_eq!(
        drain(&mut events),
        vec![BotEvent::Added {
            actor: caller.discord_id,
            name: "Helper".to_string(),
            id: 200000000000000001,
        }]
    );

    Ok(())
}

/// Tests submitting an id that is already listed.
///
/// Expected: Duplicate, first record untouched, no second event
#[tokio::test]
async fn duplicate_leaves_first_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let first_owner = user(db).await?;
    let second_owner = user(db).await?;
    let (notifications, mut events) = NotificationDispatcher::channel();
    let service = BotService::new(db, &notifications);

    service
        .submit(&first_owner, 200000000000000001, content("First"))
        .await?;
    let before = BotRepository::new(db)
        .find_by_id(200000000000000001)
        .await?;

    let outcome = service
        .submit(&second_owner, 200000000000000001, content("Second"))
        .await?;

    assert_eq!(outcome, SubmitOutcome::Duplicate);
    let after = BotRepository::new(db)
        .find_by_id(200000000000000001)
        .await?;
    assert_eq!(before, after);
    assert_eq!(drain(&mut events).len(), 1);

    Ok(())
}
