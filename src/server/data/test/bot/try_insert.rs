use super::*;

/// Tests inserting a new bot.
///
/// Expected: Ok(true) and the stored row is unapproved with the given owner and token
#[tokio::test]
async fn inserts_new_bot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);
    let inserted = repo
        .try_insert(create_param(200000000000000001, 100000000000000001, "Helper"))
        .await?;

    assert!(inserted);
    let bot = repo.find_by_id(200000000000000001).await?.unwrap();
    assert_eq!(bot.owner, 100000000000000001);
    assert_eq!(bot.content.count, 42);
    assert!(!bot.approved);
    assert_eq!(bot.token.len(), 128);

    Ok(())
}

/// Tests that a second submission of the same id is reported as a duplicate.
///
/// Expected: Ok(false) and the first record is left unchanged
#[tokio::test]
async fn duplicate_id_leaves_first_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);
    assert!(
        repo.try_insert(create_param(200000000000000001, 100000000000000001, "First"))
            .await?
    );

    let mut second = create_param(200000000000000001, 100000000000000002, "Second");
    second.token = "f".repeat(128);
    let inserted = repo.try_insert(second).await?;

    assert!(!inserted);
    let bot = repo.find_by_id(200000000000000001).await?.unwrap();
    assert_eq!(bot.content.name, "First");
    assert_eq!(bot.owner, 100000000000000001);

    Ok(())
}

/// Tests that errors other than a key conflict are propagated.
///
/// Expected: Err when the table does not exist
#[tokio::test]
async fn propagates_other_errors() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);
    let result = repo
        .try_insert(create_param(200000000000000001, 100000000000000001, "Helper"))
        .await;

    assert!(result.is_err());

    Ok(())
}
