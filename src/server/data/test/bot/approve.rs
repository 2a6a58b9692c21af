use super::*;

/// Tests approving an unapproved bot.
///
/// Expected: Ok(true) and the flag is set
#[tokio::test]
async fn approves_pending_bot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stored = factory::create_bot(db, "100000000000000001").await?;
    let id: u64 = stored.id.parse().unwrap();

    let repo = BotRepository::new(db);

    assert!(repo.approve(id).await?);
    assert!(repo.find_by_id(id).await?.unwrap().approved);

    Ok(())
}

/// Tests that approving twice reports a change only once.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_approval_is_a_no_op() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stored = factory::create_bot(db, "100000000000000001").await?;
    let id: u64 = stored.id.parse().unwrap();

    let repo = BotRepository::new(db);

    assert!(repo.approve(id).await?);
    assert!(!repo.approve(id).await?);
    assert!(repo.find_by_id(id).await?.unwrap().approved);

    Ok(())
}

/// Tests approving a bot that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_bot_is_not_approved() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);

    assert!(!repo.approve(200000000000000001).await?);

    Ok(())
}
