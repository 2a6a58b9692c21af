use super::*;

/// Tests replacing the token of a bot.
///
/// Expected: Ok(1) and the new token is stored
#[tokio::test]
async fn replaces_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stored = factory::create_bot(db, "100000000000000001").await?;
    let id: u64 = stored.id.parse().unwrap();

    let repo = BotRepository::new(db);
    let rows = repo.set_token(id, "e".repeat(128)).await?;

    assert_eq!(rows, 1);
    assert_eq!(repo.find_by_id(id).await?.unwrap().token, "e".repeat(128));

    Ok(())
}
