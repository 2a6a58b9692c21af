use super::*;

/// Tests listing bots split by approval, newest first.
///
/// Expected: each list holds only bots of its state ordered by timestamp descending
#[tokio::test]
async fn lists_by_approval_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);
    let mut older = create_param(200000000000000001, 100000000000000001, "Older");
    older.timestamp = 1_000;
    let mut newer = create_param(200000000000000002, 100000000000000001, "Newer");
    newer.timestamp = 2_000;
    let pending = create_param(200000000000000003, 100000000000000001, "Pending");
    repo.try_insert(older).await?;
    repo.try_insert(newer).await?;
    repo.try_insert(pending).await?;
    repo.approve(200000000000000001).await?;
    repo.approve(200000000000000002).await?;

    let approved = repo.get_by_approval(true).await?;
    let queued = repo.get_by_approval(false).await?;

    let names: Vec<_> = approved.iter().map(|b| b.content.name.as_str()).collect();
    assert_eq!(names, vec!["Newer", "Older"]);
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].content.name, "Pending");

    Ok(())
}
