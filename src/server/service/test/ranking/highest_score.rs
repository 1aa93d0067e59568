use super::*;

/// Tests the highest-score query for a player with submissions.
///
/// Expected: the maximum submitted value
#[tokio::test]
async fn returns_best_submitted_score() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::helpers::create_account_with_scores(db, &[10, 50, 30]).await?;
    let exporter = SnapshotExporter::disabled();
    let service = RankingService::new(db, &exporter);

    assert_eq!(service.highest_score(player.uid).await.unwrap(), 50);

    Ok(())
}

/// Tests the highest-score query for a player with no submissions.
///
/// Expected: 0 rather than an error or a sentinel
#[tokio::test]
async fn returns_zero_without_submissions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let exporter = SnapshotExporter::disabled();
    let service = RankingService::new(db, &exporter);

    assert_eq!(service.highest_score(account.uid).await.unwrap(), 0);

    Ok(())
}
