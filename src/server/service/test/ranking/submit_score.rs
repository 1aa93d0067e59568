use super::*;

/// Tests that the returned rank reflects the just-inserted submission.
///
/// The first submission makes the player rank 1; after another player takes
/// the lead, a further (lower) submission reports rank 2.
///
/// Expected: rank 1, then rank 2 once overtaken
#[tokio::test]
async fn returns_rank_including_the_new_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player_a = factory::create_account(db).await?;
    let player_b = factory::create_account(db).await?;
    let exporter = SnapshotExporter::disabled();
    let service = RankingService::new(db, &exporter);

    let rank = service.submit_score(submit_param(player_a.uid, 50)).await.unwrap();
    assert_eq!(rank, 1);

    let rank = service.submit_score(submit_param(player_b.uid, 100)).await.unwrap();
    assert_eq!(rank, 1);

    let rank = service.submit_score(submit_param(player_a.uid, 60)).await.unwrap();
    assert_eq!(rank, 2);

    Ok(())
}

/// Tests that an overtaking submission reports the improved rank immediately.
///
/// Expected: rank 1 on the submission that takes the lead
#[tokio::test]
async fn reports_rank_one_when_taking_the_lead() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = factory::helpers::create_account_with_scores(db, &[100]).await?;
    let challenger = factory::create_account(db).await?;
    let exporter = SnapshotExporter::disabled();
    let service = RankingService::new(db, &exporter);

    let rank = service
        .submit_score(submit_param(challenger.uid, 150))
        .await
        .unwrap();

    assert_eq!(rank, 1);
    assert_eq!(service.highest_score(leader.uid).await.unwrap(), 100);

    Ok(())
}

/// Tests the snapshot side effect of a submission.
///
/// With an exporter configured, a successful submission must leave a ranked
/// text snapshot of the current leaderboard on disk.
///
/// Expected: snapshot file containing one rank,nickname,score line per player
#[tokio::test]
async fn writes_snapshot_after_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.txt");

    let player = test_utils::factory::account::AccountFactory::new(db)
        .nickname("Speedrunner")
        .build()
        .await?;
    let exporter = SnapshotExporter::new(Some(path.clone()));
    let service = RankingService::new(db, &exporter);

    service.submit_score(submit_param(player.uid, 42)).await.unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(content, "1,Speedrunner,42");

    Ok(())
}
