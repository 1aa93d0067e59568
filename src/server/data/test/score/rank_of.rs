use super::*;

/// Tests ranking across two players.
///
/// Player A submits [10, 50, 30] and player B submits [100]. B holds the
/// higher best score.
///
/// Expected: rank(B) == 1 and rank(A) == 2
#[tokio::test]
async fn ranks_players_by_best_score() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player_a = factory::helpers::create_account_with_scores(db, &[10, 50, 30]).await?;
    let player_b = factory::helpers::create_account_with_scores(db, &[100]).await?;
    let repo = ScoreRepository::new(db);

    assert_eq!(repo.rank_of(player_b.uid).await?, 1);
    assert_eq!(repo.rank_of(player_a.uid).await?, 2);

    Ok(())
}

/// Tests the sentinel rank for a player with no submissions.
///
/// Verifies that "unranked" is distinguishable from "ranked last".
///
/// Expected: Ok(UNRANKED_RANK)
#[tokio::test]
async fn returns_sentinel_without_submissions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_account_with_scores(db, &[100]).await?;
    let account = factory::create_account(db).await?;
    let repo = ScoreRepository::new(db);

    assert_eq!(repo.rank_of(account.uid).await?, UNRANKED_RANK);

    Ok(())
}

/// Tests that players with an identical best score share a rank.
///
/// Two players at 50 are both rank 1; a third player below them is rank 3
/// because two distinct players stand above.
///
/// Expected: both leaders rank 1, the trailing player rank 3
#[tokio::test]
async fn tied_players_share_a_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::helpers::create_account_with_scores(db, &[50]).await?;
    let second = factory::helpers::create_account_with_scores(db, &[50]).await?;
    let third = factory::helpers::create_account_with_scores(db, &[30]).await?;
    let repo = ScoreRepository::new(db);

    assert_eq!(repo.rank_of(first.uid).await?, 1);
    assert_eq!(repo.rank_of(second.uid).await?, 1);
    assert_eq!(repo.rank_of(third.uid).await?, 3);

    Ok(())
}

/// Tests that improving the best score never worsens the rank.
///
/// A player trailing at rank 2 overtakes the leader after submitting a higher
/// score.
///
/// Expected: rank improves from 2 to 1 after the new submission
#[tokio::test]
async fn rank_improves_with_higher_score() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::helpers::create_account_with_scores(db, &[50]).await?;
    factory::helpers::create_account_with_scores(db, &[100]).await?;
    let repo = ScoreRepository::new(db);

    assert_eq!(repo.rank_of(player.uid).await?, 2);

    repo.submit(submit_param(player.uid, 150)).await?;

    assert_eq!(repo.rank_of(player.uid).await?, 1);

    Ok(())
}
