use super::*;

use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests appending a score submission.
///
/// Verifies that the repository inserts the submission and returns its
/// database-assigned id.
///
/// Expected: Ok with a positive submission id and one persisted row
#[tokio::test]
async fn appends_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let repo = ScoreRepository::new(db);

    let id = repo.submit(submit_param(account.uid, 42)).await?;

    assert!(id > 0);
    let count = entity::prelude::ScoreSubmission::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that repeated submissions are all kept.
///
/// Verifies that the same player submitting the same value twice appends two
/// rows with distinct ids; the store never rejects or deduplicates.
///
/// Expected: Ok with two rows and two distinct ids
#[tokio::test]
async fn keeps_duplicate_submissions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let repo = ScoreRepository::new(db);

    let first = repo.submit(submit_param(account.uid, 42)).await?;
    let second = repo.submit(submit_param(account.uid, 42)).await?;

    assert_ne!(first, second);
    let count = entity::prelude::ScoreSubmission::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
