use super::*;

/// Tests finding an existing account by username.
///
/// Verifies that the repository retrieves the full account record when
/// queried with a username that exists in the database.
///
/// Expected: Ok(Some(Account)) with matching account data
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let created = repo.create(create_param("player_one", "Player One")).await?;

    let result = repo.find_by_username("player_one").await;

    assert!(result.is_ok());
    let account = result.unwrap();
    assert!(account.is_some());
    let account = account.unwrap();
    assert_eq!(account.uid, created.uid);
    assert_eq!(account.nickname, "Player One");

    Ok(())
}

/// Tests querying for a non-existent username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let result = repo.find_by_username("nobody").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}

/// Tests that the username lookup is case-sensitive.
///
/// Verifies that a lookup with different casing does not match an existing
/// account, as the login contract requires an exact match.
///
/// Expected: Ok(None) for the differently-cased username
#[tokio::test]
async fn matches_username_case_sensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    repo.create(create_param("Player_One", "Player One")).await?;

    let result = repo.find_by_username("player_one").await?;

    assert!(result.is_none());

    Ok(())
}
