use super::*;

/// Tests registering a new account.
///
/// Verifies that registration returns the server-assigned uid and stores an
/// Argon2 hash rather than the plaintext password.
///
/// Expected: Ok with a positive uid and a PHC-formatted stored hash
#[tokio::test]
async fn creates_account_with_hashed_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let result = service
        .register(register_param("player_one", "Player One", "hunter2"))
        .await;

    assert!(result.is_ok());
    let account = result.unwrap();
    assert!(account.uid > 0);

    let stored = entity::prelude::Account::find_by_id(account.uid)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "hunter2");
    assert!(stored.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests validation of empty credentials.
///
/// Expected: BadRequest for an empty username and for an empty password
#[tokio::test]
async fn rejects_empty_username_or_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);

    let result = service.register(register_param("", "Player One", "hunter2")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service.register(register_param("player_one", "Player One", "")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests duplicate registration of the same username.
///
/// Verifies that the second registration fails with a conflict and does not
/// create a second account.
///
/// Expected: first Ok, second Err(Conflict), one stored account
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);

    service
        .register(register_param("player_one", "Player One", "hunter2"))
        .await
        .unwrap();
    let result = service
        .register(register_param("player_one", "Impostor", "hunter3"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let count = entity::prelude::Account::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
