use super::*;

/// Tests login with correct credentials.
///
/// Verifies that login returns the account's uid and appends exactly one
/// login record.
///
/// Expected: Ok with the registered uid and one LoginRecord row
#[tokio::test]
async fn returns_uid_and_records_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let account = service
        .register(register_param("player_one", "Player One", "hunter2"))
        .await
        .unwrap();

    let uid = service
        .login(login_param("player_one", "hunter2"))
        .await
        .unwrap();

    assert_eq!(uid, account.uid);

    let count = entity::prelude::LoginRecord::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests login with an unknown username.
///
/// Expected: Err(UserNotFound) and no login record
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let result = service.login(login_param("nobody", "hunter2")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound))
    ));

    let count = entity::prelude::LoginRecord::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests login with a wrong password.
///
/// Verifies that a failed verification is distinguishable from an unknown
/// user and appends no login record.
///
/// Expected: Err(IncorrectPassword) and no login record
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    service
        .register(register_param("player_one", "Player One", "hunter2"))
        .await
        .unwrap();

    let result = service.login(login_param("player_one", "hunter3")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::IncorrectPassword))
    ));

    let count = entity::prelude::LoginRecord::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests validation of empty credentials.
///
/// Expected: BadRequest before any lookup happens
#[tokio::test]
async fn rejects_empty_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);

    let result = service.login(login_param("", "hunter2")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service.login(login_param("player_one", "")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
