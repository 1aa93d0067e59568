use sea_orm_migration::{prelude::*, schema::*};

use super::m20240318_000001_create_account_table::Account;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoginRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(LoginRecord::Id))
                    .col(integer(LoginRecord::Uid))
                    .col(timestamp_with_time_zone(LoginRecord::LoggedInAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_login_record_uid")
                            .from(LoginRecord::Table, LoginRecord::Uid)
                            .to(Account::Table, Account::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoginRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LoginRecord {
    Table,
    Id,
    Uid,
    LoggedInAt,
}
