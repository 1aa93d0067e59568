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
                    .table(ScoreSubmission::Table)
                    .if_not_exists()
                    .col(pk_auto(ScoreSubmission::Id))
                    .col(integer(ScoreSubmission::UserId))
                    .col(timestamp_with_time_zone(ScoreSubmission::SubmittedAt))
                    .col(big_integer(ScoreSubmission::Score))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_score_submission_user_id")
                            .from(ScoreSubmission::Table, ScoreSubmission::UserId)
                            .to(Account::Table, Account::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Per-player MAX(score) aggregates drive both ranking queries.
        manager
            .create_index(
                Index::create()
                    .name("idx_score_submission_user_id_score")
                    .table(ScoreSubmission::Table)
                    .col(ScoreSubmission::UserId)
                    .col(ScoreSubmission::Score)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScoreSubmission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScoreSubmission {
    Table,
    Id,
    UserId,
    SubmittedAt,
    Score,
}
