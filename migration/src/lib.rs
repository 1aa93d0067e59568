pub use sea_orm_migration::prelude::*;

mod m20240318_000001_create_account_table;
mod m20240318_000002_create_score_submission_table;
mod m20240318_000003_create_login_record_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240318_000001_create_account_table::Migration),
            Box::new(m20240318_000002_create_score_submission_table::Migration),
            Box::new(m20240318_000003_create_login_record_table::Migration),
        ]
    }
}
