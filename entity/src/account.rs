use sea_orm::entity::prelude::*;

/// A registered player account.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    /// Server-assigned player id.
    #[sea_orm(primary_key)]
    pub uid: i32,

    #[sea_orm(unique)]
    pub username: String,

    /// Display name shown on the leaderboard.
    pub nickname: String,

    /// Argon2id password hash in PHC string format.
    pub password_hash: String,

    pub registered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::score_submission::Entity")]
    ScoreSubmission,
    #[sea_orm(has_many = "super::login_record::Entity")]
    LoginRecord,
}

impl Related<super::score_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoreSubmission.def()
    }
}

impl Related<super::login_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LoginRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
