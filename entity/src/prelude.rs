pub use super::account::Entity as Account;
pub use super::login_record::Entity as LoginRecord;
pub use super::score_submission::Entity as ScoreSubmission;
