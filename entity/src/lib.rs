pub mod prelude;

pub mod account;
pub mod login_record;
pub mod score_submission;
