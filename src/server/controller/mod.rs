//! HTTP request handlers for the API endpoints.
//!
//! Controllers validate request input, convert DTOs into service parameters,
//! invoke the service layer, and convert domain results back into response
//! DTOs. Error mapping to status codes lives in the error layer; controllers
//! only decide which errors to raise.

pub mod account;
pub mod leaderboard;
pub mod score;
