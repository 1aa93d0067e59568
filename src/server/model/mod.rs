//! Domain models and operation parameter types.
//!
//! Domain models sit between the data layer and the service layer: repositories
//! convert SeaORM entities into these types at the infrastructure boundary, and
//! controllers convert them into DTOs at the HTTP boundary. Parameter structs
//! carry the inputs of each service operation.

pub mod account;
pub mod leaderboard;
pub mod score;
