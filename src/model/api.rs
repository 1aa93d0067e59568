use serde::{Deserialize, Serialize};

/// Failure response body shared by all endpoints.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub state: String,
    pub message: String,
}

impl ErrorDto {
    pub fn failed(message: String) -> Self {
        Self {
            state: "failed".to_string(),
            message,
        }
    }
}
