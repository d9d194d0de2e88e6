use serde::{Deserialize, Serialize};

use crate::model::pools::DataPools;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Standard success envelope for the data-pools endpoints.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DataPoolsDto {
    /// `"OK"` on success.
    pub status: String,
    /// The aggregated snapshot of every entity pool.
    pub data: DataPools,
    /// Human-readable summary of what the call did.
    pub message: String,
}

impl DataPoolsDto {
    pub fn ok(data: DataPools, message: impl Into<String>) -> Self {
        Self {
            status: "OK".to_string(),
            data,
            message: message.into(),
        }
    }
}
