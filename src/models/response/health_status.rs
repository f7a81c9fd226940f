//! `/health` body.

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
}

impl HealthStatus {
    pub fn connected() -> Self {
        HealthStatus {
            status: "ok".into(),
            database: "connected".into(),
        }
    }

    pub fn disconnected() -> Self {
        HealthStatus {
            status: "error".into(),
            database: "disconnected".into(),
        }
    }
}
