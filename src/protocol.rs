//! Wire types shared by the gateway and the console.

use serde::{Deserialize, Serialize};

/// What the console sends to `POST /api/code-review`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub code: String,
    pub language: String,
}

/// What the gateway answers. Exactly one of the two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewResponse {
    Feedback { feedback: String },
    Error { error: String },
}
