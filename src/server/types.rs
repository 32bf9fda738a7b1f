use serde::{Deserialize, Serialize};

pub use crate::dilution::{DilutionOutcome, DilutionRequest};

#[derive(Debug, Deserialize)]
pub struct ProtocolRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Body of every AI endpoint. Failures travel in `error` with status 200.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelResponse {
    Markdown { markdown: String },
    Error { error: String },
}

impl From<crate::Result<String>> for ModelResponse {
    fn from(result: crate::Result<String>) -> Self {
        match result {
            Ok(markdown) => Self::Markdown { markdown },
            Err(e) => Self::Error {
                error: e.to_string(),
            },
        }
    }
}
