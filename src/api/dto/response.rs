//! Response envelope shared by every JSON endpoint.

use serde::Serialize;

/// Body-level outcome marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// `{ "status": "OK" | "Error", "error"?: string }`
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
        }
    }
}

/// Successful save or delete, echoing the alias.
#[derive(Debug, Clone, Serialize)]
pub struct AliasResponse {
    #[serde(flatten)]
    pub response: StatusResponse,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alias: String,
}

impl AliasResponse {
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            response: StatusResponse::ok(),
            alias: alias.into(),
        }
    }
}
