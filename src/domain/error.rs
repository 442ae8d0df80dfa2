//! Backend failure taxonomy.
//!
//! Every failure an app backend can produce maps to a fixed wire message and
//! an HTTP status. The original shell returned 200 with `success=false` for
//! validation and filesystem failures; only the missing-user and missing-app
//! cases use 404. Clients key off the `success` flag, not the status.

use actix_web::http::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;

/// Failure produced by an app backend or the dispatch layer.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request body was absent, unparseable, or an empty JSON document.
    #[error("Invalid JSON payload")]
    InvalidPayload,
    /// Payload parsed but named no recognised action.
    #[error("Invalid action specified")]
    InvalidAction,
    /// No authenticated user record was injected into the invocation.
    #[error("User not found.")]
    UserNotFound,
    /// No backend is registered under the requested slug.
    #[error("Unknown app")]
    UnknownApp,
    /// Filesystem access under the user's storage directory failed.
    ///
    /// The io error's display text is surfaced to the caller, matching the
    /// original scripts. The dispatch layer logs it as well.
    #[error("{0}")]
    Storage(#[from] std::io::Error),
}

impl BackendError {
    /// Status code paired with the failure envelope.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound | Self::UnknownApp => StatusCode::NOT_FOUND,
            Self::InvalidPayload | Self::InvalidAction | Self::Storage(_) => StatusCode::OK,
        }
    }

    /// Failure envelope: `{"success": false, "error": <message>}`.
    pub fn to_body(&self) -> Value {
        json!({ "success": false, "error": self.to_string() })
    }
}
