//! src/error.rs
//!
//! Defines the library's custom `Error` enum using `thiserror`, and its
//! mapping onto HTTP responses.

use crate::domain::ObjectId;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize or deserialize: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("expected `username` to be unique")]
    DuplicateUsername,

    #[error("malformatted id")]
    MalformedId(String),

    #[error("{0} {1} not found")]
    NotFound(&'static str, ObjectId),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::DuplicateUsername | Error::MalformedId(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::NotFound(..) => StatusCode::NOT_FOUND,
            Error::Config(_) | Error::Io(_) | Error::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
