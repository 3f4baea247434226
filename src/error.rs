// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the activities API client and the host page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors returned by the activities API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, reset, ...).
    #[error("Activities API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("Unexpected response body: {0}")]
    Parse(#[from] ParseError),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Server-supplied detail message, if the error carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True if the server rejected the request (as opposed to the request
    /// or the response being broken).
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

/// A JSON payload that did not deserialize into the expected record.
#[derive(Debug, thiserror::Error)]
#[error("{what}: {source}")]
pub struct ParseError {
    pub what: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl ParseError {
    pub fn new(what: &'static str, source: serde_json::Error) -> Self {
        Self { what, source }
    }
}

/// Error decoding a percent-encoded data attribute.
#[derive(Debug, thiserror::Error)]
#[error("Invalid percent-encoding in {field}: {value:?}")]
pub struct DecodeError {
    pub field: &'static str,
    pub value: String,
}

/// Result type alias for API calls
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error type for host page handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
