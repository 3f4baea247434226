// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities API client.
//!
//! Handles:
//! - Fetching the full activity collection
//! - Signing a participant up for an activity
//! - Unregistering a participant
//!
//! Names and emails are passed in decoded form and percent-encoded here,
//! right before they go on the wire.

use crate::error::{ApiError, ParseError, Result};
use crate::models::ActivityCollection;
use serde::Deserialize;
use urlencoding::encode;

/// Body of a successful sign-up.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Activities API client.
#[derive(Clone)]
pub struct ActivitiesClient {
    http: reqwest::Client,
    base_url: String,
}

impl ActivitiesClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /activities`
    pub async fn fetch_activities(&self) -> Result<ActivityCollection> {
        let url = format!("{}/activities", self.base_url);

        let response = self.http.get(&url).send().await?;
        let response = check_response(response).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body)
            .map_err(|e| ParseError::new("activity collection", e).into())
    }

    /// `POST /activities/{activity}/signup?email={email}`
    pub async fn signup(&self, activity: &str, email: &str) -> Result<SignupResponse> {
        let url = self.action_url(activity, "signup", email);

        let response = self.http.post(&url).send().await.map_err(transport)?;
        let response = check_response(response).await?;
        let body = response.bytes().await.map_err(transport)?;

        serde_json::from_slice(&body)
            .map_err(|e| ParseError::new("signup response", e).into())
    }

    /// `POST /activities/{activity}/unregister?email={email}`
    ///
    /// The success body is not needed and is not parsed.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        let url = self.action_url(activity, "unregister", email);

        let response = self.http.post(&url).send().await.map_err(transport)?;
        check_response(response).await?;
        Ok(())
    }

    fn action_url(&self, activity: &str, action: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            encode(activity),
            action,
            encode(email)
        )
    }
}

/// Pass 2xx responses through; turn anything else into an error.
///
/// An error body that is JSON becomes `ApiError::Status`, carrying its
/// `detail` when that is a non-empty string. An error body that is not JSON
/// at all is a parse failure, the same as a broken success body.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(transport)?;
    let detail = extract_detail(&body).map_err(|e| ParseError::new("error response", e))?;

    tracing::debug!(status, detail = ?detail, "Activities API returned error status");
    Err(ApiError::Status { status, detail })
}

/// Action URLs carry the participant email, so it is kept out of error
/// messages.
fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.without_url())
}

fn extract_detail(body: &[u8]) -> std::result::Result<Option<String>, serde_json::Error> {
    let parsed: serde_json::Value = serde_json::from_slice(body)?;
    Ok(match parsed.get("detail") {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    })
}
