// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Board page routes: the page itself and the actions its forms post.
//!
//! The activities list is shared. The form values and the message element
//! come from the visitor named by the session cookie.

use crate::board::render::{render_confirmation, render_page};
use crate::board::{Answered, UnregisterTarget};
use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(page))
        .route("/signup", post(signup))
        .route("/unregister", post(unregister))
        .route("/reload", post(reload))
}

/// Render the board as this visitor currently sees it.
async fn page(State(state): State<Arc<AppState>>, jar: CookieJar) -> Html<String> {
    let visitor = state.sessions.get(&jar).unwrap_or_default();
    let view = state.board.snapshot(&visitor).await;
    Html(render_page(&view).into_string())
}

#[derive(Debug, Deserialize)]
pub struct SignupParams {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub activity: String,
}

async fn signup(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(params): Form<SignupParams>,
) -> Result<(CookieJar, Redirect), AppError> {
    let (jar, visitor) = state.sessions.get_or_create(jar)?;
    state
        .board
        .submit_signup(&visitor, &params.email, &params.activity)
        .await;
    Ok((jar, Redirect::to("/")))
}

/// Unregister form. `activity` and `email` carry the percent-encoded values
/// of the button's data attributes.
#[derive(Debug, Deserialize)]
pub struct UnregisterParams {
    pub activity: String,
    pub email: String,
    pub confirm: Option<String>,
}

/// First post (no `confirm`) shows the confirmation page; the second one
/// carries the answer.
async fn unregister(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(params): Form<UnregisterParams>,
) -> Result<Response, AppError> {
    let target = UnregisterTarget::from_encoded(&params.activity, &params.email)?;

    let Some(answer) = params.confirm else {
        return Ok(Html(render_confirmation(&target).into_string()).into_response());
    };

    let confirmed = Answered(answer == "yes");
    // A declined answer shows nothing, so it does not start a session.
    let (jar, visitor) = if confirmed.0 {
        state.sessions.get_or_create(jar)?
    } else {
        let visitor = state.sessions.get(&jar).unwrap_or_default();
        (jar, visitor)
    };

    state
        .board
        .unregister_participant(&visitor, &target, &confirmed)
        .await;
    Ok((jar, Redirect::to("/")).into_response())
}

async fn reload(State(state): State<Arc<AppState>>) -> Redirect {
    state.board.load_activities().await;
    Redirect::to("/")
}
