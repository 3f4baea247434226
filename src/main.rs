// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Board host page
//!
//! Serves the activity board as an HTML page and forwards sign-up and
//! unregister actions to the activities API.

use activity_board::{config::Config, AppState};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        api = %config.api_base_url,
        "Starting Activity Board"
    );

    let state = Arc::new(AppState::new(config.clone()));

    // Page ready: first render
    state.board.load_activities().await;

    let app = activity_board::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    // Participant emails are only logged at debug, so the default stays at
    // info. Set RUST_LOG=activity_board=debug to see them.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
    Ok(())
}
