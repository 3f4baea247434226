// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Board: sign up for and leave extracurricular activities
//!
//! This crate renders the activities served by an activity sign-up API,
//! together with their rosters, and submits sign-up and unregister actions
//! back to that API.

pub mod board;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use board::ActivityBoard;
use config::Config;
use routes::session::SessionStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub board: ActivityBoard,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let board = ActivityBoard::from_config(&config);
        Self {
            config,
            board,
            sessions: SessionStore::new(),
        }
    }
}
