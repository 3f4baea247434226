// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Visitor sessions keyed by the `board_session` cookie.
//!
//! A session is only created when a visitor posts an action. Plain page
//! loads without a cookie render the empty form and a hidden message.

use crate::board::Visitor;
use crate::error::AppError;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use dashmap::DashMap;
use ring::rand::{SecureRandom, SystemRandom};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const SESSION_COOKIE: &str = "board_session";

/// Sessions untouched for this long are dropped.
const SESSION_IDLE_LIMIT: Duration = Duration::from_secs(60 * 60);

struct Session {
    visitor: Visitor,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, Session>>,
    rng: SystemRandom,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            rng: SystemRandom::new(),
        }
    }

    /// Visitor for the session named in `jar`, if it is still known.
    pub fn get(&self, jar: &CookieJar) -> Option<Visitor> {
        let id = jar.get(SESSION_COOKIE)?.value().to_string();
        let mut session = self.sessions.get_mut(&id)?;
        session.last_seen = Instant::now();
        Some(session.visitor.clone())
    }

    /// Visitor for the session named in `jar`, starting a new session (and
    /// setting its cookie) when there is none.
    pub fn get_or_create(&self, jar: CookieJar) -> Result<(CookieJar, Visitor), AppError> {
        if let Some(visitor) = self.get(&jar) {
            return Ok((jar, visitor));
        }

        self.purge_idle();

        let id = self.new_id()?;
        let visitor = Visitor::new();
        self.sessions.insert(
            id.clone(),
            Session {
                visitor: visitor.clone(),
                last_seen: Instant::now(),
            },
        );
        tracing::debug!(sessions = self.sessions.len(), "Started visitor session");

        let cookie = Cookie::build((SESSION_COOKIE, id))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        Ok((jar.add(cookie), visitor))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn purge_idle(&self) {
        self.sessions
            .retain(|_, session| session.last_seen.elapsed() < SESSION_IDLE_LIMIT);
    }

    fn new_id(&self) -> Result<String, AppError> {
        let mut bytes = [0u8; 16];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| AppError::Internal("Failed to generate session id".to_string()))?;
        Ok(hex::encode(bytes))
    }
}
