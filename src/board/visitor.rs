// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Handle on one visitor's form and message state.

use super::view::VisitorState;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockWriteGuard};

/// Cheap to clone; clones share the same state. Hide timers keep their own
/// clone, so a message still hides after the visitor's session is dropped.
#[derive(Debug, Clone, Default)]
pub struct Visitor {
    state: Arc<RwLock<VisitorState>>,
}

impl Visitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the visitor's current state.
    pub async fn state(&self) -> VisitorState {
        self.state.read().await.clone()
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, VisitorState> {
        self.state.write().await
    }
}
