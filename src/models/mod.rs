// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod feedback;

pub use activity::{Activity, ActivityCollection};
pub use feedback::{FeedbackMessage, MessageBox, MessageKind};
