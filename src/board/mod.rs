// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The activity board: loads activities into the view and runs the sign-up
//! and unregister actions.
//!
//! The activities list and the select are shared by every visitor. The form
//! and the message element belong to the [`Visitor`] that ran the action.
//!
//! There is no request sequencing. Overlapping actions are allowed and
//! whichever load finishes last decides what the list shows.

pub mod confirm;
pub mod render;
pub mod view;
pub mod visitor;

pub use confirm::{Answered, Confirm};
pub use view::{BoardView, Listing, UnregisterTarget, VisitorState};
pub use visitor::Visitor;

use crate::config::Config;
use crate::models::FeedbackMessage;
use crate::services::ActivitiesClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

const SIGNUP_FALLBACK: &str = "An error occurred";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const UNREGISTER_OK: &str = "Participant unregistered successfully.";
const UNREGISTER_FALLBACK: &str = "Failed to unregister participant.";
const UNREGISTER_FAILED: &str = "Failed to unregister participant. Please try again.";

/// Board context, built once at startup and shared by all handlers.
#[derive(Clone)]
pub struct ActivityBoard {
    client: ActivitiesClient,
    listing: Arc<RwLock<Listing>>,
    hide_after: Duration,
}

impl ActivityBoard {
    pub fn new(client: ActivitiesClient, hide_after: Duration) -> Self {
        Self {
            client,
            listing: Arc::new(RwLock::new(Listing::default())),
            hide_after,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ActivitiesClient::new(config.api_base_url.clone()),
            config.message_hide_after,
        )
    }

    /// Copy of the shared list and select.
    pub async fn listing(&self) -> Listing {
        self.listing.read().await.clone()
    }

    /// The page as `visitor` currently sees it.
    pub async fn snapshot(&self, visitor: &Visitor) -> BoardView {
        let listing = self.listing().await;
        BoardView::new(listing, visitor.state().await)
    }

    /// Fetch all activities and re-render the list and the select.
    ///
    /// On failure the list shows the failure notice and the select is left
    /// alone. Errors are logged, never returned.
    pub async fn load_activities(&self) {
        match self.client.fetch_activities().await {
            Ok(activities) => {
                tracing::info!(count = activities.len(), "Activities loaded");
                self.listing.write().await.render_activities(&activities);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching activities");
                self.listing.write().await.render_load_failure();
            }
        }
    }

    /// Sign `email` up for `activity` as if `visitor` had filled in and
    /// submitted the form. Returns the message that was shown.
    pub async fn submit_signup(
        &self,
        visitor: &Visitor,
        email: &str,
        activity: &str,
    ) -> FeedbackMessage {
        {
            let mut state = visitor.write().await;
            state.form.email = email.to_string();
            state.form.activity = activity.to_string();
        }

        match self.client.signup(activity, email).await {
            Ok(response) => {
                tracing::info!(activity, "Signed up");
                tracing::debug!(activity, email, "Sign-up participant");
                visitor.write().await.form.reset();
                let message = self
                    .show_message(visitor, FeedbackMessage::success(response.message))
                    .await;
                self.load_activities().await;
                message
            }
            Err(e) if e.is_rejection() => {
                tracing::warn!(activity, error = %e, "Sign-up rejected");
                let text = e.detail().unwrap_or(SIGNUP_FALLBACK);
                self.show_message(visitor, FeedbackMessage::error(text))
                    .await
            }
            Err(e) => {
                tracing::error!(activity, error = %e, "Error signing up");
                self.show_message(visitor, FeedbackMessage::error(SIGNUP_FAILED))
                    .await
            }
        }
    }

    /// Unregister a participant after `confirm` accepts the prompt.
    ///
    /// Returns `None`, without touching the network or the view, when the
    /// confirmation is declined.
    pub async fn unregister_participant(
        &self,
        visitor: &Visitor,
        target: &UnregisterTarget,
        confirm: &impl Confirm,
    ) -> Option<FeedbackMessage> {
        if !confirm.confirm(&target.prompt()) {
            tracing::debug!(activity = %target.activity, "Unregister cancelled");
            return None;
        }

        let message = match self.client.unregister(&target.activity, &target.email).await {
            Ok(()) => {
                tracing::info!(activity = %target.activity, "Unregistered");
                tracing::debug!(activity = %target.activity, email = %target.email, "Unregistered participant");
                let message = self
                    .show_message(visitor, FeedbackMessage::success(UNREGISTER_OK))
                    .await;
                self.load_activities().await;
                message
            }
            Err(e) if e.is_rejection() => {
                tracing::warn!(activity = %target.activity, error = %e, "Unregister rejected");
                let text = e.detail().unwrap_or(UNREGISTER_FALLBACK);
                self.show_message(visitor, FeedbackMessage::error(text))
                    .await
            }
            Err(e) => {
                tracing::error!(activity = %target.activity, error = %e, "Error unregistering");
                self.show_message(visitor, FeedbackMessage::error(UNREGISTER_FAILED))
                    .await
            }
        };

        Some(message)
    }

    async fn show_message(&self, visitor: &Visitor, message: FeedbackMessage) -> FeedbackMessage {
        visitor.write().await.message.show(message.clone());
        self.schedule_hide(visitor);
        message
    }

    /// Hide the visitor's message element once the delay passes. Earlier
    /// timers are not cancelled; each one hides whatever is showing when it
    /// fires.
    fn schedule_hide(&self, visitor: &Visitor) {
        let visitor = visitor.clone();
        let delay = self.hide_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            visitor.write().await.message.hide();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageKind;

    // Nothing listens on the discard port, so every request fails fast.
    fn offline_board(hide_after: Duration) -> ActivityBoard {
        ActivityBoard::new(ActivitiesClient::new("http://127.0.0.1:9"), hide_after)
    }

    #[tokio::test]
    async fn test_declined_confirmation_changes_nothing() {
        let board = offline_board(Duration::from_secs(5));
        let visitor = Visitor::new();
        let before = board.snapshot(&visitor).await;

        let target = UnregisterTarget::new("Chess Club", "a@x.com");
        let outcome = board
            .unregister_participant(&visitor, &target, &|prompt: &str| {
                assert_eq!(prompt, "Unregister a@x.com from Chess Club?");
                false
            })
            .await;

        assert!(outcome.is_none());
        assert_eq!(board.snapshot(&visitor).await, before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_hides_after_delay() {
        let board = offline_board(Duration::from_millis(5000));
        let visitor = Visitor::new();

        board
            .show_message(&visitor, FeedbackMessage::error("Something broke"))
            .await;
        assert_eq!(visitor.state().await.message.kind, Some(MessageKind::Error));

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert!(!visitor.state().await.message.hidden);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let message = visitor.state().await.message;
        assert!(message.hidden);
        assert_eq!(message.text, "Something broke");
    }

    #[tokio::test(start_paused = true)]
    async fn test_earlier_timer_still_fires() {
        let board = offline_board(Duration::from_millis(5000));
        let visitor = Visitor::new();

        board
            .show_message(&visitor, FeedbackMessage::error("first"))
            .await;
        tokio::time::sleep(Duration::from_millis(3000)).await;
        board
            .show_message(&visitor, FeedbackMessage::success("second"))
            .await;

        tokio::time::sleep(Duration::from_millis(2001)).await;
        let message = visitor.state().await.message;
        assert_eq!(message.text, "second");
        assert!(message.hidden);
    }

    #[tokio::test]
    async fn test_messages_stay_with_their_visitor() {
        let board = offline_board(Duration::from_secs(60));
        let alice = Visitor::new();
        let bob = Visitor::new();

        board.submit_signup(&alice, "alice@x.edu", "Chess Club").await;

        let alice_view = board.snapshot(&alice).await;
        assert_eq!(alice_view.form.email, "alice@x.edu");
        assert_eq!(alice_view.message.text, SIGNUP_FAILED);

        assert_eq!(bob.state().await, VisitorState::default());
    }
}
