// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View state of the board page.
//!
//! The page is split in two. [`Listing`] (the activities list and the
//! activity select) is the same for everybody and is replaced in one step on
//! every render. [`VisitorState`] (the sign-up form and the message element)
//! belongs to a single visitor. [`BoardView`] puts the two together for
//! rendering.

use crate::error::DecodeError;
use crate::models::{Activity, ActivityCollection, MessageBox};
use urlencoding::{decode, encode};

/// Shown in place of the list when loading fails.
pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";

/// Shown in a card whose roster is empty.
pub const NO_PARTICIPANTS: &str = "No participants yet.";

/// Label of the blank first option of the activity select.
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Whole view of the board page, as one visitor sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub activities_list: ActivitiesList,
    pub activity_options: Vec<SelectOption>,
    pub form: SignupForm,
    pub message: MessageBox,
}

impl BoardView {
    pub fn new(listing: Listing, visitor: VisitorState) -> Self {
        Self {
            activities_list: listing.activities_list,
            activity_options: listing.activity_options,
            form: visitor.form,
            message: visitor.message,
        }
    }
}

/// Shared part of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub activities_list: ActivitiesList,
    pub activity_options: Vec<SelectOption>,
}

/// Per-visitor part of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitorState {
    pub form: SignupForm,
    pub message: MessageBox,
}

/// Contents of `#activities-list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActivitiesList {
    /// Nothing rendered yet (page markup's own loading text).
    #[default]
    Loading,
    Cards(Vec<ActivityCard>),
    LoadFailed,
}

impl ActivitiesList {
    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            ActivitiesList::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// One `.activity-card`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn from_activity(name: &str, activity: &Activity) -> Self {
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    target: UnregisterTarget {
                        activity: name.to_string(),
                        email: email.clone(),
                    },
                })
                .collect(),
        }
    }
}

/// One roster row with its unregister control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub target: UnregisterTarget,
}

impl ParticipantRow {
    pub fn email(&self) -> &str {
        &self.target.email
    }
}

/// What a `.delete-participant` button points at, in decoded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterTarget {
    pub activity: String,
    pub email: String,
}

impl UnregisterTarget {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }

    /// Value of the `data-activity` attribute.
    pub fn data_activity(&self) -> String {
        encode(&self.activity).into_owned()
    }

    /// Value of the `data-email` attribute.
    pub fn data_email(&self) -> String {
        encode(&self.email).into_owned()
    }

    /// Rebuild a target from its `data-activity`/`data-email` attributes.
    pub fn from_encoded(data_activity: &str, data_email: &str) -> Result<Self, DecodeError> {
        let activity = decode(data_activity).map_err(|_| DecodeError {
            field: "activity",
            value: data_activity.to_string(),
        })?;
        let email = decode(data_email).map_err(|_| DecodeError {
            field: "email",
            value: data_email.to_string(),
        })?;
        Ok(Self::new(activity, email))
    }

    /// Text of the confirmation prompt.
    pub fn prompt(&self) -> String {
        format!("Unregister {} from {}?", self.email, self.activity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }
}

/// `#signup-form` field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

impl Listing {
    /// Replace the list and the select options with `activities`.
    pub fn render_activities(&mut self, activities: &ActivityCollection) {
        let mut options = Vec::with_capacity(activities.len() + 1);
        options.push(SelectOption::placeholder());

        let mut cards = Vec::with_capacity(activities.len());
        for (name, activity) in activities.iter() {
            cards.push(ActivityCard::from_activity(name, activity));
            options.push(SelectOption {
                value: name.to_string(),
                label: name.to_string(),
            });
        }

        self.activities_list = ActivitiesList::Cards(cards);
        self.activity_options = options;
    }

    /// Replace the list with the failure notice. Select options are kept.
    pub fn render_load_failure(&mut self) {
        self.activities_list = ActivitiesList::LoadFailed;
    }
}
