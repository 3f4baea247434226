// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User confirmation before destructive actions.

/// Asks the user to confirm an action described by `prompt`.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A decision the user already made, e.g. on a confirmation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answered(pub bool);

impl Confirm for Answered {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
