// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Transient feedback shown in the message area.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class applied to the message element.
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// A message produced by a board action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl FeedbackMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

/// State of the `#message` element.
///
/// Starts hidden and empty. Showing a message overwrites the previous one;
/// hiding keeps the text so the element looks like the page after the class
/// toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBox {
    pub text: String,
    pub kind: Option<MessageKind>,
    pub hidden: bool,
}

impl Default for MessageBox {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: None,
            hidden: true,
        }
    }
}

impl MessageBox {
    pub fn show(&mut self, message: FeedbackMessage) {
        self.text = message.text;
        self.kind = Some(message.kind);
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// The message currently visible, if any.
    pub fn visible(&self) -> Option<FeedbackMessage> {
        match (self.hidden, self.kind) {
            (false, Some(kind)) => Some(FeedbackMessage {
                text: self.text.clone(),
                kind,
            }),
            _ => None,
        }
    }
}
