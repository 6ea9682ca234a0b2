//! Delete-with-confirmation flow for a contract.
//!
//! The typed keyword is a friction control, not a security boundary: the
//! destructive call is only enabled once the user has typed it.
//!
//! ```text
//! Idle --request--> Confirming --confirm(keyword)--> Deleting --ok--> Idle
//!                      ^   |                            |
//!                      |   +--cancel--> Idle            |
//!                      +-----------failure--------------+
//! ```

#[cfg(test)]
#[path = "delete_test.rs"]
mod delete_test;

/// Keyword the user must type (any case) to enable deletion.
pub const CONFIRM_KEYWORD: &str = "delete";

/// Message used when the backend answers `{"success": false}`.
pub const PARTIAL_DELETE_MESSAGE: &str = "Failed to delete contract completely. Some data may remain.";

/// Contract being deleted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: String,
    pub filename: String,
}

/// Delete dialog state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    Confirming {
        target: DeleteTarget,
        input: String,
        error: Option<String>,
    },
    Deleting {
        target: DeleteTarget,
        input: String,
    },
}

/// Whether `input` matches the confirmation keyword.
#[must_use]
pub fn keyword_matches(input: &str) -> bool {
    input.eq_ignore_ascii_case(CONFIRM_KEYWORD)
}

impl DeleteFlow {
    /// Open the dialog for `target`. Ignored while a delete is in flight.
    pub fn request(&mut self, target: DeleteTarget) {
        if matches!(self, Self::Deleting { .. }) {
            return;
        }
        *self = Self::Confirming { target, input: String::new(), error: None };
    }

    /// Update the typed confirmation text.
    pub fn set_input(&mut self, value: String) {
        if let Self::Confirming { input, .. } = self {
            *input = value;
        }
    }

    /// Whether the destructive action is currently enabled.
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        matches!(self, Self::Confirming { input, .. } if keyword_matches(input))
    }

    /// Move to `Deleting` and return the id to delete, if the keyword matches.
    ///
    /// Any other state or text leaves the flow untouched.
    pub fn confirm(&mut self) -> Option<String> {
        if !self.can_confirm() {
            return None;
        }
        let Self::Confirming { target, input, .. } = std::mem::take(self) else {
            return None;
        };
        let id = target.id.clone();
        *self = Self::Deleting { target, input };
        Some(id)
    }

    /// The backend confirmed deletion; returns the removed id.
    pub fn on_success(&mut self) -> Option<String> {
        let Self::Deleting { target, .. } = self else {
            return None;
        };
        let id = target.id.clone();
        *self = Self::Idle;
        Some(id)
    }

    /// The delete failed; stay in the dialog with the error and typed text kept.
    pub fn on_failure(&mut self, message: String) {
        if !self.is_deleting() {
            return;
        }
        if let Self::Deleting { target, input } = std::mem::take(self) {
            *self = Self::Confirming { target, input, error: Some(message) };
        }
    }

    /// Close the dialog. Not allowed while the request is in flight.
    pub fn cancel(&mut self) {
        if matches!(self, Self::Confirming { .. }) {
            *self = Self::Idle;
        }
    }

    #[must_use]
    pub fn target(&self) -> Option<&DeleteTarget> {
        match self {
            Self::Idle => None,
            Self::Confirming { target, .. } | Self::Deleting { target, .. } => Some(target),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Confirming { input, .. } | Self::Deleting { input, .. } => input,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Confirming { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        matches!(self, Self::Deleting { .. })
    }
}
