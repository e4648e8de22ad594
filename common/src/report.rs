//! # Validation Report Model
//!
//! Shared vocabulary for validation outcomes.
//!
//! Every validator returns a [`Verdict`]: a VALID/INVALID status paired with a
//! human-readable message. Verdicts are plain values produced per call; nothing
//! here is persisted or shared between calls.

use std::fmt;

/// Overall outcome of a single validation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Valid,
    Invalid,
}

impl Status {
    pub fn is_valid(self) -> bool {
        matches!(self, Status::Valid)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Valid => write!(f, "VALID"),
            Status::Invalid => write!(f, "INVALID"),
        }
    }
}

/// Status plus message for one validated line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub status: Status,
    pub message: String,
}

impl Verdict {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            status: Status::Valid,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            status: Status::Invalid,
            message: message.into(),
        }
    }

    /// Renders the two-line report block used by every output surface:
    ///
    /// ```text
    /// <original input>
    ///    <message>.   <STATUS>
    /// ```
    pub fn render_block(&self, input: &str) -> String {
        format!("{}\n   {}.   {}", input, self.message, self.status)
    }
}
