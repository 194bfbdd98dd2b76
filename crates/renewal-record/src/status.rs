//! Renewal lifecycle status
//!
//! The contract service reports a renewal's state as a lowercase string.
//! Four states are meaningful to the evaluator; anything else is carried
//! verbatim in [`RenewalStatus::Other`] so a new upstream state never
//! breaks deserialization; it simply counts as "not currently renewable".

use serde::{Deserialize, Serialize};

/// Lifecycle state of a renewal as reported upstream
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RenewalStatus {
    /// Awaiting user action
    Pending,
    /// Payment has been initiated and is working its way through
    Processing,
    /// Renewal completed
    Done,
    /// Renewal window closed without completion
    Closed,
    /// Any status outside the known set, preserved verbatim
    Other(String),
}

impl RenewalStatus {
    /// Wire representation of this status
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            RenewalStatus::Pending => "pending",
            RenewalStatus::Processing => "processing",
            RenewalStatus::Done => "done",
            RenewalStatus::Closed => "closed",
            RenewalStatus::Other(other) => other.as_str(),
        }
    }

    /// Check whether the renewal is still moving through its lifecycle
    ///
    /// Only `pending` and `processing` renewals can possibly be acted on;
    /// `done`, `closed`, and unrecognized states are terminal here.
    #[inline]
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, RenewalStatus::Pending | RenewalStatus::Processing)
    }
}

impl From<String> for RenewalStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => RenewalStatus::Pending,
            "processing" => RenewalStatus::Processing,
            "done" => RenewalStatus::Done,
            "closed" => RenewalStatus::Closed,
            _ => RenewalStatus::Other(value),
        }
    }
}

impl From<RenewalStatus> for String {
    fn from(status: RenewalStatus) -> Self {
        match status {
            RenewalStatus::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for RenewalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
