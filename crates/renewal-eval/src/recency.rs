//! The `recently_renewed` notice decision
//!
//! Only completed renewals get a verdict at all; for anything else the
//! field stays off the output entirely rather than defaulting.

use chrono::{DateTime, Duration, Utc};
use renewal_record::{parse_instant, Renewal, RenewalStatus};

use crate::error::EvalError;

/// How long after completion a renewal still warrants a success notice
fn recent_window() -> Duration {
    Duration::hours(1)
}

/// For completed renewals, decide whether they finished within the notice
/// window; elapsed time is real wall-clock duration, not calendar
/// arithmetic
///
/// Returns `None` unless the renewal's status is `done`. A completed
/// renewal with no recorded `lastModified` yields `Some(false)`.
///
/// # Errors
///
/// A `lastModified` that is present but unreadable propagates as a
/// data-format error.
pub fn recently_renewed(
    renewal: &Renewal,
    now: DateTime<Utc>,
) -> Result<Option<bool>, EvalError> {
    if renewal.status != Some(RenewalStatus::Done) {
        return Ok(None);
    }

    let Some(raw) = renewal.last_modified.as_deref() else {
        return Ok(Some(false));
    };
    let last_modified = parse_instant("lastModified", raw)?;

    Ok(Some(now - last_modified < recent_window()))
}
