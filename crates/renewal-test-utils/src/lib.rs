//! Testing utilities for the renewal workspace
//!
//! Shared fixtures: renewal builders around a fixed instant, the
//! stalled-invoice attempt, and snapshot construction. Tests inject their
//! own `now`; nothing here reads the wall clock.

#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use renewal_record::{AccountSnapshot, InvoiceAttempt, Renewal, RenewalStatus};

/// A fixed instant for deterministic tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
}

/// RFC 3339 rendering of an instant, as the contract service emits it.
pub fn iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339()
}

/// An instant offset from `now` by whole days, rendered for the wire.
pub fn days_from(now: DateTime<Utc>, days: i64) -> String {
    iso(now + Duration::days(days))
}

/// A pending, actionable renewal whose window spans `now`.
pub fn current_pending_renewal(id: &str, now: DateTime<Utc>) -> Renewal {
    Renewal::new(id, RenewalStatus::Pending)
        .with_actionable(true)
        .with_window(days_from(now, -1), days_from(now, 1))
}

/// A processing, actionable renewal whose window spans `now`.
pub fn current_processing_renewal(id: &str, now: DateTime<Utc>) -> Renewal {
    Renewal::new(id, RenewalStatus::Processing)
        .with_actionable(true)
        .with_window(days_from(now, -1), days_from(now, 1))
}

/// A completed renewal last modified at the given instant.
pub fn done_renewal(id: &str, last_modified: DateTime<Utc>) -> Renewal {
    Renewal::new(id, RenewalStatus::Done)
        .with_actionable(false)
        .with_last_modified(iso(last_modified))
}

/// The invoice attempt that marks a processing renewal as retryable.
pub fn stalled_invoice() -> InvoiceAttempt {
    InvoiceAttempt::new("requires_payment_method", "incomplete")
}

/// An account snapshot holding the given renewals.
pub fn snapshot_with(renewals: Vec<Renewal>) -> AccountSnapshot {
    let mut snapshot = AccountSnapshot::new();
    for renewal in renewals {
        snapshot.insert(renewal);
    }
    snapshot
}
