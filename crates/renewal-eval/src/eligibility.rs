//! The `renewable` decision
//!
//! An ordered decision list; the first disqualifying rule wins. Every rule
//! fails closed: an absent `actionable`, an absent or unrecognized status,
//! or a processing renewal without a stalled-payment signal all come out
//! not renewable. Only the two-sided validity window reads the clock.

use chrono::{DateTime, Utc};
use renewal_record::{parse_instant, InvoiceAttempt, Renewal, RenewalStatus};

use crate::error::EvalError;

/// Decide whether the user may currently act on this renewal
///
/// Checked in order: backend actionability, lifecycle state, the inclusive
/// `[start, end]` validity window (only when both bounds are present), and
/// for `processing` renewals the stalled-payment signal on their invoice
/// attempts.
///
/// # Errors
///
/// A window bound that is present but unreadable once the window check is
/// reached propagates as a data-format error.
pub fn renewable(renewal: &Renewal, now: DateTime<Utc>) -> Result<bool, EvalError> {
    if !renewal.actionable.unwrap_or(false) {
        return Ok(false);
    }

    let status = match renewal.status.as_ref() {
        Some(status) if status.is_in_progress() => status,
        _ => return Ok(false),
    };

    if let (Some(start), Some(end)) = (renewal.start.as_deref(), renewal.end.as_deref()) {
        let start = parse_instant("start", start)?;
        let end = parse_instant("end", end)?;
        if now < start || now > end {
            return Ok(false);
        }
    }

    if *status == RenewalStatus::Processing {
        let invoices = renewal.stripe_invoices.as_deref().unwrap_or_default();
        return Ok(invoices.iter().any(InvoiceAttempt::awaiting_payment_method));
    }

    Ok(true)
}
