//! Renewal and invoice-attempt records
//!
//! Mirrors the contract service's wire shape: camelCase keys, optional
//! fields omitted rather than null, and any key this crate does not model
//! captured in `extra` and passed through untouched. Timestamps stay raw
//! strings here; parsing happens at the comparison that needs them (see
//! [`crate::timestamp`]).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::status::RenewalStatus;

/// Payment-intent status that marks an invoice attempt as retryable
pub const PI_REQUIRES_PAYMENT_METHOD: &str = "requires_payment_method";

/// Subscription status that marks an invoice attempt as retryable
pub const SUBSCRIPTION_INCOMPLETE: &str = "incomplete";

/// One invoice attempt recorded under a renewal
///
/// Carries the two sub-statuses that explain why a `processing` renewal
/// may have stalled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceAttempt {
    /// Payment-intent status reported by the payment provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pi_status: Option<String>,
    /// Subscription status at the time of the attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<String>,
    /// Unrecognized keys, preserved in wire order
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl InvoiceAttempt {
    /// Create an attempt with both sub-statuses set
    #[inline]
    #[must_use]
    pub fn new(
        pi_status: impl Into<String>,
        subscription_status: impl Into<String>,
    ) -> Self {
        Self {
            pi_status: Some(pi_status.into()),
            subscription_status: Some(subscription_status.into()),
            extra: IndexMap::new(),
        }
    }

    /// Check whether this attempt stalled on a missing or failed payment
    /// method, which makes the renewal retryable by the user
    #[inline]
    #[must_use]
    pub fn awaiting_payment_method(&self) -> bool {
        self.pi_status.as_deref() == Some(PI_REQUIRES_PAYMENT_METHOD)
            && self.subscription_status.as_deref() == Some(SUBSCRIPTION_INCOMPLETE)
    }
}

/// One subscription renewal attempt or window
///
/// Produced upstream and immutable as seen by this workspace: the
/// evaluator only reads and recombines fields into a new composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Renewal {
    /// Opaque identifier, unique among renewals of one account.
    /// Stable across fetches; the join key between cached and fresh copies.
    pub id: String,
    /// Lifecycle state; absence counts as "not currently renewable"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RenewalStatus>,
    /// Whether the billing backend currently allows any action at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actionable: Option<bool>,
    /// Raw instant at which the renewal window opens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Raw instant at which the renewal window closes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Raw instant of the last upstream modification; meaningful only for
    /// completed renewals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Ordered invoice attempts, newest semantics decided upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_invoices: Option<Vec<InvoiceAttempt>>,
    /// Unrecognized keys, preserved in wire order
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Renewal {
    /// Create a renewal with the given id and status
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, status: RenewalStatus) -> Self {
        Self {
            id: id.into(),
            status: Some(status),
            actionable: None,
            start: None,
            end: None,
            last_modified: None,
            stripe_invoices: None,
            extra: IndexMap::new(),
        }
    }

    /// With the backend actionability flag
    #[inline]
    #[must_use]
    pub fn with_actionable(mut self, actionable: bool) -> Self {
        self.actionable = Some(actionable);
        self
    }

    /// With the validity window bounds
    #[inline]
    #[must_use]
    pub fn with_window(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self.end = Some(end.into());
        self
    }

    /// With the last-modification instant
    #[inline]
    #[must_use]
    pub fn with_last_modified(mut self, last_modified: impl Into<String>) -> Self {
        self.last_modified = Some(last_modified.into());
        self
    }

    /// With the recorded invoice attempts
    #[inline]
    #[must_use]
    pub fn with_invoices(mut self, invoices: Vec<InvoiceAttempt>) -> Self {
        self.stripe_invoices = Some(invoices);
        self
    }
}
