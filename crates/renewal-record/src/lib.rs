//! Renewal Record Model
//!
//! Loosely-typed upstream records made explicit:
//!
//! - [`Renewal`]: one subscription renewal attempt or window
//! - [`RenewalStatus`]: closed lifecycle set with a pass-through variant
//!   for statuses this crate does not know about
//! - [`ContractInfo`]: the fresh fetch result from the contract service
//! - [`RenewalCache`]: lookup capability over the cached account snapshot
//!
//! Unknown wire fields are preserved, not rejected: upstream may attach
//! keys this crate has no opinion on, and they must survive a round trip.
//!
//! # Example
//!
//! ```rust
//! use renewal_record::{Renewal, RenewalStatus};
//!
//! let renewal: Renewal = serde_json::from_str(
//!     r#"{"id": "1", "status": "pending", "actionable": true}"#,
//! ).unwrap();
//!
//! assert_eq!(renewal.status, Some(RenewalStatus::Pending));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod cache;
mod contract;
mod renewal;
mod status;
mod timestamp;

// Re-exports
pub use cache::{AccountSnapshot, RenewalCache};
pub use contract::ContractInfo;
pub use renewal::{
    InvoiceAttempt, Renewal, PI_REQUIRES_PAYMENT_METHOD, SUBSCRIPTION_INCOMPLETE,
};
pub use status::RenewalStatus;
pub use timestamp::{parse_instant, TimestampError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
