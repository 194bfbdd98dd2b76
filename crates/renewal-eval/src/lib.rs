//! Renewal Evaluation
//!
//! The merge-and-decide core behind the account page's renewal panel:
//! given a fresh contract fetch, the cached account snapshot, and the
//! current instant, derive the display-ready view of the relevant renewal.
//!
//! The pipeline is linear and pure:
//!
//! 1. [`select`]: pick the renewal under evaluation ([`SelectionPolicy`])
//! 2. [`merge_renewal`]: overlay the fresh copy on the cached one
//! 3. [`renewable`]: may the user act on it right now?
//! 4. [`recently_renewed`]: did a completed renewal finish within the hour?
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use renewal_eval::evaluate_renewal;
//! use renewal_record::{AccountSnapshot, ContractInfo};
//!
//! let contract_info: ContractInfo = serde_json::from_str(
//!     r#"{"renewals": [{"id": "1", "status": "pending", "actionable": true}]}"#,
//! ).unwrap();
//!
//! let view = evaluate_renewal(&contract_info, &AccountSnapshot::new(), Utc::now())
//!     .unwrap()
//!     .expect("one renewal to show");
//! assert!(view.renewable);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod eligibility;
pub mod error;
pub mod evaluator;
pub mod merge;
pub mod recency;
pub mod select;

// Re-exports for convenience
pub use eligibility::renewable;
pub use error::EvalError;
pub use evaluator::{evaluate_renewal, EvaluatedRenewal, RenewalEvaluator};
pub use merge::merge_renewal;
pub use recency::recently_renewed;
pub use select::{select, SelectionPolicy};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
