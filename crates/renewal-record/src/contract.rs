//! Contract fetch result
//!
//! The slice of the contract service's response this workspace cares
//! about: the renewal list. Everything else rides along in `extra`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::renewal::Renewal;

/// Freshly fetched contract record
///
/// A missing `renewals` key and an empty list both mean "no renewal to
/// show", which is a valid, common case rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractInfo {
    /// Renewals associated with the contract, in upstream order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewals: Option<Vec<Renewal>>,
    /// Unrecognized keys, preserved in wire order
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ContractInfo {
    /// Create a contract record carrying the given renewals
    #[inline]
    #[must_use]
    pub fn with_renewals(renewals: Vec<Renewal>) -> Self {
        Self {
            renewals: Some(renewals),
            extra: IndexMap::new(),
        }
    }
}
