//! Cached renewal lookup
//!
//! The evaluator pulls exactly one thing from the account side: a
//! previously fetched copy of a renewal, by id. That capability is kept
//! deliberately narrow so collaborators stay trivially mockable;
//! persistence and refresh of the snapshot belong to the caller.

use indexmap::IndexMap;

use crate::renewal::Renewal;

/// Lookup capability over the cached account snapshot
///
/// Synchronous and side-effect-free as observed by the evaluator. A
/// narrower fresh fetch may omit fields (for example `actionable`) that a
/// previous full fetch recorded; this is where those come back from.
#[cfg_attr(test, mockall::automock)]
pub trait RenewalCache {
    /// Return the cached copy of the renewal with this id, if one is held
    fn lookup(&self, id: &str) -> Option<Renewal>;
}

/// In-memory account snapshot keyed by renewal id
#[derive(Debug, Clone, Default)]
pub struct AccountSnapshot {
    renewals: IndexMap<String, Renewal>,
}

impl AccountSnapshot {
    /// Create an empty snapshot
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a renewal under its id, returning any previous copy
    pub fn insert(&mut self, renewal: Renewal) -> Option<Renewal> {
        self.renewals.insert(renewal.id.clone(), renewal)
    }

    /// Number of renewals held
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.renewals.len()
    }

    /// Check whether the snapshot holds nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renewals.is_empty()
    }
}

impl RenewalCache for AccountSnapshot {
    fn lookup(&self, id: &str) -> Option<Renewal> {
        self.renewals.get(id).cloned()
    }
}
