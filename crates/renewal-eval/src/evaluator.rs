//! Top-level evaluation pipeline
//!
//! Select → merge → eligibility → recency, in a straight line. The current
//! instant is an explicit parameter throughout so the whole pipeline is a
//! pure function of its inputs.

use chrono::{DateTime, Utc};
use renewal_record::{ContractInfo, Renewal, RenewalCache};
use serde::Serialize;
use tracing::debug;

use crate::eligibility::renewable;
use crate::error::EvalError;
use crate::merge::merge_renewal;
use crate::recency::recently_renewed;
use crate::select::{select, SelectionPolicy};

/// Display-ready renewal view: the composite record plus the derived flags
///
/// Serializes with the composite's fields (known and unknown) at the top
/// level, `renewable` alongside them, and `recently_renewed` only when a
/// verdict exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedRenewal {
    /// The composite renewal the flags were derived from
    #[serde(flatten)]
    pub renewal: Renewal,
    /// Whether the user may currently act on this renewal
    pub renewable: bool,
    /// Whether a completed renewal finished recently enough for a notice;
    /// attached only when the renewal is done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recently_renewed: Option<bool>,
}

/// Derives the renewal view shown on the account page
#[derive(Debug, Clone, Copy, Default)]
pub struct RenewalEvaluator {
    policy: SelectionPolicy,
}

impl RenewalEvaluator {
    /// Create an evaluator with the default first-entry selection policy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a selection policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Evaluate the contract's renewal against the cached account snapshot
    ///
    /// Returns `None` when the contract carries no renewal, a valid
    /// outcome distinct from "renewal exists but is not renewable".
    ///
    /// # Errors
    ///
    /// Propagates data-format errors from timestamps that were needed for
    /// a comparison but could not be read.
    pub fn evaluate(
        &self,
        contract_info: &ContractInfo,
        cache: &dyn RenewalCache,
        now: DateTime<Utc>,
    ) -> Result<Option<EvaluatedRenewal>, EvalError> {
        let renewals = contract_info.renewals.as_deref().unwrap_or_default();
        let Some(fresh) = select(self.policy, renewals)? else {
            debug!("contract carries no renewals");
            return Ok(None);
        };

        let composite = match cache.lookup(&fresh.id) {
            Some(cached) => {
                debug!(renewal_id = %fresh.id, "overlaying fresh fetch on cached copy");
                merge_renewal(cached, fresh)
            }
            None => fresh.clone(),
        };

        let renewable = renewable(&composite, now)?;
        let recently_renewed = recently_renewed(&composite, now)?;
        debug!(renewal_id = %composite.id, renewable, ?recently_renewed, "renewal evaluated");

        Ok(Some(EvaluatedRenewal {
            renewal: composite,
            renewable,
            recently_renewed,
        }))
    }
}

/// Evaluate with the default first-entry selection policy
///
/// # Errors
///
/// See [`RenewalEvaluator::evaluate`].
pub fn evaluate_renewal(
    contract_info: &ContractInfo,
    cache: &dyn RenewalCache,
    now: DateTime<Utc>,
) -> Result<Option<EvaluatedRenewal>, EvalError> {
    RenewalEvaluator::new().evaluate(contract_info, cache, now)
}
