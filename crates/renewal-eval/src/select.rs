//! Selection of the renewal under evaluation
//!
//! Upstream may attach several renewals to one contract. Which one the
//! view is built from is a policy choice, kept explicit as a tagged
//! strategy rather than hard-coded.

use chrono::{DateTime, Utc};
use renewal_record::{parse_instant, Renewal};

use crate::error::EvalError;

/// Policy for choosing which renewal to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// First entry in upstream order - default
    ///
    /// Trusts the contract service to surface the relevant renewal first.
    #[default]
    First,

    /// Entry whose window opens latest
    ///
    /// Entries without a `start` rank below any entry with one; ties keep
    /// the earliest-listed entry.
    MostRecentStart,

    /// First entry the backend still allows action on
    MostActionable,
}

/// Pick the renewal to evaluate, or `None` if there is nothing to show
///
/// An empty list is a valid, common outcome, not an error.
///
/// # Errors
///
/// `MostRecentStart` orders by parsed `start` instants, so a
/// present-but-unparseable `start` propagates as a data-format error.
pub fn select(
    policy: SelectionPolicy,
    renewals: &[Renewal],
) -> Result<Option<&Renewal>, EvalError> {
    match policy {
        SelectionPolicy::First => Ok(renewals.first()),
        SelectionPolicy::MostRecentStart => most_recent_start(renewals),
        SelectionPolicy::MostActionable => Ok(most_actionable(renewals)),
    }
}

fn most_recent_start(renewals: &[Renewal]) -> Result<Option<&Renewal>, EvalError> {
    let mut best: Option<(&Renewal, DateTime<Utc>)> = None;
    for renewal in renewals {
        let Some(raw) = renewal.start.as_deref() else {
            continue;
        };
        let start = parse_instant("start", raw)?;
        match best {
            Some((_, best_start)) if start <= best_start => {}
            _ => best = Some((renewal, start)),
        }
    }
    Ok(best.map(|(renewal, _)| renewal).or_else(|| renewals.first()))
}

fn most_actionable(renewals: &[Renewal]) -> Option<&Renewal> {
    renewals
        .iter()
        .find(|renewal| renewal.actionable == Some(true))
        .or_else(|| renewals.first())
}
