//! Reconciliation of cached and fresh renewal copies
//!
//! The fresh fetch is the source of truth for what changed, but it may be
//! narrower than the fetch that populated the account snapshot. The merge
//! is therefore directional: start from the cached copy, let every field
//! the fresh copy carries win, keep cached-only fields.

use renewal_record::Renewal;

/// Merge the cached copy of a renewal with its freshly fetched copy
///
/// Guarantees: the composite's `id` equals the fresh record's `id`, and no
/// field is dropped unless it is absent from both sources. Unknown keys
/// merge the same way, key by key, with fresh values winning.
#[must_use]
pub fn merge_renewal(cached: Renewal, fresh: &Renewal) -> Renewal {
    let mut extra = cached.extra;
    for (key, value) in &fresh.extra {
        extra.insert(key.clone(), value.clone());
    }

    Renewal {
        id: fresh.id.clone(),
        status: fresh.status.clone().or(cached.status),
        actionable: fresh.actionable.or(cached.actionable),
        start: fresh.start.clone().or(cached.start),
        end: fresh.end.clone().or(cached.end),
        last_modified: fresh.last_modified.clone().or(cached.last_modified),
        stripe_invoices: fresh.stripe_invoices.clone().or(cached.stripe_invoices),
        extra,
    }
}
