//! End-to-end evaluation against the payload shapes the contract service
//! actually returns.

use chrono::Duration;
use pretty_assertions::assert_eq;
use renewal_eval::evaluate_renewal;
use renewal_record::{AccountSnapshot, ContractInfo, Renewal, RenewalStatus};
use renewal_test_utils::{
    current_pending_renewal, current_processing_renewal, days_from, done_renewal, fixed_now, iso,
    snapshot_with, stalled_invoice,
};
use serde_json::json;

fn contract(value: serde_json::Value) -> ContractInfo {
    serde_json::from_value(value).unwrap()
}

#[test]
fn no_renewals_key_yields_no_view() {
    let result = evaluate_renewal(&contract(json!({})), &AccountSnapshot::new(), fixed_now());
    assert!(result.unwrap().is_none());
}

#[test]
fn empty_renewal_list_yields_no_view() {
    let result = evaluate_renewal(
        &contract(json!({"renewals": []})),
        &AccountSnapshot::new(),
        fixed_now(),
    );
    assert!(result.unwrap().is_none());
}

#[test]
fn processing_refetch_is_merged_over_the_cached_copy() {
    // The narrow poll for a processing renewal omits `actionable`; the
    // snapshot still holds it from the last full fetch.
    let cached = Renewal::new("1", RenewalStatus::Processing).with_actionable(false);
    let info = contract(json!({"renewals": [{"id": "1", "status": "processing"}]}));

    let view = evaluate_renewal(&info, &snapshot_with(vec![cached]), fixed_now())
        .unwrap()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "id": "1",
            "actionable": false,
            "status": "processing",
            "renewable": false,
        })
    );
}

#[test]
fn not_actionable_renewals_are_not_renewable() {
    let info = contract(json!({
        "renewals": [{"id": "1", "status": "pending", "actionable": false}],
    }));

    let view = evaluate_renewal(&info, &AccountSnapshot::new(), fixed_now())
        .unwrap()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "id": "1",
            "status": "pending",
            "actionable": false,
            "renewable": false,
        })
    );
}

#[test]
fn renewals_completed_just_now_are_recently_renewed() {
    let now = fixed_now();
    let info = ContractInfo::with_renewals(vec![done_renewal("1", now)]);

    let view = evaluate_renewal(&info, &AccountSnapshot::new(), now)
        .unwrap()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "id": "1",
            "status": "done",
            "actionable": false,
            "lastModified": iso(now),
            "renewable": false,
            "recently_renewed": true,
        })
    );
}

#[test]
fn renewals_completed_hours_ago_are_not_recently_renewed() {
    let now = fixed_now();
    let info = ContractInfo::with_renewals(vec![done_renewal("1", now - Duration::hours(2))]);

    let view = evaluate_renewal(&info, &AccountSnapshot::new(), now)
        .unwrap()
        .unwrap();
    assert_eq!(view.recently_renewed, Some(false));
    assert!(!view.renewable);
}

#[test]
fn not_renewable_before_the_window_starts() {
    let now = fixed_now();
    let info = contract(json!({
        "renewals": [{
            "id": "1",
            "status": "pending",
            "actionable": true,
            "start": days_from(now, 1),
            "end": days_from(now, 2),
        }],
    }));

    let view = evaluate_renewal(&info, &AccountSnapshot::new(), now)
        .unwrap()
        .unwrap();
    assert!(!view.renewable);
}

#[test]
fn not_renewable_after_the_window_ends() {
    let now = fixed_now();
    let info = contract(json!({
        "renewals": [{
            "id": "1",
            "status": "pending",
            "actionable": true,
            "start": days_from(now, -2),
            "end": days_from(now, -1),
        }],
    }));

    let view = evaluate_renewal(&info, &AccountSnapshot::new(), now)
        .unwrap()
        .unwrap();
    assert!(!view.renewable);
}

#[test]
fn current_actionable_pending_renewals_are_renewable() {
    let now = fixed_now();
    let info = ContractInfo::with_renewals(vec![current_pending_renewal("1", now)]);

    let view = evaluate_renewal(&info, &AccountSnapshot::new(), now)
        .unwrap()
        .unwrap();
    assert!(view.renewable);
    assert_eq!(view.recently_renewed, None);
}

#[test]
fn closed_renewals_are_not_renewable_even_inside_the_window() {
    let now = fixed_now();
    let mut renewal = current_pending_renewal("1", now);
    renewal.status = Some(RenewalStatus::Closed);
    let info = ContractInfo::with_renewals(vec![renewal]);

    let view = evaluate_renewal(&info, &AccountSnapshot::new(), now)
        .unwrap()
        .unwrap();
    assert!(!view.renewable);
}

#[test]
fn processing_renewals_are_renewable_when_stalled_on_payment() {
    let now = fixed_now();
    let renewal = current_processing_renewal("1", now).with_invoices(vec![stalled_invoice()]);
    let info = ContractInfo::with_renewals(vec![renewal.clone()]);

    let view = evaluate_renewal(&info, &snapshot_with(vec![renewal]), now)
        .unwrap()
        .unwrap();
    assert!(view.renewable);
}

#[test]
fn processing_renewals_without_invoices_are_not_renewable() {
    let now = fixed_now();
    let renewal = current_processing_renewal("1", now);
    let info = ContractInfo::with_renewals(vec![renewal.clone()]);

    let view = evaluate_renewal(&info, &snapshot_with(vec![renewal]), now)
        .unwrap()
        .unwrap();
    assert!(!view.renewable);
}

#[test]
fn recently_renewed_key_is_absent_unless_done() {
    let now = fixed_now();
    let info = ContractInfo::with_renewals(vec![current_pending_renewal("1", now)]);

    let view = evaluate_renewal(&info, &AccountSnapshot::new(), now)
        .unwrap()
        .unwrap();
    let wire = serde_json::to_value(&view).unwrap();
    assert!(wire.get("recently_renewed").is_none());
    assert_eq!(wire["renewable"], json!(true));
}

#[test]
fn unknown_keys_from_both_sources_reach_the_output() {
    let now = fixed_now();
    let mut cached = current_pending_renewal("1", now);
    cached
        .extra
        .insert("number".to_owned(), json!("UA-007"));
    let info = contract(json!({
        "renewals": [{
            "id": "1",
            "status": "pending",
            "actionable": true,
            "contractId": "c-42",
        }],
    }));

    let view = evaluate_renewal(&info, &snapshot_with(vec![cached]), now)
        .unwrap()
        .unwrap();
    let wire = serde_json::to_value(&view).unwrap();
    assert_eq!(wire["contractId"], json!("c-42"));
    assert_eq!(wire["number"], json!("UA-007"));
    // The cached window survives the narrow fresh fetch too.
    assert_eq!(wire["start"], json!(days_from(now, -1)));
}

#[test]
fn snapshot_timestamps_in_the_older_encoding_still_compare() {
    let now = fixed_now();
    let cached = Renewal::new("1", RenewalStatus::Pending)
        .with_actionable(true)
        .with_window("2026-08-06 12:00:00+00:00", "2026-08-08 12:00:00+00:00");
    let info = contract(json!({"renewals": [{"id": "1", "status": "pending"}]}));

    let view = evaluate_renewal(&info, &snapshot_with(vec![cached]), now)
        .unwrap()
        .unwrap();
    assert!(view.renewable);
}

#[test]
fn unreadable_timestamps_propagate_as_errors() {
    let info = contract(json!({
        "renewals": [{
            "id": "1",
            "status": "done",
            "lastModified": "a fortnight past",
        }],
    }));

    let result = evaluate_renewal(&info, &AccountSnapshot::new(), fixed_now());
    assert!(result.is_err());
}

#[test]
fn evaluation_is_repeatable() {
    let now = fixed_now();
    let cached = Renewal::new("1", RenewalStatus::Processing).with_actionable(false);
    let info = contract(json!({"renewals": [{"id": "1", "status": "processing"}]}));
    let cache = snapshot_with(vec![cached]);

    let first = evaluate_renewal(&info, &cache, now).unwrap();
    let second = evaluate_renewal(&info, &cache, now).unwrap();
    assert_eq!(first, second);
}
