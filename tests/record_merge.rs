// tests/record_merge.rs
//
// Merge/derive semantics of JarRecord::apply, no I/O involved.

use jar_scrape::record::{JarRecord, progress_percent};
use jar_scrape::scrape::JarSnapshot;

fn snap(balance: u64, goal: u64, title: &str) -> JarSnapshot {
    JarSnapshot { balance, goal, title: title.to_string() }
}

#[test]
fn default_record_matches_first_run_shape() {
    let r = JarRecord::default();
    assert_eq!(r.jar_id, "7Y88YyV1uA");
    assert_eq!(r.title, "CASE-31");
    assert_eq!(r.balance, 0);
    assert_eq!(r.goal, 115_000);
    assert_eq!(r.remaining, 115_000);
    assert_eq!(r.progress_percent, 0.0);
    assert_eq!(r.currency, "UAH");
    assert_eq!(r.updated_at, None);
    assert!(r.history.is_empty());
    assert_eq!(r.metadata.case_id, "31");
}

#[test]
fn apply_derives_remaining_and_progress() {
    let mut r = JarRecord::default();
    r.apply(&snap(50_000, 115_000, "Збір"), "2026-08-28T12:00:00Z");

    assert_eq!(r.balance, 50_000);
    assert_eq!(r.goal, 115_000);
    assert_eq!(r.remaining, 65_000);
    assert_eq!(r.progress_percent, 43.48);
    assert_eq!(r.title, "Збір");
    assert_eq!(r.updated_at.as_deref(), Some("2026-08-28T12:00:00Z"));
    assert_eq!(r.history.len(), 1);
    assert_eq!(r.history[0].balance, 50_000);
    assert_eq!(r.history[0].timestamp, "2026-08-28T12:00:00Z");
}

#[test]
fn balance_over_goal_clamps_remaining() {
    let mut r = JarRecord::default();
    r.apply(&snap(120_000, 115_000, "t"), "2026-08-28T12:00:00Z");
    assert_eq!(r.remaining, 0);
    assert_eq!(r.progress_percent, 104.35);
}

#[test]
fn zero_goal_keeps_previous_goal() {
    let mut r = JarRecord::default();
    r.apply(&snap(10, 0, "t"), "2026-08-28T12:00:00Z");
    assert_eq!(r.goal, 115_000, "scraped zero goal must not clobber");
    assert_eq!(r.remaining, 114_990);
}

#[test]
fn empty_title_keeps_previous_title() {
    let mut r = JarRecord::default();
    r.apply(&snap(10, 100, "Нова назва"), "2026-08-28T12:00:00Z");
    r.apply(&snap(20, 100, ""), "2026-08-28T12:01:00Z");
    assert_eq!(r.title, "Нова назва");
}

#[test]
fn unchanged_balance_appends_nothing() {
    let mut r = JarRecord::default();
    r.apply(&snap(50_000, 115_000, "t"), "2026-08-28T12:00:00Z");
    r.apply(&snap(50_000, 115_000, "t"), "2026-08-28T12:05:00Z");

    assert_eq!(r.history.len(), 1, "consecutive equal readings dedup");
    // The record itself still moves forward.
    assert_eq!(r.updated_at.as_deref(), Some("2026-08-28T12:05:00Z"));
    assert_eq!(r.progress_percent, 43.48);
}

#[test]
fn changed_balance_appends_in_order() {
    let mut r = JarRecord::default();
    r.apply(&snap(100, 1_000, "t"), "2026-08-28T10:00:00Z");
    r.apply(&snap(100, 1_000, "t"), "2026-08-28T11:00:00Z");
    r.apply(&snap(250, 1_000, "t"), "2026-08-28T12:00:00Z");
    r.apply(&snap(250, 1_000, "t"), "2026-08-28T13:00:00Z");
    r.apply(&snap(200, 1_000, "t"), "2026-08-28T14:00:00Z");

    let balances: Vec<u64> = r.history.iter().map(|h| h.balance).collect();
    assert_eq!(balances, vec![100, 250, 200]);
    assert_eq!(r.history[2].timestamp, "2026-08-28T14:00:00Z");
}

#[test]
fn progress_percent_rounding() {
    assert_eq!(progress_percent(50_000, 115_000), 43.48);
    assert_eq!(progress_percent(1, 3), 33.33);
    assert_eq!(progress_percent(2, 3), 66.67);
    assert_eq!(progress_percent(0, 100), 0.0);
    assert_eq!(progress_percent(100, 100), 100.0);
    assert_eq!(progress_percent(5, 0), 0.0);
}
