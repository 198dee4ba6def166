mod common;

use chrono::NaiveDate;
use expense_core::{core::services::SummaryService, domain::Expense};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn every_mutation_is_persisted_immediately() {
    let base = common::setup_base();

    let mut session = common::session_at(&base);
    session
        .add_expense(date(2024, 3, 1), Expense::new("Coffee", "food", 120.0))
        .unwrap();

    // A second session reads straight from disk.
    let reopened = common::session_at(&base);
    assert_eq!(reopened.ledger().record_count(), 1);
    assert_eq!(
        reopened
            .expense_at(date(2024, 3, 1), 0)
            .unwrap()
            .description,
        "Coffee"
    );
}

#[test]
fn no_empty_day_survives_any_add_remove_sequence() {
    let mut session = common::setup_session();
    let day_a = date(2024, 3, 1);
    let day_b = date(2024, 3, 2);

    session
        .add_expense(day_a, Expense::new("Coffee", "food", 100.0))
        .unwrap();
    session
        .add_expense(day_a, Expense::new("Lunch", "food", 250.0))
        .unwrap();
    session
        .add_expense(day_b, Expense::new("Bus", "travel", 45.0))
        .unwrap();

    session.remove_expense(day_a, 0).unwrap();
    session.remove_expense(day_a, 0).unwrap();

    assert_eq!(session.ledger().day_count(), 1);
    for (_, entries) in session.ledger().days() {
        assert!(!entries.is_empty());
    }
}

#[test]
fn stale_remove_changes_nothing_and_skips_no_day() {
    let mut session = common::setup_session();
    let day = date(2024, 3, 1);
    session
        .add_expense(day, Expense::new("Coffee", "food", 100.0))
        .unwrap();

    assert!(session.remove_expense(day, 3).unwrap().is_none());
    assert!(session
        .remove_expense(date(2024, 3, 2), 0)
        .unwrap()
        .is_none());
    assert_eq!(session.ledger().record_count(), 1);
}

#[test]
fn aggregates_recompute_from_session_state() {
    let mut session = common::setup_session();
    session
        .add_expense(date(2024, 3, 1), Expense::new("March", "x", 100.0))
        .unwrap();
    session
        .add_expense(date(2024, 4, 1), Expense::new("April", "x", 50.0))
        .unwrap();

    let ledger = session.ledger();
    assert_eq!(SummaryService::lifetime_total(ledger), 150.0);
    assert_eq!(
        SummaryService::month_total(ledger, date(2024, 3, 20)),
        100.0
    );
    assert_eq!(SummaryService::month_total(ledger, date(2024, 4, 5)), 50.0);
    assert_eq!(SummaryService::month_total(ledger, date(2025, 3, 1)), 0.0);
}
