#![allow(clippy::unwrap_used)]

use chrono::{Local, TimeZone};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn txn(id: i64, amount: Decimal, desc: &str, cat: &str) -> Transaction {
    let now = Local.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap();
    Transaction::new(id, amount, desc.into(), cat.into(), now)
}

fn settings(income: Decimal, limit: Decimal) -> BudgetSettings {
    BudgetSettings {
        monthly_income: income,
        spending_limit: limit,
        ..BudgetSettings::default()
    }
}

// ── Scenarios ─────────────────────────────────────────────────

#[test]
fn test_over_limit_scenario() {
    let txns = vec![
        txn(1, dec!(500), "Lunch", "Food"),
        txn(2, dec!(1800), "Rent partial", "Housing"),
    ];
    let summary = Summary::compute(&txns, &settings(dec!(5000), dec!(2000)));

    assert_eq!(summary.total_expenses, dec!(2300));
    assert_eq!(summary.balance, dec!(2700));
    assert!(summary.is_over_limit);
    assert_eq!(summary.limit_percent, dec!(115));
    assert_eq!(summary.limit_percent_display(), dec!(100));
    assert_eq!(
        summary.category_totals,
        vec![("Food".to_string(), dec!(500)), ("Housing".to_string(), dec!(1800))]
    );
}

#[test]
fn test_empty_without_limit() {
    let summary = Summary::compute(&[], &settings(Decimal::ZERO, Decimal::ZERO));
    assert_eq!(summary.total_expenses, Decimal::ZERO);
    assert_eq!(summary.limit_percent_display(), Decimal::ZERO);
    assert!(!summary.is_over_limit);
    assert!(summary.category_totals.is_empty());
}

// ── Balance ───────────────────────────────────────────────────

#[test]
fn test_balance_can_go_negative() {
    let txns = vec![txn(1, dec!(700), "TV", "Shopping")];
    let summary = Summary::compute(&txns, &settings(dec!(500), Decimal::ZERO));
    assert_eq!(summary.balance, dec!(-200));
    assert_eq!(summary.savings(), dec!(-200));
}

#[test]
fn test_balance_equals_income_minus_expenses() {
    let txns = vec![
        txn(1, dec!(10.10), "", "Food"),
        txn(2, dec!(0.90), "", "Food"),
        txn(3, dec!(89), "", "Bills"),
    ];
    let summary = Summary::compute(&txns, &settings(dec!(1000), dec!(50)));
    assert_eq!(summary.total_expenses, dec!(100));
    assert_eq!(summary.balance, dec!(900));
}

// ── Limit ─────────────────────────────────────────────────────

#[test]
fn test_zero_limit_never_warns() {
    let txns = vec![txn(1, dec!(1000000), "Yacht", "Shopping")];
    let summary = Summary::compute(&txns, &settings(Decimal::ZERO, Decimal::ZERO));
    assert!(!summary.is_over_limit);
    assert_eq!(summary.limit_percent, Decimal::ZERO);
}

#[test]
fn test_exactly_at_limit_is_not_over() {
    let txns = vec![txn(1, dec!(2000), "", "Housing")];
    let summary = Summary::compute(&txns, &settings(dec!(5000), dec!(2000)));
    assert!(!summary.is_over_limit);
    assert_eq!(summary.limit_percent_display(), dec!(100));
}

#[test]
fn test_partial_limit_percent() {
    let txns = vec![txn(1, dec!(500), "", "Food")];
    let summary = Summary::compute(&txns, &settings(dec!(5000), dec!(2000)));
    assert_eq!(summary.limit_percent, dec!(25));
    assert_eq!(summary.limit_percent_display(), dec!(25));
    assert!(!summary.is_over_limit);
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_category_totals_first_seen_order() {
    let txns = vec![
        txn(1, dec!(5), "", "Transport"),
        txn(2, dec!(7), "", "Food"),
        txn(3, dec!(3), "", "Transport"),
    ];
    assert_eq!(
        category_totals(&txns),
        vec![("Transport".to_string(), dec!(8)), ("Food".to_string(), dec!(7))]
    );
}

#[test]
fn test_category_totals_accept_any_label() {
    let txns = vec![txn(1, dec!(1), "", "Pet Supplies & Vet")];
    assert_eq!(
        category_totals(&txns),
        vec![("Pet Supplies & Vet".to_string(), dec!(1))]
    );
}

// ── Table ─────────────────────────────────────────────────────

#[test]
fn test_table_rows_keep_insertion_order() {
    let txns = vec![
        txn(30, dec!(1), "first", "Food"),
        txn(10, dec!(2), "second", "Bills"),
    ];
    let rows = table_rows(&txns);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 30);
    assert_eq!(rows[0].description, "first");
    assert_eq!(rows[1].category, "Bills");
    assert_eq!(rows[1].amount, dec!(2));
    assert_eq!(rows[1].date, "2/1/2025");
}
