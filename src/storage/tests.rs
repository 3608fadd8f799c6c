#![allow(clippy::unwrap_used)]

use chrono::{Local, TimeZone};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::db::{Database, MemoryStore};

fn txn(id: i64, amount: Decimal, desc: &str, cat: &str) -> Transaction {
    let now = Local.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
    Transaction::new(id, amount, desc.into(), cat.into(), now)
}

fn sample_settings() -> BudgetSettings {
    BudgetSettings {
        monthly_income: dec!(5000),
        spending_limit: dec!(2000),
        savings_goal: dec!(1000),
        user_name: "Kiran".into(),
    }
}

// ── Defaults ──────────────────────────────────────────────────

#[test]
fn test_load_empty_store_uses_defaults() {
    let store = MemoryStore::default();
    let snapshot = load(&store).unwrap();
    assert!(snapshot.transactions.is_empty());
    assert_eq!(snapshot.settings, BudgetSettings::default());
    assert_eq!(snapshot.last_month_total, None);
}

#[test]
fn test_load_unparseable_entries_use_defaults() {
    let mut store = MemoryStore::default();
    store.set(KEY_TRANSACTIONS, "not json").unwrap();
    store.set(KEY_INCOME, "NaN").unwrap();
    store.set(KEY_LIMIT, "").unwrap();
    store.set(KEY_GOAL, "abc").unwrap();
    store.set(KEY_NAME, "").unwrap();

    let snapshot = load(&store).unwrap();
    assert!(snapshot.transactions.is_empty());
    assert_eq!(snapshot.settings, BudgetSettings::default());
}

#[test]
fn test_load_null_transactions_is_empty() {
    let mut store = MemoryStore::default();
    store.set(KEY_TRANSACTIONS, "null").unwrap();
    assert!(load(&store).unwrap().transactions.is_empty());
}

// ── Round trip ────────────────────────────────────────────────

#[test]
fn test_save_then_load_restores_state() {
    let mut store = MemoryStore::default();
    let txns = vec![
        txn(1, dec!(500), "Lunch", "Food"),
        txn(2, dec!(1800), "Rent partial", "Housing"),
        txn(3, dec!(12.34), "", "Food"),
    ];
    let settings = sample_settings();

    save(&mut store, &txns, &settings).unwrap();
    let snapshot = load(&store).unwrap();

    assert_eq!(snapshot.transactions, txns);
    assert_eq!(snapshot.settings, settings);
    assert_eq!(
        crate::summary::category_totals(&snapshot.transactions),
        crate::summary::category_totals(&txns)
    );
}

#[test]
fn test_save_then_load_through_database() {
    let mut db = Database::open_in_memory().unwrap();
    let txns = vec![txn(10, dec!(99.99), "Shoes, red", "Shopping")];
    save(&mut db, &txns, &sample_settings()).unwrap();

    let snapshot = load(&db).unwrap();
    assert_eq!(snapshot.transactions, txns);
    assert_eq!(snapshot.settings.user_name, "Kiran");
}

#[test]
fn test_saved_layout_is_textual() {
    let mut store = MemoryStore::default();
    save(&mut store, &[txn(1, dec!(5), "Tea", "Food")], &sample_settings()).unwrap();

    assert_eq!(store.get(KEY_INCOME).unwrap().as_deref(), Some("5000"));
    assert_eq!(store.get(KEY_LIMIT).unwrap().as_deref(), Some("2000"));
    assert_eq!(store.get(KEY_GOAL).unwrap().as_deref(), Some("1000"));
    assert_eq!(store.get(KEY_NAME).unwrap().as_deref(), Some("Kiran"));
    let json = store.get(KEY_TRANSACTIONS).unwrap().unwrap();
    assert!(json.starts_with(r#"[{"id":1,"amount":5.0,"desc":"Tea","cat":"Food""#));
}

#[test]
fn test_save_does_not_touch_last_month() {
    let mut store = MemoryStore::default();
    save(&mut store, &[], &sample_settings()).unwrap();
    assert_eq!(store.get(KEY_LAST_MONTH).unwrap(), None);
}

// ── Last month ────────────────────────────────────────────────

#[test]
fn test_last_month_overwrites() {
    let mut store = MemoryStore::default();
    save_last_month(&mut store, dec!(120)).unwrap();
    save_last_month(&mut store, dec!(2300.50)).unwrap();
    assert_eq!(store.get(KEY_LAST_MONTH).unwrap().as_deref(), Some("2300.5"));
    assert_eq!(load(&store).unwrap().last_month_total, Some(dec!(2300.5)));
}

// ── Integrity ─────────────────────────────────────────────────

#[test]
fn test_load_drops_duplicate_ids() {
    let mut store = MemoryStore::default();
    store
        .set(
            KEY_TRANSACTIONS,
            r#"[{"id":5,"amount":10,"desc":"a","cat":"Food","date":"1/1/2025"},
                {"id":5,"amount":20,"desc":"b","cat":"Food","date":"1/1/2025"},
                {"id":6,"amount":30,"desc":"c","cat":"Bills","date":"1/1/2025"}]"#,
        )
        .unwrap();

    let snapshot = load(&store).unwrap();
    let ids: Vec<i64> = snapshot.transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![5, 6]);
    assert_eq!(snapshot.transactions[0].description, "a");
}

#[test]
fn test_load_skips_unreadable_record_only() {
    let mut store = MemoryStore::default();
    store
        .set(
            KEY_TRANSACTIONS,
            r#"[{"id":1,"amount":500,"desc":"a","cat":"Food","date":"1/1/2025"},
                {"id":2,"amount":7.922816251426434e28,"desc":"b","cat":"Bills","date":"1/1/2025"},
                {"id":3,"desc":"no amount","cat":"Bills","date":"1/1/2025"},
                {"id":4,"amount":12.5,"desc":"d","cat":"Health","date":"1/1/2025"}]"#,
        )
        .unwrap();

    let snapshot = load(&store).unwrap();
    let ids: Vec<i64> = snapshot.transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 4]);
    assert_eq!(snapshot.transactions[1].amount, dec!(12.5));
}
