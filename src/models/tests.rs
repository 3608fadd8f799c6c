#![allow(clippy::unwrap_used)]

use chrono::{Local, TimeZone};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::settings::DEFAULT_USER_NAME;
use super::transaction::format_date;
use super::*;

fn fixed_now() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 7, 14, 30, 0).unwrap()
}

// ── Amount parsing ────────────────────────────────────────────

#[test]
fn test_parse_amount_positive() {
    assert_eq!(parse_amount("500"), Some(dec!(500)));
    assert_eq!(parse_amount("12.34"), Some(dec!(12.34)));
    assert_eq!(parse_amount("  0.01 "), Some(dec!(0.01)));
}

#[test]
fn test_parse_amount_rejects_non_positive() {
    assert_eq!(parse_amount("0"), None);
    assert_eq!(parse_amount("0.00"), None);
    assert_eq!(parse_amount("-5"), None);
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("   "), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("12abc"), None);
}

#[test]
fn test_parse_amount_rounds_to_cents() {
    assert_eq!(parse_amount("0.12345678901234567891"), Some(dec!(0.12)));
    assert_eq!(parse_amount("2.005"), Some(dec!(2.01)));
    assert_eq!(parse_amount("0.004"), None);
}

#[test]
fn test_parse_amount_caps_at_max() {
    assert_eq!(parse_amount("1000000000"), Some(MAX_AMOUNT));
    assert_eq!(parse_amount("1000000000.01"), None);
    assert_eq!(parse_amount("79228162514264337593543950335"), None);
}

#[test]
fn test_plain_amount_drops_trailing_zeros() {
    assert_eq!(plain_amount(dec!(500.00)), "500");
    assert_eq!(plain_amount(dec!(12.50)), "12.5");
    assert_eq!(plain_amount(dec!(0.01)), "0.01");
}

#[test]
fn test_parse_id() {
    assert_eq!(parse_id("1700000000000"), Some(1_700_000_000_000));
    assert_eq!(parse_id(" 42 "), Some(42));
    assert_eq!(parse_id("x"), None);
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_transaction_new_sets_date() {
    let txn = Transaction::new(1, dec!(9.99), "Coffee".into(), "Food".into(), fixed_now());
    assert_eq!(txn.date, "3/7/2025");
    assert_eq!(txn.amount, dec!(9.99));
    assert_eq!(txn.category, "Food");
}

#[test]
fn test_format_date_no_padding() {
    let now = Local.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
    assert_eq!(format_date(now), "12/25/2024");
}

#[test]
fn test_transaction_json_field_names() {
    let txn = Transaction::new(7, dec!(500), "Lunch".into(), "Food".into(), fixed_now());
    let json = serde_json::to_string(&txn).unwrap();
    assert_eq!(
        json,
        r#"{"id":7,"amount":500.0,"desc":"Lunch","cat":"Food","date":"3/7/2025"}"#
    );
}

#[test]
fn test_transaction_json_reads_integer_and_fraction_amounts() {
    let json = r#"[{"id":1,"amount":500,"desc":"a","cat":"Food","date":"1/1/2025"},
                   {"id":2,"amount":12.34,"desc":"","cat":"Bills","date":"1/2/2025"}]"#;
    let txns: Vec<Transaction> = serde_json::from_str(json).unwrap();
    assert_eq!(txns[0].amount, dec!(500));
    assert_eq!(txns[1].amount, dec!(12.34));
    assert_eq!(txns[1].description, "");
}

#[test]
fn test_transaction_json_preserves_cents() {
    let txn = Transaction::new(3, dec!(0.1), "x".into(), "y".into(), fixed_now());
    let json = serde_json::to_string(&txn).unwrap();
    let back: Transaction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, txn);
}

// ── BudgetSettings ────────────────────────────────────────────

#[test]
fn test_settings_default() {
    let settings = BudgetSettings::default();
    assert_eq!(settings.monthly_income, Decimal::ZERO);
    assert_eq!(settings.spending_limit, Decimal::ZERO);
    assert_eq!(settings.savings_goal, Decimal::ZERO);
    assert_eq!(settings.user_name, DEFAULT_USER_NAME);
    assert!(!settings.has_limit());
}

#[test]
fn test_settings_from_input() {
    let settings = BudgetSettings::from_input("5000", "2000", "1000", "Asha");
    assert_eq!(settings.monthly_income, dec!(5000));
    assert_eq!(settings.spending_limit, dec!(2000));
    assert_eq!(settings.savings_goal, dec!(1000));
    assert_eq!(settings.user_name, "Asha");
    assert!(settings.has_limit());
}

#[test]
fn test_settings_coerce_bad_input() {
    let settings = BudgetSettings::from_input("lots", "", "-50", "   ");
    assert_eq!(settings.monthly_income, Decimal::ZERO);
    assert_eq!(settings.spending_limit, Decimal::ZERO);
    assert_eq!(settings.savings_goal, Decimal::ZERO);
    assert_eq!(settings.user_name, "User");
}

#[test]
fn test_parse_setting() {
    assert_eq!(parse_setting("0"), Decimal::ZERO);
    assert_eq!(parse_setting(" 12.5 "), dec!(12.5));
    assert_eq!(parse_setting("ten"), Decimal::ZERO);
}
