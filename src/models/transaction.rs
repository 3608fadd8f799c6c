use chrono::{DateTime, Local};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One recorded expense. Immutable once created; only creation and deletion
/// change the set held by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(with = "amount_number")]
    pub amount: Decimal,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "cat")]
    pub category: String,
    pub date: String,
}

impl Transaction {
    pub fn new(id: i64, amount: Decimal, description: String, category: String, now: DateTime<Local>) -> Self {
        Self {
            id,
            amount,
            description,
            category,
            date: format_date(now),
        }
    }
}

/// Locale-style short date, e.g. `3/7/2025`.
pub fn format_date(now: DateTime<Local>) -> String {
    now.format("%-m/%-d/%Y").to_string()
}

/// Largest accepted expense. With cents precision this stays within the 15
/// significant digits a JSON number carries exactly.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Parse user input for an expense amount, rounded to cents. Only amounts in
/// `(0, MAX_AMOUNT]` after rounding are accepted.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .ok()
        .map(|amount| amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .filter(|amount| *amount > Decimal::ZERO && *amount <= MAX_AMOUNT)
}

/// Render an amount the way it is stored and exported: a plain number, no
/// currency symbol and no trailing zeros.
pub fn plain_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Amounts are stored as JSON numbers. Reading goes through the shortest
/// decimal text of the float so `12.34` comes back as exactly `12.34`.
mod amount_number {
    use rust_decimal::Decimal;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub(super) fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let value = f64::from_str(&amount.to_string()).map_err(serde::ser::Error::custom)?;
        serializer.serialize_f64(value)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(de::Error::custom("amount is not a finite number"));
        }
        Decimal::from_str(&value.to_string()).map_err(de::Error::custom)
    }
}

pub fn parse_id(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}
