//! Persistence adapter: maps the tracker's state onto fixed keys in a [`KvStore`].
//!
//! Every entry is textual. Missing or unreadable entries load as their defaults,
//! never as errors; only a failing store is reported to the caller.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::db::KvStore;
use crate::models::{normalize_user_name, parse_setting, plain_amount, BudgetSettings, Transaction};

pub(crate) const KEY_TRANSACTIONS: &str = "transactions";
pub(crate) const KEY_INCOME: &str = "income";
pub(crate) const KEY_LIMIT: &str = "limit";
pub(crate) const KEY_GOAL: &str = "goal";
pub(crate) const KEY_NAME: &str = "name";
pub(crate) const KEY_LAST_MONTH: &str = "lastMonth";

/// Everything read back from the store at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) settings: BudgetSettings,
    pub(crate) last_month_total: Option<Decimal>,
}

/// Write the transaction list and the four settings entries.
pub(crate) fn save(
    store: &mut impl KvStore,
    transactions: &[Transaction],
    settings: &BudgetSettings,
) -> Result<()> {
    let json = serde_json::to_string(transactions).context("Failed to serialize transactions")?;
    store.set_many(&[
        (KEY_TRANSACTIONS, json),
        (KEY_INCOME, plain_amount(settings.monthly_income)),
        (KEY_LIMIT, plain_amount(settings.spending_limit)),
        (KEY_GOAL, plain_amount(settings.savings_goal)),
        (KEY_NAME, settings.user_name.clone()),
    ])?;
    log::debug!("saved {} transactions", transactions.len());
    Ok(())
}

/// Overwrite the archived total of the most recently closed month.
pub(crate) fn save_last_month(store: &mut impl KvStore, total: Decimal) -> Result<()> {
    store.set(KEY_LAST_MONTH, &plain_amount(total))
}

pub(crate) fn load(store: &impl KvStore) -> Result<Snapshot> {
    let transactions = match store.get(KEY_TRANSACTIONS)? {
        Some(json) => parse_transactions(&json),
        None => Vec::new(),
    };

    let settings = BudgetSettings {
        monthly_income: load_number(store, KEY_INCOME)?,
        spending_limit: load_number(store, KEY_LIMIT)?,
        savings_goal: load_number(store, KEY_GOAL)?,
        user_name: normalize_user_name(&store.get(KEY_NAME)?.unwrap_or_default()),
    };

    let last_month_total = store
        .get(KEY_LAST_MONTH)?
        .map(|raw| parse_setting(&raw));

    log::info!(
        "loaded {} transactions for {}",
        transactions.len(),
        settings.user_name
    );

    Ok(Snapshot {
        transactions,
        settings,
        last_month_total,
    })
}

fn load_number(store: &impl KvStore, key: &str) -> Result<Decimal> {
    Ok(store
        .get(key)?
        .map(|raw| parse_setting(&raw))
        .unwrap_or(Decimal::ZERO))
}

/// An unreadable list loads as empty; an unreadable record is skipped on its own.
/// Duplicate ids keep their first record.
fn parse_transactions(json: &str) -> Vec<Transaction> {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(json) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("stored transaction list is unreadable, starting empty: {e}");
            return Vec::new();
        }
    };

    let parsed: Vec<Transaction> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            serde_json::from_value(entry)
                .inspect_err(|e| log::warn!("skipped unreadable stored transaction #{index}: {e}"))
                .ok()
        })
        .collect();

    let mut seen = HashSet::new();
    let total = parsed.len();
    let unique: Vec<Transaction> = parsed.into_iter().filter(|t| seen.insert(t.id)).collect();
    if unique.len() != total {
        log::warn!(
            "dropped {} stored transactions with duplicate ids",
            total - unique.len()
        );
    }
    unique
}

#[cfg(test)]
mod tests;
