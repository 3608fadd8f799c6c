//! The transaction store: one owned in-memory ledger plus a write-through
//! wrapper that persists after every successful mutation.

use anyhow::Result;
use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use crate::db::KvStore;
use crate::models::{parse_amount, BudgetSettings, Transaction};
use crate::storage::{self, Snapshot};
use crate::summary::{self, Summary};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
    settings: BudgetSettings,
    last_month_total: Option<Decimal>,
}

impl From<Snapshot> for Ledger {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            transactions: snapshot.transactions,
            settings: snapshot.settings,
            last_month_total: snapshot.last_month_total,
        }
    }
}

impl Ledger {
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn settings(&self) -> &BudgetSettings {
        &self.settings
    }

    pub(crate) fn last_month_total(&self) -> Option<Decimal> {
        self.last_month_total
    }

    pub(crate) fn summary(&self) -> Summary {
        Summary::compute(&self.transactions, &self.settings)
    }

    /// Record an expense. Returns `None` without touching the list when the
    /// amount is rejected by [`parse_amount`] or no unique id is left.
    pub(crate) fn add_transaction(
        &mut self,
        amount: &str,
        description: &str,
        category: &str,
        now: DateTime<Local>,
    ) -> Option<i64> {
        let Some(amount) = parse_amount(amount) else {
            log::info!("ignored expense with invalid amount {amount:?}");
            return None;
        };
        let Some(id) = self.next_id(now.timestamp_millis()) else {
            log::warn!("ignored expense: no id left above the newest transaction");
            return None;
        };
        self.transactions.push(Transaction::new(
            id,
            amount,
            description.to_string(),
            category.to_string(),
            now,
        ));
        log::debug!("added transaction {id}: {amount} in {category}");
        Some(id)
    }

    /// Remove the transaction with `id`. A miss is not an error.
    pub(crate) fn delete_transaction(&mut self, id: i64) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            log::debug!("deleted transaction {id}");
        }
        removed
    }

    pub(crate) fn update_settings(&mut self, income: &str, limit: &str, goal: &str, user_name: &str) {
        self.settings = BudgetSettings::from_input(income, limit, goal, user_name);
        log::debug!("updated settings: {:?}", self.settings);
    }

    /// Archive the current total and clear the list. Settings carry over.
    pub(crate) fn reset_month(&mut self) -> Decimal {
        let total = summary::total_expenses(&self.transactions);
        self.transactions.clear();
        self.last_month_total = Some(total);
        log::debug!("month reset, archived total {total}");
        total
    }

    /// Creation timestamp in milliseconds, bumped past the newest id so ids stay
    /// unique and increasing. `None` once the newest id is `i64::MAX`.
    fn next_id(&self, now_millis: i64) -> Option<i64> {
        match self.transactions.iter().map(|t| t.id).max() {
            Some(max) if now_millis <= max => max.checked_add(1),
            _ => Some(now_millis),
        }
    }
}

/// Sole owner of the ledger for a session. Every mutating call persists
/// before it returns; a failed write is reported while the in-memory state stays.
pub(crate) struct Tracker<S: KvStore> {
    ledger: Ledger,
    store: S,
}

impl<S: KvStore> Tracker<S> {
    pub(crate) fn open(store: S) -> Result<Self> {
        let ledger = Ledger::from(storage::load(&store)?);
        Ok(Self { ledger, store })
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn add_transaction(
        &mut self,
        amount: &str,
        description: &str,
        category: &str,
    ) -> Result<Option<i64>> {
        let id = self
            .ledger
            .add_transaction(amount, description, category, Local::now());
        if id.is_some() {
            self.persist()?;
        }
        Ok(id)
    }

    pub(crate) fn delete_transaction(&mut self, id: i64) -> Result<bool> {
        let removed = self.ledger.delete_transaction(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    pub(crate) fn update_settings(
        &mut self,
        income: &str,
        limit: &str,
        goal: &str,
        user_name: &str,
    ) -> Result<()> {
        self.ledger.update_settings(income, limit, goal, user_name);
        self.persist()
    }

    pub(crate) fn reset_month(&mut self) -> Result<Decimal> {
        let total = self.ledger.reset_month();
        storage::save_last_month(&mut self.store, total)?;
        self.persist()?;
        Ok(total)
    }

    fn persist(&mut self) -> Result<()> {
        storage::save(
            &mut self.store,
            &self.ledger.transactions,
            &self.ledger.settings,
        )
        .inspect_err(|e| log::warn!("failed to persist state: {e:#}"))
    }
}
