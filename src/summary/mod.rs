//! Derived values computed from the transaction list and budget settings.
//!
//! Nothing here is cached: every caller recomputes from the authoritative list.

use rust_decimal::Decimal;

use crate::models::{BudgetSettings, Transaction};

const FULL_PERCENT: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) total_expenses: Decimal,
    /// Income minus expenses. Not clamped; negative when overspent.
    pub(crate) balance: Decimal,
    /// Share of the spending limit used, unclamped. Zero when no limit is set.
    pub(crate) limit_percent: Decimal,
    pub(crate) is_over_limit: bool,
    /// Category label to summed amount, in first-seen order. Empty categories are absent.
    pub(crate) category_totals: Vec<(String, Decimal)>,
}

impl Summary {
    pub(crate) fn compute(transactions: &[Transaction], settings: &BudgetSettings) -> Self {
        let total_expenses = total_expenses(transactions);
        let balance = settings.monthly_income.saturating_sub(total_expenses);

        Self {
            total_expenses,
            balance,
            limit_percent: limit_percent(total_expenses, settings.spending_limit),
            is_over_limit: settings.has_limit() && total_expenses > settings.spending_limit,
            category_totals: category_totals(transactions),
        }
    }

    /// Percentage for the progress indicator, never more than full.
    pub(crate) fn limit_percent_display(&self) -> Decimal {
        self.limit_percent.clamp(Decimal::ZERO, FULL_PERCENT)
    }

    /// What is left of income this month.
    pub(crate) fn savings(&self) -> Decimal {
        self.balance
    }
}

pub(crate) fn total_expenses(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::ZERO, |sum, t| sum.saturating_add(t.amount))
}

fn limit_percent(total: Decimal, limit: Decimal) -> Decimal {
    if limit <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    total
        .checked_div(limit)
        .and_then(|ratio| ratio.checked_mul(FULL_PERCENT))
        .unwrap_or(Decimal::MAX)
}

pub(crate) fn category_totals(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for txn in transactions {
        match totals.iter_mut().find(|(name, _)| *name == txn.category) {
            Some((_, sum)) => *sum = sum.saturating_add(txn.amount),
            None => totals.push((txn.category.clone(), txn.amount)),
        }
    }
    totals
}

/// One line of the transaction listing. `id` keys the delete action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TableRow {
    pub(crate) id: i64,
    pub(crate) date: String,
    pub(crate) description: String,
    pub(crate) category: String,
    pub(crate) amount: Decimal,
}

pub(crate) fn table_rows(transactions: &[Transaction]) -> Vec<TableRow> {
    transactions
        .iter()
        .map(|t| TableRow {
            id: t.id,
            date: t.date.clone(),
            description: t.description.clone(),
            category: t.category.clone(),
            amount: t.amount,
        })
        .collect()
}

#[cfg(test)]
mod tests;
