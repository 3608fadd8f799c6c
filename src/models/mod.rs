mod settings;
mod transaction;

pub use settings::{normalize_user_name, parse_setting, BudgetSettings};
pub use transaction::{parse_amount, parse_id, plain_amount, Transaction, MAX_AMOUNT};

#[cfg(test)]
mod tests;
