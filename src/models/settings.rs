use rust_decimal::Decimal;
use std::str::FromStr;

pub const DEFAULT_USER_NAME: &str = "User";

/// The current month's configuration. Replaced wholesale on every settings submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSettings {
    pub monthly_income: Decimal,
    /// Zero means no limit is configured.
    pub spending_limit: Decimal,
    /// Recorded for display only; no derived value uses it yet.
    pub savings_goal: Decimal,
    pub user_name: String,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            monthly_income: Decimal::ZERO,
            spending_limit: Decimal::ZERO,
            savings_goal: Decimal::ZERO,
            user_name: DEFAULT_USER_NAME.into(),
        }
    }
}

impl BudgetSettings {
    /// Build settings from raw form input, coercing anything unusable to its default.
    pub fn from_input(income: &str, limit: &str, goal: &str, user_name: &str) -> Self {
        Self {
            monthly_income: parse_setting(income),
            spending_limit: parse_setting(limit),
            savings_goal: parse_setting(goal),
            user_name: normalize_user_name(user_name),
        }
    }

    pub fn has_limit(&self) -> bool {
        self.spending_limit > Decimal::ZERO
    }
}

/// Parse a numeric settings field. Unparseable or negative input becomes zero.
pub fn parse_setting(input: &str) -> Decimal {
    match Decimal::from_str(input.trim()) {
        Ok(value) if value >= Decimal::ZERO => value,
        _ => Decimal::ZERO,
    }
}

pub fn normalize_user_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_USER_NAME.into()
    } else {
        trimmed.to_string()
    }
}
