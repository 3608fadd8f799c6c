//! Boundary between category totals and the chart widget.

use ratatui::style::Color;
use rust_decimal::Decimal;

use super::theme::{Theme, CHART_COLORS};

pub(crate) const NO_EXPENSES_LABEL: &str = "No Expenses";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartSlice {
    pub(crate) label: String,
    pub(crate) value: Decimal,
    pub(crate) color: Color,
}

/// Chart data for the given totals. An empty mapping is drawn as a single
/// neutral placeholder slice; the totals themselves are never modified.
pub(crate) fn chart_slices(totals: &[(String, Decimal)], theme: Theme) -> Vec<ChartSlice> {
    if totals.is_empty() {
        return vec![ChartSlice {
            label: NO_EXPENSES_LABEL.into(),
            value: Decimal::ONE,
            color: theme.palette().neutral,
        }];
    }

    totals
        .iter()
        .zip(CHART_COLORS.iter().cycle())
        .map(|((label, value), color)| ChartSlice {
            label: label.clone(),
            value: *value,
            color: *color,
        })
        .collect()
}
