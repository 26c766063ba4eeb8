//! Rendering boundary between the controller and whatever displays the ledger.

mod recording;

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    errors::BudgetError,
    format::{budget_kind, format_amount, format_percentage},
    ledger::{BudgetSnapshot, ItemKind, LineItem},
};

pub use recording::{RecordingSurface, SurfaceEvent};

/// Identifies a rendered row, displayed as `inc-3` / `exp-0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RowKey {
    pub kind: ItemKind,
    pub id: u64,
}

impl RowKey {
    pub fn new(kind: ItemKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.code(), self.id)
    }
}

impl FromStr for RowKey {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| BudgetError::InvalidInput(format!("`{s}` is not a row key")))?;
        let kind = kind.parse::<ItemKind>()?;
        let invalid_id = || BudgetError::InvalidInput(format!("`{id}` is not a valid item id"));
        // u64 parsing alone would let `+3` through
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_id());
        }
        let id = id.parse::<u64>().map_err(|_| invalid_id())?;
        Ok(Self { kind, id })
    }
}

/// A row ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub key: RowKey,
    pub description: String,
    pub value: String,
}

impl From<&LineItem> for RowView {
    fn from(item: &LineItem) -> Self {
        Self {
            key: RowKey::new(item.kind, item.id),
            description: item.description.clone(),
            value: format_amount(item.value, item.kind),
        }
    }
}

/// Budget header values, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetView {
    pub budget: String,
    pub income: String,
    pub expenses: String,
    pub percentage: String,
}

impl From<&BudgetSnapshot> for BudgetView {
    fn from(snapshot: &BudgetSnapshot) -> Self {
        Self {
            budget: format_amount(snapshot.budget, budget_kind(snapshot.budget)),
            income: format_amount(snapshot.total_income, ItemKind::Income),
            expenses: format_amount(snapshot.total_expense, ItemKind::Expense),
            percentage: format_percentage(snapshot.overall_percentage),
        }
    }
}

/// Capabilities the controller needs from a display.
pub trait RenderSurface {
    fn append_row(&mut self, row: &RowView);

    /// Removing a key that is not displayed must be a no-op.
    fn remove_row(&mut self, key: &RowKey);

    fn display_budget(&mut self, view: &BudgetView);

    /// One entry per expense row, in display order.
    fn display_percentages(&mut self, percentages: &[String]);

    fn display_month(&mut self, label: &str);

    fn clear_input(&mut self) {}
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn append_row(&mut self, row: &RowView) {
        (**self).append_row(row);
    }

    fn remove_row(&mut self, key: &RowKey) {
        (**self).remove_row(key);
    }

    fn display_budget(&mut self, view: &BudgetView) {
        (**self).display_budget(view);
    }

    fn display_percentages(&mut self, percentages: &[String]) {
        (**self).display_percentages(percentages);
    }

    fn display_month(&mut self, label: &str) {
        (**self).display_month(label);
    }

    fn clear_input(&mut self) {
        (**self).clear_input();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Percentage;

    #[test]
    fn row_key_round_trips_through_text() {
        let key: RowKey = "exp-12".parse().unwrap();
        assert_eq!(key, RowKey::new(ItemKind::Expense, 12));
        assert_eq!(key.to_string(), "exp-12");
    }

    #[test]
    fn rejects_malformed_row_keys() {
        assert!("exp".parse::<RowKey>().is_err());
        assert!("sav-1".parse::<RowKey>().is_err());
        assert!("inc-x".parse::<RowKey>().is_err());
        assert!("inc--1".parse::<RowKey>().is_err());
        assert!("exp-+3".parse::<RowKey>().is_err());
        assert!("exp-".parse::<RowKey>().is_err());
        assert!("exp- 3".parse::<RowKey>().is_err());
    }

    #[test]
    fn budget_view_formats_initial_state() {
        let view = BudgetView::from(&BudgetSnapshot::default());
        assert_eq!(view.budget, "- 0.00");
        assert_eq!(view.income, "+ 0.00");
        assert_eq!(view.expenses, "- 0.00");
        assert_eq!(view.percentage, "---");
    }

    #[test]
    fn budget_view_formats_positive_budget() {
        let snapshot = BudgetSnapshot {
            budget: 600.0,
            total_income: 1000.0,
            total_expense: 400.0,
            overall_percentage: Percentage::Value(40.0),
        };
        let view = BudgetView::from(&snapshot);
        assert_eq!(view.budget, "+ 600.00");
        assert_eq!(view.percentage, "40.00%");
    }
}
