//! Sequences ledger mutations and render refreshes for each user action.

use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    format::{format_month, format_percentage},
    ledger::{BudgetSnapshot, ItemKind, Ledger, LineItem},
    render::{BudgetView, RenderSurface, RowKey, RowView},
};

/// Raw values read from the input fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInput {
    pub kind: ItemKind,
    pub description: String,
    /// `None` when the value field did not hold a number.
    pub value: Option<f64>,
}

impl ItemInput {
    pub fn new(kind: ItemKind, description: impl Into<String>, value: f64) -> Self {
        Self {
            kind,
            description: description.into(),
            value: Some(value),
        }
    }

    /// Builds an input from the text of the value field.
    pub fn from_text(kind: ItemKind, description: impl Into<String>, value: &str) -> Self {
        Self {
            kind,
            description: description.into(),
            value: value.trim().parse::<f64>().ok(),
        }
    }

    fn validate(&self) -> Result<f64, Rejection> {
        if self.description.trim().is_empty() {
            return Err(Rejection::EmptyDescription);
        }
        match self.value {
            None => Err(Rejection::NotANumber),
            Some(value) if !value.is_finite() => Err(Rejection::NotANumber),
            Some(value) if value <= 0.0 => Err(Rejection::NotPositive),
            Some(value) => Ok(value),
        }
    }
}

/// Why an add was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("description is empty")]
    EmptyDescription,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be greater than zero")]
    NotPositive,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(LineItem),
    Rejected(Rejection),
}

/// Owns the ledger and drives a render surface.
pub struct BudgetController<S: RenderSurface> {
    ledger: Ledger,
    surface: S,
}

impl<S: RenderSurface> BudgetController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_ledger(Ledger::new(), surface)
    }

    pub fn with_ledger(ledger: Ledger, surface: S) -> Self {
        Self { ledger, surface }
    }

    /// Shows the month header and an empty budget.
    pub fn init(&mut self, today: Option<NaiveDate>) {
        if let Some(date) = today {
            self.surface.display_month(&format_month(date));
        }
        self.surface
            .display_budget(&BudgetView::from(&BudgetSnapshot::default()));
        tracing::debug!("budget controller initialised");
    }

    /// Validates, stores, and renders a new item, then refreshes aggregates.
    ///
    /// Invalid input is skipped without touching the ledger or the surface.
    pub fn add_item(&mut self, input: ItemInput) -> AddOutcome {
        let value = match input.validate() {
            Ok(value) => value,
            Err(reason) => {
                tracing::debug!(%reason, "add skipped");
                return AddOutcome::Rejected(reason);
            }
        };

        let item = self
            .ledger
            .add_item(input.kind, input.description.trim(), value);
        self.surface.append_row(&RowView::from(&item));
        self.surface.clear_input();
        self.update_budget();
        self.update_percentages();
        AddOutcome::Added(item)
    }

    /// Removes the item and its row, then refreshes aggregates. Returns whether the ledger held it.
    pub fn delete_item(&mut self, key: RowKey) -> bool {
        let removed = self.ledger.delete_item(key.kind, key.id);
        self.surface.remove_row(&key);
        self.update_budget();
        self.update_percentages();
        removed
    }

    /// Must run before `update_percentages` so expense shares see the fresh income total.
    pub fn update_budget(&mut self) {
        self.ledger.calculate_budget();
        let snapshot = self.ledger.budget();
        self.surface.display_budget(&BudgetView::from(&snapshot));
    }

    pub fn update_percentages(&mut self) {
        self.ledger.calculate_percentages();
        let labels: Vec<String> = self
            .ledger
            .percentages()
            .into_iter()
            .map(format_percentage)
            .collect();
        self.surface.display_percentages(&labels);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (Ledger, S) {
        (self.ledger, self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rules() {
        assert_eq!(
            ItemInput::new(ItemKind::Income, "  ", 10.0).validate(),
            Err(Rejection::EmptyDescription)
        );
        assert_eq!(
            ItemInput::from_text(ItemKind::Income, "Salary", "abc").validate(),
            Err(Rejection::NotANumber)
        );
        assert_eq!(
            ItemInput::new(ItemKind::Income, "Salary", f64::NAN).validate(),
            Err(Rejection::NotANumber)
        );
        assert_eq!(
            ItemInput::new(ItemKind::Expense, "Rent", 0.0).validate(),
            Err(Rejection::NotPositive)
        );
        assert_eq!(
            ItemInput::from_text(ItemKind::Expense, "Rent", " 12.5 ").validate(),
            Ok(12.5)
        );
    }
}
