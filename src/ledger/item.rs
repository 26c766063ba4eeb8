use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::BudgetError;

/// Which partition of the ledger a line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Income,
    Expense,
}

impl ItemKind {
    /// Short code used in row keys (`inc-0`, `exp-3`).
    pub fn code(self) -> &'static str {
        match self {
            ItemKind::Income => "inc",
            ItemKind::Expense => "exp",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ItemKind {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inc" | "income" | "+" => Ok(ItemKind::Income),
            "exp" | "expense" | "-" => Ok(ItemKind::Expense),
            other => Err(BudgetError::InvalidInput(format!(
                "unknown item type `{other}` (expected inc or exp)"
            ))),
        }
    }
}

/// Share of total income, or `Undefined` while there is no income to compare against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Percentage {
    Value(f64),
    #[default]
    Undefined,
}

impl Percentage {
    /// `part / whole * 100`, rounded to two decimals; undefined unless `whole > 0`.
    pub fn of(part: f64, whole: f64) -> Self {
        if whole > 0.0 {
            Percentage::Value(round_to_cents(part / whole * 100.0))
        } else {
            Percentage::Undefined
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Percentage::Value(_))
    }
}

/// Rounds half away from zero to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub id: u64,
    pub kind: ItemKind,
    pub description: String,
    pub value: f64,
    /// Only expenses carry a percentage of income.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Percentage>,
}

impl LineItem {
    pub fn new(kind: ItemKind, id: u64, description: impl Into<String>, value: f64) -> Self {
        let percentage = match kind {
            ItemKind::Income => None,
            ItemKind::Expense => Some(Percentage::Undefined),
        };
        Self {
            id,
            kind,
            description: description.into(),
            value,
            percentage,
        }
    }

    pub fn income(id: u64, description: impl Into<String>, value: f64) -> Self {
        Self::new(ItemKind::Income, id, description, value)
    }

    pub fn expense(id: u64, description: impl Into<String>, value: f64) -> Self {
        Self::new(ItemKind::Expense, id, description, value)
    }

    /// Refreshes the cached percentage; a no-op for income items.
    pub fn calc_percentage(&mut self, total_income: f64) {
        if self.kind == ItemKind::Expense {
            self.percentage = Some(Percentage::of(self.value, total_income));
        }
    }

    pub fn percentage(&self) -> Percentage {
        self.percentage.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind_aliases() {
        assert_eq!("inc".parse::<ItemKind>().unwrap(), ItemKind::Income);
        assert_eq!("Expense".parse::<ItemKind>().unwrap(), ItemKind::Expense);
        assert!("savings".parse::<ItemKind>().is_err());
    }

    #[test]
    fn expense_percentage_starts_undefined() {
        let item = LineItem::expense(0, "Rent", 300.0);
        assert_eq!(item.percentage, Some(Percentage::Undefined));
        let income = LineItem::income(0, "Salary", 1000.0);
        assert_eq!(income.percentage, None);
    }

    #[test]
    fn income_ignores_percentage_refresh() {
        let mut item = LineItem::income(0, "Salary", 1000.0);
        item.calc_percentage(2000.0);
        assert_eq!(item.percentage, None);
    }

    #[test]
    fn percentage_rounds_to_two_decimals() {
        assert_eq!(Percentage::of(1.0, 3.0), Percentage::Value(33.33));
        assert_eq!(Percentage::of(2.0, 3.0), Percentage::Value(66.67));
        assert_eq!(Percentage::of(5.0, 0.0), Percentage::Undefined);
    }

    #[test]
    fn percentage_serializes_as_number_or_null() {
        let json = serde_json::to_string(&[Percentage::Value(12.5), Percentage::Undefined]).unwrap();
        assert_eq!(json, "[12.5,null]");
    }
}
