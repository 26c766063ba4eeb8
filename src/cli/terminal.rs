//! Terminal rendering of the budget header and item lists.

use colored::Colorize;

use crate::{
    format::PERCENTAGE_PLACEHOLDER,
    ledger::ItemKind,
    render::{BudgetView, RenderSurface, RowKey, RowView},
};

#[derive(Debug, Clone)]
struct ExpenseRow {
    row: RowView,
    percentage: String,
}

/// Keeps what is on screen and renders it as text on request.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    use_color: bool,
    month: Option<String>,
    budget: Option<BudgetView>,
    income: Vec<RowView>,
    expenses: Vec<ExpenseRow>,
}

impl TerminalSurface {
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            month: None,
            budget: None,
            income: Vec::new(),
            expenses: Vec::new(),
        }
    }

    pub fn set_color(&mut self, use_color: bool) {
        self.use_color = use_color;
    }

    pub fn hide_month(&mut self) {
        self.month = None;
    }

    pub fn render_budget(&self) -> String {
        let title = match &self.month {
            Some(month) => format!("Available budget in {month}"),
            None => "Available budget".to_string(),
        };
        let Some(view) = &self.budget else {
            return title;
        };
        let budget = if self.use_color {
            view.budget.bold().to_string()
        } else {
            view.budget.clone()
        };
        let income = self.paint(ItemKind::Income, &view.income);
        let expenses = self.paint(ItemKind::Expense, &view.expenses);
        format!(
            "{title}\n  {budget}\n  Income    {income}\n  Expenses  {expenses}  {}",
            view.percentage
        )
    }

    pub fn render_lists(&self) -> String {
        let mut lines = vec!["Income".to_string()];
        if self.income.is_empty() {
            lines.push("  (none)".to_string());
        }
        for row in &self.income {
            lines.push(self.render_row(row));
        }

        lines.push("Expenses".to_string());
        if self.expenses.is_empty() {
            lines.push("  (none)".to_string());
        }
        for expense in &self.expenses {
            lines.push(format!(
                "{} {:>7}",
                self.render_row(&expense.row),
                expense.percentage
            ));
        }
        lines.join("\n")
    }

    fn render_row(&self, row: &RowView) -> String {
        let value = format!("{:>14}", row.value);
        format!(
            "  {:<6} {:<20} {}",
            row.key.to_string(),
            row.description,
            self.paint(row.key.kind, &value)
        )
    }

    fn paint(&self, kind: ItemKind, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match kind {
            ItemKind::Income => text.green().to_string(),
            ItemKind::Expense => text.red().to_string(),
        }
    }
}

impl RenderSurface for TerminalSurface {
    fn append_row(&mut self, row: &RowView) {
        match row.key.kind {
            ItemKind::Income => self.income.push(row.clone()),
            ItemKind::Expense => self.expenses.push(ExpenseRow {
                row: row.clone(),
                percentage: PERCENTAGE_PLACEHOLDER.to_string(),
            }),
        }
    }

    fn remove_row(&mut self, key: &RowKey) {
        match key.kind {
            ItemKind::Income => self.income.retain(|row| row.key != *key),
            ItemKind::Expense => self.expenses.retain(|expense| expense.row.key != *key),
        }
    }

    fn display_budget(&mut self, view: &BudgetView) {
        self.budget = Some(view.clone());
    }

    fn display_percentages(&mut self, percentages: &[String]) {
        for (expense, label) in self.expenses.iter_mut().zip(percentages) {
            expense.percentage.clone_from(label);
        }
    }

    fn display_month(&mut self, label: &str) {
        self.month = Some(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_header_without_data_is_just_the_title() {
        let surface = TerminalSurface::new(false);
        assert_eq!(surface.render_budget(), "Available budget");
    }

    #[test]
    fn remove_row_ignores_unknown_keys() {
        let mut surface = TerminalSurface::new(false);
        surface.remove_row(&RowKey::new(ItemKind::Expense, 9));
        assert!(surface.render_lists().contains("(none)"));
    }
}
