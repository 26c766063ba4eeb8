use super::{BudgetView, RenderSurface, RowKey, RowView};
use crate::ledger::ItemKind;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    AppendRow(RowKey),
    RemoveRow(RowKey),
    Budget(BudgetView),
    Percentages(Vec<String>),
    Month(String),
    ClearInput,
}

/// In-memory surface that keeps the displayed state and a log of every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub income_rows: Vec<RowView>,
    pub expense_rows: Vec<RowView>,
    /// Label shown next to each expense row, index-aligned with `expense_rows`.
    pub expense_labels: Vec<String>,
    pub budget: Option<BudgetView>,
    pub month: Option<String>,
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_keys(&self) -> Vec<String> {
        self.income_rows
            .iter()
            .chain(&self.expense_rows)
            .map(|row| row.key.to_string())
            .collect()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn append_row(&mut self, row: &RowView) {
        self.events.push(SurfaceEvent::AppendRow(row.key));
        match row.key.kind {
            ItemKind::Income => self.income_rows.push(row.clone()),
            ItemKind::Expense => {
                self.expense_rows.push(row.clone());
                self.expense_labels.push(String::new());
            }
        }
    }

    fn remove_row(&mut self, key: &RowKey) {
        self.events.push(SurfaceEvent::RemoveRow(*key));
        if let Some(index) = self.income_rows.iter().position(|row| row.key == *key) {
            self.income_rows.remove(index);
        }
        if let Some(index) = self.expense_rows.iter().position(|row| row.key == *key) {
            self.expense_rows.remove(index);
            self.expense_labels.remove(index);
        }
    }

    fn display_budget(&mut self, view: &BudgetView) {
        self.events.push(SurfaceEvent::Budget(view.clone()));
        self.budget = Some(view.clone());
    }

    fn display_percentages(&mut self, percentages: &[String]) {
        self.events
            .push(SurfaceEvent::Percentages(percentages.to_vec()));
        for (label, value) in self.expense_labels.iter_mut().zip(percentages) {
            label.clone_from(value);
        }
    }

    fn display_month(&mut self, label: &str) {
        self.events.push(SurfaceEvent::Month(label.to_string()));
        self.month = Some(label.to_string());
    }

    fn clear_input(&mut self) {
        self.events.push(SurfaceEvent::ClearInput);
    }
}
