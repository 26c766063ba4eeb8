use serde::{Deserialize, Serialize};

use super::item::{ItemKind, LineItem, Percentage};

/// How the next id of a partition is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// Per-partition counter that never goes backwards, even after deletions.
    #[default]
    Sequential,
    /// Last item's id + 1. Freed ids can be handed out again after a delete.
    LastPlusOne,
}

impl IdPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            IdPolicy::Sequential => "sequential",
            IdPolicy::LastPlusOne => "last-plus-one",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
struct Totals {
    income: f64,
    expense: f64,
}

/// Aggregates as of the last `calculate_budget` pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetSnapshot {
    pub budget: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub overall_percentage: Percentage,
}

impl Default for BudgetSnapshot {
    fn default() -> Self {
        Self {
            budget: 0.0,
            total_income: 0.0,
            total_expense: 0.0,
            overall_percentage: Percentage::Undefined,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct NextIds {
    income: u64,
    expense: u64,
}

/// In-memory store of income and expense items with derived totals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ledger {
    income: Vec<LineItem>,
    expenses: Vec<LineItem>,
    totals: Totals,
    budget: f64,
    overall_percentage: Percentage,
    id_policy: IdPolicy,
    #[serde(skip)]
    next_ids: NextIds,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_policy(id_policy: IdPolicy) -> Self {
        Self {
            id_policy,
            ..Self::default()
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn set_id_policy(&mut self, policy: IdPolicy) {
        self.id_policy = policy;
    }

    /// Appends a new item and returns a copy of it. Input is stored as given.
    pub fn add_item(
        &mut self,
        kind: ItemKind,
        description: impl Into<String>,
        value: f64,
    ) -> LineItem {
        let id = self.next_id(kind);
        let item = LineItem::new(kind, id, description, value);
        tracing::debug!(kind = %kind, id, value, "ledger item added");
        self.partition_mut(kind).push(item.clone());
        item
    }

    /// Removes the first item with `id` from the partition. Returns whether anything was removed.
    pub fn delete_item(&mut self, kind: ItemKind, id: u64) -> bool {
        let items = self.partition_mut(kind);
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                tracing::debug!(kind = %kind, id, "ledger item deleted");
                true
            }
            None => {
                tracing::debug!(kind = %kind, id, "delete skipped, no such item");
                false
            }
        }
    }

    pub fn calculate_budget(&mut self) {
        self.totals = Totals {
            income: sum_values(&self.income),
            expense: sum_values(&self.expenses),
        };
        self.budget = self.totals.income - self.totals.expense;
        self.overall_percentage = Percentage::of(self.totals.expense, self.totals.income);
        tracing::trace!(
            income = self.totals.income,
            expense = self.totals.expense,
            budget = self.budget,
            "budget recalculated"
        );
    }

    pub fn budget(&self) -> BudgetSnapshot {
        BudgetSnapshot {
            budget: self.budget,
            total_income: self.totals.income,
            total_expense: self.totals.expense,
            overall_percentage: self.overall_percentage,
        }
    }

    /// Uses the income total from the last `calculate_budget` call.
    pub fn calculate_percentages(&mut self) {
        let total_income = self.totals.income;
        for item in &mut self.expenses {
            item.calc_percentage(total_income);
        }
        tracing::trace!(count = self.expenses.len(), "expense percentages recalculated");
    }

    pub fn percentages(&self) -> Vec<Percentage> {
        self.expenses.iter().map(LineItem::percentage).collect()
    }

    pub fn items(&self, kind: ItemKind) -> &[LineItem] {
        match kind {
            ItemKind::Income => &self.income,
            ItemKind::Expense => &self.expenses,
        }
    }

    pub fn item(&self, kind: ItemKind, id: u64) -> Option<&LineItem> {
        self.items(kind).iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.income.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    fn partition_mut(&mut self, kind: ItemKind) -> &mut Vec<LineItem> {
        match kind {
            ItemKind::Income => &mut self.income,
            ItemKind::Expense => &mut self.expenses,
        }
    }

    fn next_id(&mut self, kind: ItemKind) -> u64 {
        let last_plus_one = self.items(kind).last().map_or(0, |item| item.id + 1);
        match self.id_policy {
            IdPolicy::LastPlusOne => last_plus_one,
            IdPolicy::Sequential => {
                let counter = match kind {
                    ItemKind::Income => &mut self.next_ids.income,
                    ItemKind::Expense => &mut self.next_ids.expense,
                };
                // a policy switch mid-session must not hand out an id that is still live
                let id = (*counter).max(last_plus_one);
                *counter = id + 1;
                id
            }
        }
    }
}

fn sum_values(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.value).sum()
}
