//! Ledger store: income and expense partitions, id assignment, and derived totals.

pub mod item;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use item::{round_to_cents, ItemKind, LineItem, Percentage};
pub use ledger::{BudgetSnapshot, IdPolicy, Ledger};
