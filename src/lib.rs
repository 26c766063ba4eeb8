#![doc(test(attr(deny(warnings))))]

//! Budgety keeps a small income/expense ledger, derives the net budget and
//! each expense's share of income, and pushes the results to a render surface.
//!
//! ```
//! use budgety::{
//!     controller::{AddOutcome, BudgetController, ItemInput},
//!     ledger::ItemKind,
//!     render::RecordingSurface,
//! };
//!
//! let mut controller = BudgetController::new(RecordingSurface::new());
//! controller.add_item(ItemInput::new(ItemKind::Income, "Salary", 1000.0));
//! let outcome = controller.add_item(ItemInput::new(ItemKind::Expense, "Rent", 300.0));
//! assert!(matches!(outcome, AddOutcome::Added(_)));
//! assert_eq!(controller.ledger().budget().budget, 700.0);
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod format;
pub mod ledger;
pub mod render;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("budgety tracing initialized");
    });
}
