use budgety::{
    controller::{AddOutcome, BudgetController, ItemInput, Rejection},
    ledger::{ItemKind, Percentage},
    render::{BudgetView, RecordingSurface, RowKey, SurfaceEvent},
};
use chrono::NaiveDate;

fn key(kind: ItemKind, id: u64) -> RowKey {
    RowKey::new(kind, id)
}

fn seeded(surface: &mut RecordingSurface) -> BudgetController<&mut RecordingSurface> {
    let mut controller = BudgetController::new(surface);
    controller.add_item(ItemInput::new(ItemKind::Income, "Salary", 1000.0));
    controller.add_item(ItemInput::new(ItemKind::Expense, "Rent", 300.0));
    controller.add_item(ItemInput::new(ItemKind::Expense, "Food", 100.0));
    controller
}

#[test]
fn init_shows_month_and_empty_budget() {
    let mut controller = BudgetController::new(RecordingSurface::new());
    controller.init(NaiveDate::from_ymd_opt(2026, 10, 16));

    let surface = controller.surface();
    assert_eq!(surface.month.as_deref(), Some("October 2026"));
    assert_eq!(
        surface.budget,
        Some(BudgetView {
            budget: "- 0.00".into(),
            income: "+ 0.00".into(),
            expenses: "- 0.00".into(),
            percentage: "---".into(),
        })
    );
}

#[test]
fn init_without_date_skips_month() {
    let mut controller = BudgetController::new(RecordingSurface::new());
    controller.init(None);
    assert_eq!(controller.surface().month, None);
    assert!(controller.surface().budget.is_some());
}

#[test]
fn add_runs_the_full_refresh_sequence() {
    let mut controller = BudgetController::new(RecordingSurface::new());
    controller.add_item(ItemInput::new(ItemKind::Income, "Salary", 1000.0));
    controller.surface_mut().clear_events();

    let outcome = controller.add_item(ItemInput::new(ItemKind::Expense, "Rent", 300.0));
    let AddOutcome::Added(item) = outcome else {
        panic!("expected the expense to be added");
    };
    assert_eq!(item.id, 0);

    let events = &controller.surface().events;
    assert_eq!(events.len(), 4);
    assert_eq!(events[0], SurfaceEvent::AppendRow(key(ItemKind::Expense, 0)));
    assert_eq!(events[1], SurfaceEvent::ClearInput);
    assert!(matches!(&events[2], SurfaceEvent::Budget(view) if view.budget == "+ 700.00"));
    assert_eq!(events[3], SurfaceEvent::Percentages(vec!["30.00%".into()]));
}

#[test]
fn scenario_renders_budget_and_percentages() {
    let mut surface = RecordingSurface::new();
    let controller = seeded(&mut surface);
    assert_eq!(
        controller.ledger().percentages(),
        vec![Percentage::Value(30.0), Percentage::Value(10.0)]
    );
    drop(controller);

    assert_eq!(surface.row_keys(), vec!["inc-0", "exp-0", "exp-1"]);
    assert_eq!(surface.expense_labels, vec!["30.00%", "10.00%"]);
    let budget = surface.budget.as_ref().expect("budget displayed");
    assert_eq!(budget.budget, "+ 600.00");
    assert_eq!(budget.income, "+ 1,000.00");
    assert_eq!(budget.expenses, "- 400.00");
    assert_eq!(budget.percentage, "40.00%");
}

#[test]
fn invalid_input_is_skipped_without_rendering() {
    let mut controller = BudgetController::new(RecordingSurface::new());
    let cases = [
        (ItemInput::new(ItemKind::Income, "", 10.0), Rejection::EmptyDescription),
        (ItemInput::from_text(ItemKind::Income, "Gift", "ten"), Rejection::NotANumber),
        (ItemInput::new(ItemKind::Expense, "Refund", -3.0), Rejection::NotPositive),
        (ItemInput::new(ItemKind::Expense, "Nothing", 0.0), Rejection::NotPositive),
    ];
    for (input, reason) in cases {
        assert_eq!(controller.add_item(input), AddOutcome::Rejected(reason));
    }
    assert!(controller.ledger().is_empty());
    assert!(controller.surface().events.is_empty());
}

#[test]
fn description_is_trimmed_before_storing() {
    let mut controller = BudgetController::new(RecordingSurface::new());
    controller.add_item(ItemInput::new(ItemKind::Income, "  Salary ", 10.0));
    assert_eq!(controller.ledger().items(ItemKind::Income)[0].description, "Salary");
}

#[test]
fn delete_removes_row_and_refreshes() {
    let mut surface = RecordingSurface::new();
    let mut controller = seeded(&mut surface);
    controller.surface_mut().clear_events();

    assert!(controller.delete_item(key(ItemKind::Expense, 0)));
    drop(controller);

    assert_eq!(surface.row_keys(), vec!["inc-0", "exp-1"]);
    assert_eq!(surface.expense_labels, vec!["10.00%"]);
    assert_eq!(surface.events[0], SurfaceEvent::RemoveRow(key(ItemKind::Expense, 0)));
    assert_eq!(surface.budget.as_ref().unwrap().budget, "+ 900.00");
}

#[test]
fn deleting_unknown_item_still_refreshes() {
    let mut surface = RecordingSurface::new();
    let mut controller = seeded(&mut surface);
    controller.surface_mut().clear_events();

    assert!(!controller.delete_item(key(ItemKind::Income, 9)));
    assert_eq!(controller.ledger().len(), 3);
    drop(controller);

    assert_eq!(surface.events.len(), 3);
    assert_eq!(surface.row_keys(), vec!["inc-0", "exp-0", "exp-1"]);
}

#[test]
fn deleting_all_income_shows_placeholders() {
    let mut surface = RecordingSurface::new();
    let mut controller = seeded(&mut surface);
    controller.delete_item(key(ItemKind::Income, 0));
    drop(controller);

    let budget = surface.budget.as_ref().unwrap();
    assert_eq!(budget.budget, "- 400.00");
    assert_eq!(budget.income, "+ 0.00");
    assert_eq!(budget.percentage, "---");
    assert_eq!(surface.expense_labels, vec!["---", "---"]);
}

#[test]
fn into_parts_hands_back_ledger_and_surface() {
    let mut controller = BudgetController::new(RecordingSurface::new());
    controller.add_item(ItemInput::new(ItemKind::Income, "Salary", 10.0));
    let (ledger, surface) = controller.into_parts();
    assert_eq!(ledger.len(), 1);
    assert_eq!(surface.income_rows.len(), 1);
}
