use dialoguer::{Input, Select};

use crate::{
    cli::{
        core::{CliMode, CommandError, CommandResult, ShellContext},
        output,
        registry::{CommandEntry, CommandRegistry},
    },
    controller::{AddOutcome, ItemInput},
    format::format_amount,
    ledger::ItemKind,
    render::RowKey,
};

const ADD_USAGE: &str = "add <inc|exp> <description> <value>";
const DELETE_USAGE: &str = "delete <inc-N|exp-N> | delete <inc|exp> <N>";

pub fn register(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "add",
        "Add an income or expense item",
        ADD_USAGE,
        cmd_add,
    ));
    registry.register(
        CommandEntry::new("delete", "Remove an item by its key", DELETE_USAGE, cmd_delete)
            .with_aliases(&["rm", "del"]),
    );
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = match args {
        [] if context.mode == CliMode::Interactive => prompt_item(context)?,
        [kind, description @ .., value] if !description.is_empty() => {
            ItemInput::from_text(kind.parse::<ItemKind>()?, description.join(" "), value)
        }
        _ => return Err(usage_error(ADD_USAGE)),
    };

    match context.controller.add_item(input) {
        AddOutcome::Added(item) => {
            output::success(format!(
                "Added {}-{} {} {}",
                item.kind.code(),
                item.id,
                item.description,
                format_amount(item.value, item.kind)
            ));
            output::info(context.controller.surface().render_budget());
        }
        AddOutcome::Rejected(reason) => output::warning(format!("Nothing added: {reason}")),
    }
    Ok(())
}

fn prompt_item(context: &ShellContext) -> Result<ItemInput, CommandError> {
    let choice = Select::with_theme(&context.theme)
        .with_prompt("Type")
        .items(&["+ Income", "- Expense"])
        .default(0)
        .interact()?;
    let kind = if choice == 0 {
        ItemKind::Income
    } else {
        ItemKind::Expense
    };
    let description: String = Input::with_theme(&context.theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;
    let value: String = Input::with_theme(&context.theme)
        .with_prompt("Value")
        .allow_empty(true)
        .interact_text()?;
    Ok(ItemInput::from_text(kind, description, &value))
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let key = match args {
        [key] => key.parse::<RowKey>()?,
        [kind, id] => format!("{kind}-{id}").parse::<RowKey>()?,
        _ => return Err(usage_error(DELETE_USAGE)),
    };

    if context.controller.delete_item(key) {
        output::success(format!("Deleted {key}"));
    } else {
        output::info(format!("No item {key}; nothing deleted"));
    }
    output::info(context.controller.surface().render_budget());
    Ok(())
}

fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {usage}"))
}
