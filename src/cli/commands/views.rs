use crate::cli::{
    core::{CommandError, CommandResult, ShellContext},
    output,
    registry::{CommandEntry, CommandRegistry},
};

pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        CommandEntry::new("list", "Show income and expense items", "list", cmd_list)
            .with_aliases(&["ls"]),
    );
    registry.register(CommandEntry::new(
        "budget",
        "Show the available budget and totals",
        "budget",
        cmd_budget,
    ));
    registry.register(CommandEntry::new(
        "export",
        "Print items and totals as JSON",
        "export",
        cmd_export,
    ));
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(context.controller.surface().render_lists());
    Ok(())
}

fn cmd_budget(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(context.controller.surface().render_budget());
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: export".into()));
    }
    // raw JSON goes straight to stdout so it can be piped
    println!("{}", serde_json::to_string_pretty(context.controller.ledger())?);
    Ok(())
}
