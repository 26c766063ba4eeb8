use chrono::Local;

use crate::{
    cli::{
        core::{CommandError, CommandResult, ShellContext},
        output::{self, OutputPreferences},
        registry::{CommandEntry, CommandRegistry},
    },
    format::format_month,
    render::RenderSurface,
    utils::build_info,
};

const CONFIG_USAGE: &str = "config [show] | config set <id-policy|color|month> <value>";

pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        CommandEntry::new("help", "List commands or show usage", "help [command]", cmd_help)
            .with_aliases(&["?"]),
    );
    registry.register(CommandEntry::new(
        "config",
        "Show or change preferences",
        CONFIG_USAGE,
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        cmd_version,
    ));
    registry.register(
        CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit).with_aliases(&["quit"]),
    );
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.registry.get(&name.to_lowercase()) {
            Some(entry) => {
                output::section(entry.name);
                output::info(format!("  {}", entry.description));
                output::info(format!("  usage: {}", entry.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Available commands");
    for entry in context.registry.list() {
        output::info(format!("  {:<8} {}", entry.name, entry.description));
    }
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            for (key, value) in context.config.entries() {
                output::info(format!("  {key:<10} {value}"));
            }
            output::info(format!(
                "  {:<10} {}",
                "file",
                context.config_manager.path().display()
            ));
            Ok(())
        }
        ["set", key, value] => {
            context.config.set(key, value)?;
            context.config_manager.save(&context.config)?;
            apply_config(context);
            output::success(format!("Set {key} to {value}"));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: {CONFIG_USAGE}"
        ))),
    }
}

/// Pushes the current configuration into the running shell.
fn apply_config(context: &mut ShellContext) {
    let prefs = OutputPreferences::from_config(&context.config);
    output::set_preferences(prefs);
    let policy = context.config.id_policy;
    context.controller.ledger_mut().set_id_policy(policy);

    let surface = context.controller.surface_mut();
    surface.set_color(prefs.color_enabled);
    if context.config.show_month {
        surface.display_month(&format_month(Local::now().date_naive()));
    } else {
        surface.hide_month();
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(meta.summary());
    output::info(format!("  Built at : {}", meta.timestamp));
    output::info(format!("  Target   : {}", meta.target));
    output::info(format!("  Profile  : {}", meta.profile));
    output::info(format!("  Rustc    : {}", meta.rustc));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
