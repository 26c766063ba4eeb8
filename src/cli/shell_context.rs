use chrono::Local;
use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    controller::BudgetController,
    errors::CliError,
    ledger::Ledger,
};

use super::{
    commands,
    output::{self, OutputPreferences},
    registry::CommandRegistry,
    terminal::TerminalSurface,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can reach.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub controller: BudgetController<TerminalSurface>,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        Ok(Self::with_config(mode, config_manager, config))
    }

    /// Builds a context around an already loaded configuration.
    pub fn with_config(mode: CliMode, config_manager: ConfigManager, config: Config) -> Self {
        let prefs = OutputPreferences::from_config(&config);
        output::set_preferences(prefs);

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let surface = TerminalSurface::new(prefs.color_enabled);
        let mut controller =
            BudgetController::with_ledger(Ledger::with_id_policy(config.id_policy), surface);
        let today = config.show_month.then(|| Local::now().date_naive());
        controller.init(today);

        Self {
            mode,
            registry,
            controller,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            last_command: None,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        "budgety> ".to_string()
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }
}
