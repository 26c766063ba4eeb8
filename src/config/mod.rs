use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{BudgetError, Result},
    ledger::IdPolicy,
};

/// Overrides the directory that holds `config/config.json`.
pub const HOME_ENV: &str = "BUDGETY_HOME";
const TMP_SUFFIX: &str = "tmp";

/// User preferences for the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub id_policy: IdPolicy,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_true")]
    pub show_month: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::default(),
            ui_color_enabled: true,
            show_month: true,
        }
    }
}

impl Config {
    fn default_true() -> bool {
        true
    }

    /// Applies `config set <key> <value>`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "id-policy" | "id_policy" => {
                self.id_policy = match value {
                    "sequential" => IdPolicy::Sequential,
                    "last-plus-one" | "legacy" => IdPolicy::LastPlusOne,
                    other => {
                        return Err(BudgetError::Config(format!(
                            "unknown id policy `{other}` (expected sequential or last-plus-one)"
                        )))
                    }
                };
            }
            "color" | "ui_color_enabled" => self.ui_color_enabled = parse_switch(key, value)?,
            "month" | "show_month" => self.show_month = parse_switch(key, value)?,
            other => {
                return Err(BudgetError::Config(format!(
                    "unknown setting `{other}` (expected id-policy, color, or month)"
                )))
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id-policy", self.id_policy.as_str().to_string()),
            ("color", switch_label(self.ui_color_enabled).to_string()),
            ("month", switch_label(self.show_month).to_string()),
        ]
    }
}

fn parse_switch(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(BudgetError::Config(format!(
            "`{other}` is not a valid value for {key} (expected on or off)"
        ))),
    }
}

fn switch_label(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Loads and saves [`Config`] under a base directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$BUDGETY_HOME`, falling back to the platform config directory.
    pub fn new() -> Result<Self> {
        Self::with_base_dir(base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir)?;
        Ok(Self {
            path: config_dir.join("config.json"),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn base_dir() -> PathBuf {
    if let Some(home) = env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    dirs::config_dir()
        .map(|dir| dir.join("budgety"))
        .unwrap_or_else(|| PathBuf::from(".budgety"))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.set("id-policy", "last-plus-one").unwrap();
        config.set("color", "off").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.id_policy, IdPolicy::LastPlusOne);
        assert!(!loaded.ui_color_enabled);
        assert!(loaded.show_month);
        assert!(!manager.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"show_month": false}"#).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.id_policy, IdPolicy::Sequential);
        assert!(loaded.ui_color_enabled);
        assert!(!loaded.show_month);
    }

    #[test]
    fn rejects_unknown_settings() {
        let mut config = Config::default();
        assert!(config.set("currency", "EUR").is_err());
        assert!(config.set("color", "maybe").is_err());
        assert!(config.set("id-policy", "random").is_err());
    }
}
