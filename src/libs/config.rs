//! Configuration management.
//!
//! Settings live in a JSON file next to the database in the platform data
//! directory. The only configurable module today is export (destination
//! directory and default format); a missing or unreadable file falls back
//! to defaults so a broken config never blocks the register itself.

use crate::libs::data_storage::DataStorage;
use crate::libs::export::ExportFormat;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Export defaults used when `roster export` is run without a destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for default-named export files.
    pub output_dir: PathBuf,
    /// Format (and extension) of default-named export files.
    pub default_format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            default_format: ExportFormat::Xlsx,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when the file is
    /// missing or unparsable.
    pub fn read() -> Result<Config> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&config_str).unwrap_or_default();

        Ok(config)
    }

    /// Writes the configuration to the data directory.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;

        Ok(())
    }

    /// Interactive setup wizard, pre-filled from the existing configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigInitHeader, true);

        let configure_export = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfigureExport.to_string())
            .default(true)
            .interact()?;

        if configure_export {
            let default = config.export.clone().unwrap_or_default();

            let output_dir: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptExportDir.to_string())
                .default(default.output_dir.display().to_string())
                .interact_text()?;

            let formats = [ExportFormat::Xlsx, ExportFormat::Csv];
            let selected = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptExportFormat.to_string())
                .items(&formats.iter().map(|f| f.extension()).collect::<Vec<_>>())
                .default(if default.default_format == ExportFormat::Csv { 1 } else { 0 })
                .interact()?;

            config.export = Some(ExportConfig {
                output_dir: output_dir.into(),
                default_format: formats[selected],
            });
        }

        Ok(config)
    }
}
