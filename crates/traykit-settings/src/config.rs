//! Configuration file model.
//!
//! A configuration holds the tray design and how it is written out. Files
//! are JSON or TOML, chosen by extension, and are validated both on load and
//! before saving.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use traykit_joinery::{GcodeOptions, TrayParameters};

use crate::error::{ConfigError, ConfigResult, SettingsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Gcode,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Gcode => "gcode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub gcode: GcodeOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tray: TrayParameters,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> ConfigResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FileFormat::Json),
        Some("toml") => Ok(FileFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(format!(
            "{} (config file must be .json or .toml)",
            other.unwrap_or("no extension")
        ))),
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.tray.validate()?;

        let gcode = &self.output.gcode;
        if gcode.laser_passes == 0 {
            return Err(out_of_range("output.gcode.laser_passes", gcode.laser_passes).into());
        }
        if !(gcode.feed_rate.is_finite() && gcode.feed_rate > 0.0) {
            return Err(out_of_range("output.gcode.feed_rate", gcode.feed_rate).into());
        }
        if !(gcode.z_step_down.is_finite() && gcode.z_step_down >= 0.0) {
            return Err(out_of_range("output.gcode.z_step_down", gcode.z_step_down).into());
        }
        for (key, value) in [
            ("output.gcode.offset_x", gcode.offset_x),
            ("output.gcode.offset_y", gcode.offset_y),
            ("output.gcode.safe_z", gcode.safe_z),
        ] {
            if !value.is_finite() {
                return Err(out_of_range(key, value).into());
            }
        }

        Ok(())
    }
}
