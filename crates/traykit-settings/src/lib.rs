//! traykit Settings Crate
//!
//! Handles configuration files: the tray design and its output settings.

pub mod config;
pub mod error;

pub use config::{Config, OutputFormat, OutputSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
