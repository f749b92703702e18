//! Command-line argument parsing
//!
//! Flags override values from the configuration file.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use traykit_settings::{Config, OutputFormat};

/// Version string shown by `--version`
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Svg,
    Gcode,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Gcode => OutputFormat::Gcode,
        }
    }
}

/// Generate cutting layouts for stackable finger-jointed trays
#[derive(Parser, Debug)]
#[command(name = "traykit", version = LONG_VERSION, about)]
pub struct CliArgs {
    /// Configuration file (.json or .toml)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the layout to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format; defaults to the output file extension, then the config
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Section widths in mm, comma separated
    #[arg(long, value_delimiter = ',', value_name = "WIDTHS")]
    pub sx: Option<Vec<f64>>,

    /// Fraction of the depth covered by the sloped front
    #[arg(long)]
    pub front: Option<f64>,

    /// Material thickness in mm
    #[arg(long)]
    pub thickness: Option<f64>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl CliArgs {
    /// Applies flag overrides to a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(sx) = &self.sx {
            config.tray.sx = sx.clone();
        }
        if let Some(front) = self.front {
            config.tray.front = front;
        }
        if let Some(thickness) = self.thickness {
            config.tray.thickness = thickness;
        }
        if let Some(format) = self.format {
            config.output.format = format.into();
        }
    }

    /// Format to write: `--format`, else the output extension, else the
    /// configured format.
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(format_for_path)
            .unwrap_or(config.output.format)
    }
}

fn format_for_path(path: &Path) -> Option<OutputFormat> {
    match path.extension()?.to_str()? {
        "svg" => Some(OutputFormat::Svg),
        "gcode" | "nc" | "ngc" => Some(OutputFormat::Gcode),
        _ => None,
    }
}
