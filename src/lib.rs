//! # traykit
//!
//! Generates laser cutting layouts for stackable trays built from flat
//! panels with finger joints.
//!
//! ## Architecture
//!
//! traykit is organized as a workspace with multiple crates:
//!
//! 1. **traykit-core** - Points, path commands, the turtle path builder
//! 2. **traykit-joinery** - Edges, hole planner, panel renderer, tray design, writers
//! 3. **traykit-settings** - Configuration files
//! 4. **traykit** - Command-line binary that ties the crates together

pub mod cli;

use std::io::Write;

use anyhow::Context;
use tracing::info;

pub use traykit_core::{Contour, PathBuilder, PathCommand, Point};
pub use traykit_joinery::{
    GcodeOptions, StackableTray, TrayDimensions, TrayLayout, TrayParameters,
};
pub use traykit_settings::{Config, OutputFormat, OutputSettings};

use crate::cli::CliArgs;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    // Layouts may go to stdout, so logs stay on stderr.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Generates the tray described by `config` in the requested format.
pub fn render(config: &Config, format: OutputFormat) -> anyhow::Result<String> {
    let tray = StackableTray::new(config.tray.clone())?;
    let layout = tray.generate()?;
    Ok(match format {
        OutputFormat::Svg => layout.to_svg(),
        OutputFormat::Gcode => layout.to_gcode(&config.output.gcode),
    })
}

/// Runs the command line. Output is written only after the whole layout
/// has been generated.
pub fn run(args: &CliArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::new(),
    };
    args.apply(&mut config);
    config.validate()?;

    if args.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let format = args.output_format(&config);
    let output = render(&config, format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), format = format.extension(), "wrote layout");
        }
        None => {
            std::io::stdout().lock().write_all(output.as_bytes())?;
        }
    }

    Ok(())
}
