use clap::Parser;
use traykit::cli::CliArgs;
use traykit::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let args = CliArgs::parse();
    traykit::run(&args)
}
