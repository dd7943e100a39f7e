use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use profit_ui::{config::AppConfig, logging, terminal};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// After-tax profit calculator.
///
/// With `--revenue`, `--expenses` or `--tax-rate` the result is printed
/// once. Otherwise the calculator window opens, or a terminal prompt when
/// built without the window.
#[derive(Debug, Parser)]
struct Cli {
    /// Revenue in cents, e.g. 10000000.
    #[arg(long, allow_hyphen_values = true)]
    revenue: Option<String>,

    /// Expenses in cents, e.g. 5000000.
    #[arg(long, allow_hyphen_values = true)]
    expenses: Option<String>,

    /// Tax rate in percent, e.g. 19.5.
    #[arg(long, allow_hyphen_values = true)]
    tax_rate: Option<String>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,profit_core=trace`. Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file. Overrides the config file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not print log records to stdout.
    #[arg(long)]
    quiet: bool,

    /// Use the terminal prompt even when the window is available.
    #[arg(long)]
    terminal: bool,
}

impl Cli {
    fn has_values(&self) -> bool {
        self.revenue.is_some() || self.expenses.is_some() || self.tax_rate.is_some()
    }
}

// ─── logging ─────────────────────────────────────────────────────────────────

/// Applies log settings, command line first, then config file.
fn configure_logging(
    cli: &Cli,
    config: &AppConfig,
) -> anyhow::Result<()> {
    if cli.quiet {
        logging::set_stdout_enabled(false)?;
    }
    if let Some(level) = cli.log_level.as_deref().or(config.log_level.as_deref()) {
        logging::set_log_level(level)?;
    }
    if let Some(path) = cli.log_file.as_ref().or(config.log_file.as_ref()) {
        logging::enable_file_logging(path)?;
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    configure_logging(&cli, &config)?;
    debug!(?config, "configuration loaded");

    if cli.has_values() {
        let text = terminal::calculate_once(
            cli.revenue.as_deref(),
            cli.expenses.as_deref(),
            cli.tax_rate.as_deref(),
        );
        println!("{text}");
        return Ok(());
    }

    if cfg!(feature = "gui") && !cli.terminal {
        #[cfg(feature = "gui")]
        {
            info!("opening calculator window");
            profit_ui::run_window(config.window.into());
            return Ok(());
        }
    }

    info!("starting terminal prompt");
    terminal::run_prompt(io::stdin().lock(), io::stdout().lock())?;
    logging::disable_file_logging();

    Ok(())
}
