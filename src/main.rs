//! randr-tui - Main entry point
//!
//! Acquires the display report, then runs the selection wizard or one of the
//! non-interactive subcommands.

use randrtui::app::{App, RunOutcome};
use randrtui::cli::{Cli, Commands};
use randrtui::command_args::{ApplyArgs, CommandArgs, QueryArgs};
use randrtui::command_runner;
use randrtui::config::RandrConfig;
use randrtui::error::{self, RandrTuiError};
use randrtui::model::{Display, Mode};
use randrtui::parser::parse_report;
use randrtui::terminal_guard::{self, TerminalGuard};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize the logger with appropriate settings
///
/// Logs go to `log_file` when given, otherwise to stderr at a quieter level
/// so the TUI is not drawn over. RUST_LOG overrides the default level.
fn init_logger(log_file: Option<&Path>) {
    let default_level = if log_file.is_some() { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    match log_file.map(std::fs::File::create) {
        Some(Ok(file)) => builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init(),
        Some(Err(e)) => {
            builder.with_writer(std::io::stderr).init();
            warn!("Failed to open log file, logging to stderr: {}", e);
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
}

/// Main application entry point
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    init_logger(cli.log_file.as_deref());
    info!("randr-tui starting up");

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            eprintln!("✗ {}", RandrTuiError::config(format!("{:#}", e)));
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Some(Commands::List { json }) => run_list(&config, cli.report.as_deref(), json),
        Some(Commands::Apply { output, mode, rate }) => {
            let (width, height) = mode;
            run_apply(&config, output, Mode::new(width, height, rate, false), cli.dry_run)
        }
        None => run_tui(&config, cli.report.as_deref(), cli.dry_run),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load the configuration file, or defaults when none was given
fn load_config(path: Option<&Path>) -> anyhow::Result<RandrConfig> {
    let config = match path {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            RandrConfig::load_from_file(path)?
        }
        None => RandrConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Read the report from `report` or run the query command, then parse it
fn acquire_displays(config: &RandrConfig, report: Option<&Path>) -> error::Result<Vec<Display>> {
    let text = match report {
        Some(path) => command_runner::read_report_file(path)?,
        None => command_runner::acquire_report(&QueryArgs::from_config(config))?,
    };
    let displays = parse_report(&text);
    info!("Parsed {} display(s)", displays.len());
    Ok(displays)
}

/// Run the interactive wizard
fn run_tui(config: &RandrConfig, report: Option<&Path>, dry_run: bool) -> error::Result<ExitCode> {
    let displays = acquire_displays(config, report);
    if let Err(e) = &displays {
        error!("Report acquisition failed: {}", e);
    }

    if let Err(e) = terminal_guard::init_signal_handlers() {
        warn!("Failed to initialize signal handlers: {}", e);
    }
    terminal_guard::install_panic_hook();
    debug!("Signal handlers initialized");

    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(displays, config.clone(), dry_run);
    let outcome = app.run(guard.terminal_mut())?;
    drop(guard);

    info!("Run finished: {:?}", outcome);
    Ok(match outcome {
        RunOutcome::Completed => ExitCode::SUCCESS,
        RunOutcome::AcquisitionFailed => ExitCode::FAILURE,
    })
}

/// Print the parsed displays
fn run_list(config: &RandrConfig, report: Option<&Path>, json: bool) -> error::Result<ExitCode> {
    let displays = acquire_displays(config, report)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&displays)?);
        return Ok(ExitCode::SUCCESS);
    }

    for display in &displays {
        println!("{} ({})", display.name, display.status());
        for resolution in display.resolutions() {
            let rates: Vec<String> = resolution
                .modes
                .iter()
                .map(|m| format!("{}{}", m.rate_label(), if m.current { "*" } else { "" }))
                .collect();
            println!("  {}  {}", resolution, rates.join(" "));
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Apply a mode without the wizard
fn run_apply(
    config: &RandrConfig,
    output: String,
    mode: Mode,
    dry_run: bool,
) -> error::Result<ExitCode> {
    let args = ApplyArgs::new(config, output, mode);

    if dry_run {
        println!("Dry run: would run `{}`", args.command_line());
        return Ok(ExitCode::SUCCESS);
    }

    command_runner::apply_mode(&args)?;
    println!("✓ Display settings applied successfully!");
    Ok(ExitCode::SUCCESS)
}
