use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::parser::parse_dimensions;

/// randr-tui - pick a display mode from the xrandr report
#[derive(Parser)]
#[command(name = "randr-tui")]
#[command(about = "Interactive display resolution and refresh rate selector")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: show the apply command instead of running it.
    ///
    /// The query command still runs so the lists are real.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// JSON configuration file (query/apply commands)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Read a saved report from this file instead of running the query command
    #[arg(long, global = true)]
    pub report: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the parsed displays and exit
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Apply a mode without the TUI
    Apply {
        /// Output name (e.g., HDMI-1)
        #[arg(short, long)]
        output: String,
        /// Resolution as WIDTHxHEIGHT (e.g., 1920x1080)
        #[arg(short, long, value_parser = parse_mode_arg)]
        mode: (u32, u32),
        /// Refresh rate in Hz (e.g., 60.0)
        #[arg(short, long, value_parser = parse_rate_arg)]
        rate: f64,
    },
}

fn parse_mode_arg(value: &str) -> Result<(u32, u32), String> {
    parse_dimensions(value).ok_or_else(|| format!("invalid mode '{}', expected WIDTHxHEIGHT", value))
}

fn parse_rate_arg(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
        _ => Err(format!("invalid refresh rate '{}'", value)),
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["randr-tui"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["randr-tui", "list", "--json", "--report", "saved.txt"])
            .expect("parse");
        assert_eq!(cli.report, Some(PathBuf::from("saved.txt")));
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
    }

    #[test]
    fn test_apply_arguments() {
        let cli = Cli::try_parse_from([
            "randr-tui",
            "--dry-run",
            "apply",
            "--output",
            "DP-1",
            "--mode",
            "2560x1440",
            "--rate",
            "143.91",
        ])
        .expect("parse");
        assert!(cli.dry_run);
        match cli.command {
            Some(Commands::Apply { output, mode, rate }) => {
                assert_eq!(output, "DP-1");
                assert_eq!(mode, (2560, 1440));
                assert!((rate - 143.91).abs() < f64::EPSILON);
            }
            _ => panic!("expected apply"),
        }
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let result = Cli::try_parse_from([
            "randr-tui", "apply", "-o", "DP-1", "-m", "1920by1080", "-r", "60",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        let result = Cli::try_parse_from([
            "randr-tui", "apply", "-o", "DP-1", "-m", "1920x1080", "-r", "0",
        ]);
        assert!(result.is_err());
    }
}
