//! Type-safe command argument contracts.
//!
//! The query and apply commands are described by structs implementing
//! [`CommandArgs`] instead of raw string vectors, so the flag layout the
//! display utility expects lives in exactly one place.

use crate::config::RandrConfig;
use crate::model::Mode;

/// Trait for typed external command arguments.
///
/// # Contract
///
/// - `program()`: the executable to run (resolved through `PATH`).
/// - `to_cli_args()`: arguments exactly as the program expects them.
pub trait CommandArgs {
    /// The executable name or path.
    fn program(&self) -> &str;

    /// Convert struct fields to CLI arguments.
    fn to_cli_args(&self) -> Vec<String>;

    /// Full command line, for logs and dry-run messages.
    fn command_line(&self) -> String {
        let mut parts = vec![self.program().to_string()];
        parts.extend(self.to_cli_args());
        parts.join(" ")
    }
}

/// Arguments for the display-query command (`xrandr --query`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    pub program: String,
    pub args: Vec<String>,
}

impl QueryArgs {
    pub fn from_config(config: &RandrConfig) -> Self {
        Self {
            program: config.query_command.clone(),
            args: config.query_args.clone(),
        }
    }
}

impl CommandArgs for QueryArgs {
    fn program(&self) -> &str {
        &self.program
    }

    fn to_cli_args(&self) -> Vec<String> {
        self.args.clone()
    }
}

/// Arguments for the apply command.
///
/// Produces `--output <name> --mode <W>x<H> --rate <rate>` with the rate
/// formatted to one decimal place.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyArgs {
    pub program: String,
    pub output: String,
    pub mode: Mode,
}

impl ApplyArgs {
    pub fn new(config: &RandrConfig, output: impl Into<String>, mode: Mode) -> Self {
        Self {
            program: config.apply_command.clone(),
            output: output.into(),
            mode,
        }
    }
}

impl CommandArgs for ApplyArgs {
    fn program(&self) -> &str {
        &self.program
    }

    fn to_cli_args(&self) -> Vec<String> {
        vec![
            "--output".to_string(),
            self.output.clone(),
            "--mode".to_string(),
            self.mode.size_label(),
            "--rate".to_string(),
            self.mode.rate_label(),
        ]
    }
}
