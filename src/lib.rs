//! randr-tui Library
//!
//! Parses the textual report of a display-configuration tool into displays
//! and modes, and drives a three-stage selection wizard that applies the
//! chosen mode.

pub mod app;
pub mod cli;
pub mod command_args;
pub mod command_runner;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod terminal_guard;
pub mod theme;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use command_args::{ApplyArgs, CommandArgs, QueryArgs};
pub use config::RandrConfig;
pub use error::RandrTuiError;
pub use model::{Display, Mode, Resolution};
pub use parser::parse_report;
pub use ui::{ListEntry, MenuList, Movement, SelectionList};
pub use wizard::{ApplyReport, ApplyRequest, Wizard, WizardInput, WizardOutcome, WizardStage};
