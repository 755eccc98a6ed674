//! Wizard state definitions
//!
//! Stages, logical inputs and transition outcomes of the selection wizard.

use crate::model::Mode;
use crate::ui::Movement;
use strum::{Display, EnumIter};

/// Stage of the selection wizard.
///
/// # State Transitions
///
/// ```text
/// SelectingDisplay -> SelectingResolution -> SelectingRefreshRate -> Applying -> Done
/// ```
///
/// `Back` walks the first three stages in reverse. `Applying` and `Done`
/// accept no navigation; any input there ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum WizardStage {
    #[default]
    #[strum(serialize = "Select Display")]
    SelectingDisplay,
    #[strum(serialize = "Select Resolution")]
    SelectingResolution,
    #[strum(serialize = "Select Refresh Rate")]
    SelectingRefreshRate,
    #[strum(serialize = "Applying")]
    Applying,
    #[strum(serialize = "Done")]
    Done,
}

impl WizardStage {
    /// The stage `Back` returns to, if any.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::SelectingResolution => Some(Self::SelectingDisplay),
            Self::SelectingRefreshRate => Some(Self::SelectingResolution),
            Self::SelectingDisplay | Self::Applying | Self::Done => None,
        }
    }

    /// Stages where the user picks from a list.
    pub fn is_selecting(self) -> bool {
        matches!(
            self,
            Self::SelectingDisplay | Self::SelectingResolution | Self::SelectingRefreshRate
        )
    }

    /// Stages that only accept exit.
    pub fn is_terminal(self) -> bool {
        !self.is_selecting()
    }
}

/// Logical commands the wizard understands, independent of key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardInput {
    /// Move the highlight; handled by the list
    Move(Movement),
    Confirm,
    Back,
    Quit,
}

/// What the controller must do after an input.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardOutcome {
    /// Keep processing events
    Continue,
    /// End the run without side effects
    Exit,
    /// Launch the apply action, then keep processing events
    Apply(ApplyRequest),
}

/// The single side effect of a completed selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyRequest {
    /// Output name of the chosen display
    pub output: String,
    /// The chosen mode
    pub mode: Mode,
}

/// Successful outcome of the apply action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyReport {
    /// The configuration command ran and exited 0
    Applied,
    /// Nothing ran; carries the command line that would have
    DryRun(String),
}
