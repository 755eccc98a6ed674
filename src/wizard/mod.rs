//! Selection wizard
//!
//! A finite-state controller over the parsed displays. It owns the displays
//! and two persistent indices (chosen display, chosen resolution); the
//! resolution and refresh-rate views are derived from those on every stage
//! entry and pushed into a [`SelectionList`].
//!
//! The wizard never runs commands. Confirming a refresh rate yields a
//! [`WizardOutcome::Apply`]; the controller runs it and reports back through
//! [`Wizard::apply_completed`].
//!
//! # Module Structure
//! - `state` - stages, inputs and outcomes

mod state;

pub use state::{ApplyReport, ApplyRequest, WizardInput, WizardOutcome, WizardStage};

use crate::error::{RandrTuiError, Result};
use crate::model::{Display, Resolution};
use crate::ui::{ListEntry, SelectionList};
use tracing::{debug, info, warn};

pub const APPLYING_MESSAGE: &str = "Applying changes...";
pub const APPLIED_MESSAGE: &str = "✓ Display settings applied successfully!";

/// The display → resolution → refresh rate → apply state machine.
#[derive(Debug)]
pub struct Wizard<L: SelectionList> {
    stage: WizardStage,
    displays: Vec<Display>,
    selected_display: usize,
    selected_resolution: usize,
    list: L,
    /// Inline warning in the display stage, result text in `Done`
    message: String,
}

impl<L: SelectionList> Wizard<L> {
    /// Start in `SelectingDisplay` with the display list shown.
    pub fn new(displays: Vec<Display>, list: L) -> Self {
        info!("Starting wizard with {} display(s)", displays.len());
        let mut wizard = Self {
            stage: WizardStage::SelectingDisplay,
            displays,
            selected_display: 0,
            selected_resolution: 0,
            list,
            message: String::new(),
        };
        wizard.show_displays();
        wizard
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn displays(&self) -> &[Display] {
        &self.displays
    }

    pub fn selected_display(&self) -> usize {
        self.selected_display
    }

    pub fn selected_resolution(&self) -> usize {
        self.selected_resolution
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    /// Resolution view of the chosen display, derived fresh on every call.
    pub fn resolution_view(&self) -> Vec<Resolution> {
        self.displays
            .get(self.selected_display)
            .map(Display::resolutions)
            .unwrap_or_default()
    }

    /// Process one logical input.
    pub fn handle_input(&mut self, input: WizardInput) -> WizardOutcome {
        if input == WizardInput::Quit || self.stage.is_terminal() {
            debug!("Exit requested in stage {:?}", self.stage);
            return WizardOutcome::Exit;
        }

        match input {
            WizardInput::Move(movement) => {
                self.list.move_selection(movement);
                WizardOutcome::Continue
            }
            WizardInput::Back => {
                self.go_back();
                WizardOutcome::Continue
            }
            WizardInput::Confirm => match self.stage {
                WizardStage::SelectingDisplay => self.confirm_display(),
                WizardStage::SelectingResolution => self.confirm_resolution(),
                WizardStage::SelectingRefreshRate => self.confirm_refresh_rate(),
                WizardStage::Applying | WizardStage::Done => WizardOutcome::Exit,
            },
            WizardInput::Quit => WizardOutcome::Exit,
        }
    }

    /// Record the outcome of the apply action and finish.
    pub fn apply_completed(&mut self, result: Result<ApplyReport>) {
        if self.stage != WizardStage::Applying {
            warn!("Ignoring apply completion in stage {:?}", self.stage);
            return;
        }

        self.message = match result {
            Ok(ApplyReport::Applied) => APPLIED_MESSAGE.to_string(),
            Ok(ApplyReport::DryRun(command)) => format!("Dry run: would run `{}`", command),
            Err(e) => {
                warn!("Apply failed: {}", e);
                format!("Error: {}", e)
            }
        };
        self.stage = WizardStage::Done;
    }

    fn go_back(&mut self) {
        match self.stage.previous() {
            Some(WizardStage::SelectingDisplay) => {
                self.stage = WizardStage::SelectingDisplay;
                self.show_displays();
            }
            Some(WizardStage::SelectingResolution) => {
                self.stage = WizardStage::SelectingResolution;
                self.show_resolutions();
            }
            _ => {}
        }
    }

    fn confirm_display(&mut self) -> WizardOutcome {
        if self.displays.is_empty() {
            info!("No displays to configure");
            return WizardOutcome::Exit;
        }
        let Some(index) = self.list.selected() else {
            return WizardOutcome::Continue;
        };

        if let Err(violation) = self.check_display(index) {
            warn!("{}", violation);
            self.message = violation.to_string();
            return WizardOutcome::Continue;
        }

        if index != self.selected_display {
            self.selected_resolution = 0;
        }
        self.selected_display = index;
        self.message.clear();
        self.stage = WizardStage::SelectingResolution;
        self.show_resolutions();
        WizardOutcome::Continue
    }

    /// Guard for entering the resolution stage.
    fn check_display(&self, index: usize) -> Result<()> {
        let display = self
            .displays
            .get(index)
            .ok_or_else(|| RandrTuiError::selection_guard("No display selected"))?;

        if !display.connected {
            return Err(RandrTuiError::selection_guard(format!(
                "Display not connected: {}",
                display.name
            )));
        }
        if display.modes.is_empty() {
            return Err(RandrTuiError::selection_guard(format!(
                "No modes reported for {}",
                display.name
            )));
        }
        Ok(())
    }

    fn confirm_resolution(&mut self) -> WizardOutcome {
        let Some(index) = self.list.selected() else {
            return WizardOutcome::Continue;
        };
        if index >= self.resolution_view().len() {
            return WizardOutcome::Continue;
        }

        self.selected_resolution = index;
        self.stage = WizardStage::SelectingRefreshRate;
        self.show_refresh_rates();
        WizardOutcome::Continue
    }

    fn confirm_refresh_rate(&mut self) -> WizardOutcome {
        let Some(rate_index) = self.list.selected() else {
            return WizardOutcome::Continue;
        };
        let resolutions = self.resolution_view();
        let Some(mode) = resolutions
            .get(self.selected_resolution)
            .and_then(|r| r.modes.get(rate_index))
            .copied()
        else {
            return WizardOutcome::Continue;
        };
        let Some(display) = self.displays.get(self.selected_display) else {
            return WizardOutcome::Continue;
        };

        let request = ApplyRequest {
            output: display.name.clone(),
            mode,
        };
        info!("Applying {} to {}", mode, request.output);

        self.stage = WizardStage::Applying;
        self.message = APPLYING_MESSAGE.to_string();
        WizardOutcome::Apply(request)
    }

    fn show_displays(&mut self) {
        let items = self
            .displays
            .iter()
            .map(|d| ListEntry::with_description(d.name.clone(), d.status()))
            .collect();

        self.list.set_items(items);
        self.list.set_title("Select Display".to_string());
        self.list.select(self.selected_display);
        self.message.clear();
    }

    fn show_resolutions(&mut self) {
        let name = self
            .displays
            .get(self.selected_display)
            .map(|d| d.name.clone())
            .unwrap_or_default();
        let items = self
            .resolution_view()
            .iter()
            .map(|r| ListEntry::with_description(r.to_string(), r.rates_label()))
            .collect();

        self.list.set_items(items);
        self.list.set_title(format!("Select Resolution for {}", name));
        self.list.select(self.selected_resolution);
    }

    fn show_refresh_rates(&mut self) {
        let resolutions = self.resolution_view();
        let Some(resolution) = resolutions.get(self.selected_resolution) else {
            return;
        };
        let items = resolution
            .modes
            .iter()
            .map(|m| {
                let marker = if m.current { '*' } else { ' ' };
                ListEntry::new(format!("{} {} Hz", marker, m.rate_label()))
            })
            .collect();

        self.list.set_items(items);
        self.list.set_title(format!(
            "Select Refresh Rate for {}x{}",
            resolution.width, resolution.height
        ));
    }
}
