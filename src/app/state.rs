//! Application state definitions

use crate::error::RandrTuiError;
use crate::model::Display;
use crate::ui::MenuList;
use crate::wizard::{Wizard, WizardStage};

/// What the application is showing.
#[derive(Debug)]
pub enum Screen {
    /// The selection wizard
    Wizard(Wizard<MenuList>),
    /// The report could not be acquired; any key exits
    Failed(RandrTuiError),
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl AppState {
    /// Build the initial state from the acquisition result.
    pub fn from_report(displays: crate::error::Result<Vec<Display>>) -> Self {
        let screen = match displays {
            Ok(displays) => Screen::Wizard(Wizard::new(displays, MenuList::new())),
            Err(e) => Screen::Failed(e),
        };
        Self {
            screen,
            help_visible: false,
        }
    }

    /// Current wizard stage, `None` on the failure screen.
    pub fn stage(&self) -> Option<WizardStage> {
        match &self.screen {
            Screen::Wizard(wizard) => Some(wizard.stage()),
            Screen::Failed(_) => None,
        }
    }

    pub fn wizard(&self) -> Option<&Wizard<MenuList>> {
        match &self.screen {
            Screen::Wizard(wizard) => Some(wizard),
            Screen::Failed(_) => None,
        }
    }

    pub fn wizard_mut(&mut self) -> Option<&mut Wizard<MenuList>> {
        match &mut self.screen {
            Screen::Wizard(wizard) => Some(wizard),
            Screen::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.screen, Screen::Failed(_))
    }
}
