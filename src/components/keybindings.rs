//! Keybinding system for context-aware keyboard shortcuts
//!
//! Maps crossterm key events to logical wizard inputs per stage, and provides
//! the hints shown in the navigation bar and the help overlay.

use crate::ui::Movement;
use crate::wizard::{WizardInput, WizardStage};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    Home,
    End,
    Select,
    Back,
    Quit,
    Help,
    Dismiss,
}

impl KeyAction {
    /// The wizard input this action stands for. `Help` is handled by the app.
    pub fn to_wizard_input(self) -> Option<WizardInput> {
        match self {
            Self::NavigateUp => Some(WizardInput::Move(Movement::Up)),
            Self::NavigateDown => Some(WizardInput::Move(Movement::Down)),
            Self::PageUp => Some(WizardInput::Move(Movement::PageUp)),
            Self::PageDown => Some(WizardInput::Move(Movement::PageDown)),
            Self::Home => Some(WizardInput::Move(Movement::First)),
            Self::End => Some(WizardInput::Move(Movement::Last)),
            Self::Select => Some(WizardInput::Confirm),
            Self::Back => Some(WizardInput::Back),
            Self::Quit | Self::Dismiss => Some(WizardInput::Quit),
            Self::Help => None,
        }
    }
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding. Shift is ignored for characters.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        self.key == event.code && self.modifiers == modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Stage-specific keybindings
    stage_bindings: HashMap<WizardStage, Vec<Keybinding>>,
    /// Global keybindings (available in all stages)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            stage_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all stages
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let list_bindings = vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
            Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Navigate up"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
            Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Navigate down"),
            Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
            Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
            Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Go to first"),
            Keybinding::new(KeyCode::End, KeyAction::End, "End", "Go to last"),
        ];

        let mut display_bindings = list_bindings.clone();
        display_bindings.push(Keybinding::new(
            KeyCode::Enter,
            KeyAction::Select,
            "Enter",
            "Choose display",
        ));
        self.stage_bindings
            .insert(WizardStage::SelectingDisplay, display_bindings);

        let back_bindings = [
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
            Keybinding::new(KeyCode::Backspace, KeyAction::Back, "Bksp", "Back"),
            Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
        ];

        let mut resolution_bindings = list_bindings.clone();
        resolution_bindings.push(Keybinding::new(
            KeyCode::Enter,
            KeyAction::Select,
            "Enter",
            "Choose resolution",
        ));
        resolution_bindings.extend(back_bindings.iter().cloned());
        self.stage_bindings
            .insert(WizardStage::SelectingResolution, resolution_bindings);

        let mut rate_bindings = list_bindings;
        rate_bindings.push(Keybinding::new(
            KeyCode::Enter,
            KeyAction::Select,
            "Enter",
            "Apply refresh rate",
        ));
        rate_bindings.extend(back_bindings.iter().cloned());
        self.stage_bindings
            .insert(WizardStage::SelectingRefreshRate, rate_bindings);

        let exit_bindings = vec![
            Keybinding::new(KeyCode::Enter, KeyAction::Dismiss, "Enter", "Exit"),
            Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Exit"),
        ];
        self.stage_bindings
            .insert(WizardStage::Applying, exit_bindings.clone());
        self.stage_bindings.insert(WizardStage::Done, exit_bindings);
    }

    /// Get keybindings for a specific stage (includes global bindings)
    pub fn get_bindings(&self, stage: WizardStage) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(stage_bindings) = self.stage_bindings.get(&stage) {
            bindings.extend(stage_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action for the given stage.
    pub fn resolve(&self, stage: WizardStage, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(stage)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Every stage with at least one binding
    pub fn stages(&self) -> Vec<WizardStage> {
        WizardStage::iter()
            .filter(|s| self.stage_bindings.contains_key(s))
            .collect()
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, stage: WizardStage) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(stage);

        let priority_actions = match stage {
            WizardStage::SelectingDisplay => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            WizardStage::SelectingResolution | WizardStage::SelectingRefreshRate => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            WizardStage::Applying | WizardStage::Done => vec![KeyAction::Dismiss],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                // Up/Down are shown as one combined item
                if action == KeyAction::NavigateUp {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navigate".to_string(),
                    });
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a stage (for help overlay)
    pub fn get_help_content(&self, stage: WizardStage) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                        | KeyAction::Home
                        | KeyAction::End
                )
            }),
            ("Actions", |a| matches!(a, KeyAction::Select | KeyAction::Dismiss)),
            ("General", |a| {
                matches!(a, KeyAction::Back | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = self
                    .get_bindings(stage)
                    .into_iter()
                    .filter(|b| belongs(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_confirms_in_selecting_stages() {
        let ctx = KeybindingContext::new();
        for stage in [
            WizardStage::SelectingDisplay,
            WizardStage::SelectingResolution,
            WizardStage::SelectingRefreshRate,
        ] {
            assert_eq!(ctx.resolve(stage, &key(KeyCode::Enter)), Some(KeyAction::Select));
        }
    }

    #[test]
    fn test_escape_is_not_bound_in_display_stage() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(WizardStage::SelectingDisplay, &key(KeyCode::Esc)), None);
        assert_eq!(
            ctx.resolve(WizardStage::SelectingResolution, &key(KeyCode::Esc)),
            Some(KeyAction::Back)
        );
    }

    #[test]
    fn test_quit_keys_everywhere() {
        let ctx = KeybindingContext::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for stage in WizardStage::iter() {
            assert_eq!(ctx.resolve(stage, &key(KeyCode::Char('q'))), Some(KeyAction::Quit));
            assert_eq!(ctx.resolve(stage, &ctrl_c), Some(KeyAction::Quit));
        }
    }

    #[test]
    fn test_plain_c_is_not_quit() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(WizardStage::SelectingDisplay, &key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_shifted_question_mark_is_help() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(ctx.resolve(WizardStage::SelectingDisplay, &event), Some(KeyAction::Help));
    }

    #[test]
    fn test_actions_map_to_wizard_inputs() {
        assert_eq!(
            KeyAction::NavigateDown.to_wizard_input(),
            Some(WizardInput::Move(Movement::Down))
        );
        assert_eq!(KeyAction::Select.to_wizard_input(), Some(WizardInput::Confirm));
        assert_eq!(KeyAction::Dismiss.to_wizard_input(), Some(WizardInput::Quit));
        assert_eq!(KeyAction::Help.to_wizard_input(), None);
    }

    #[test]
    fn test_nav_items_show_back_only_after_first_stage() {
        let ctx = KeybindingContext::new();
        let has_back = |stage| {
            ctx.get_nav_items(stage)
                .iter()
                .any(|i| i.action_label == "Back")
        };
        assert!(!has_back(WizardStage::SelectingDisplay));
        assert!(has_back(WizardStage::SelectingResolution));
        assert!(has_back(WizardStage::SelectingRefreshRate));
    }

    #[test]
    fn test_help_content_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(WizardStage::SelectingResolution);
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Actions", "General"]);
    }

    #[test]
    fn test_every_stage_has_bindings() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.stages().len(), WizardStage::iter().count());
    }
}
