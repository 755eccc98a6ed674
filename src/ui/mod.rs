//! User interface rendering module
//!
//! - `list` - The selection list widget behind every wizard stage
//! - `screens` - Per-stage screens, the failure screen and the navigation bar

mod list;
mod screens;

pub use list::{ListEntry, MenuList, Movement, SelectionList};

use crate::app::{AppState, Screen};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI renderer
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &mut AppState, keybinding_ctx: &KeybindingContext) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        let stage = state.stage();
        match &mut state.screen {
            Screen::Wizard(wizard) => screens::render_wizard(f, wizard, content_area),
            Screen::Failed(err) => screens::render_failure(f, err, content_area),
        }

        screens::render_nav_bar(f, stage, keybinding_ctx, nav_bar_area);

        // Help overlay goes on top of everything
        if state.help_visible {
            if let Some(stage) = stage {
                let area = f.area();
                HelpOverlay::new(stage, keybinding_ctx).render(f, area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RandrTuiError;
    use crate::parser::parse_report;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        let renderer = UiRenderer::new();
        let ctx = KeybindingContext::new();
        terminal
            .draw(|f| renderer.render(f, state, &ctx))
            .expect("draw");
        screen_text(&terminal)
    }

    #[test]
    fn test_display_stage_renders_list_and_nav_bar() {
        let report = "DP-1 connected 1920x1080+0+0\n   1920x1080     60.00*+\n";
        let mut state = AppState::from_report(Ok(parse_report(report)));
        let text = draw(&mut state);

        assert!(text.contains("Select Display"));
        assert!(text.contains("DP-1"));
        assert!(text.contains("connected - 1920x1080 @ 60.0Hz"));
        assert!(text.contains("Navigate"));
    }

    #[test]
    fn test_failure_screen_shows_error() {
        let mut state =
            AppState::from_report(Err(RandrTuiError::acquisition("xrandr: command not found")));
        let text = draw(&mut state);

        assert!(text.contains("xrandr: command not found"));
        assert!(text.contains("Press any key to exit"));
    }

    #[test]
    fn test_help_overlay_drawn_when_visible() {
        let report = "DP-1 connected\n   1920x1080     60.00*\n";
        let mut state = AppState::from_report(Ok(parse_report(report)));
        state.help_visible = true;
        let text = draw(&mut state);

        assert!(text.contains("Press ? or Esc to close"));
    }
}
