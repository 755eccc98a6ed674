//! Wizard screens
//!
//! One render function per wizard stage group, plus the acquisition failure
//! screen and the navigation bar.

use super::{MenuList, SelectionList};
use crate::components::keybindings::KeybindingContext;
use crate::error::RandrTuiError;
use crate::theme::{Colors, Styles};
use crate::wizard::{Wizard, WizardStage, APPLIED_MESSAGE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the wizard for its current stage.
pub fn render_wizard(f: &mut Frame, wizard: &mut Wizard<MenuList>, area: Rect) {
    match wizard.stage() {
        WizardStage::SelectingDisplay => render_display_stage(f, wizard, area),
        WizardStage::SelectingResolution | WizardStage::SelectingRefreshRate => {
            wizard.list_mut().render(f, area);
        }
        WizardStage::Applying => render_applying(f, area),
        WizardStage::Done => render_done(f, wizard.message(), area),
    }
}

/// Display list with the inline warning line below it.
fn render_display_stage(f: &mut Frame, wizard: &mut Wizard<MenuList>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Display list
            Constraint::Length(1), // Warning
        ])
        .split(area);

    let warning = if wizard.displays().is_empty() {
        "No displays found".to_string()
    } else {
        wizard.message().to_string()
    };

    wizard.list_mut().render(f, chunks[0]);

    if !warning.is_empty() {
        let line = Paragraph::new(Line::from(vec![
            Span::styled("⚠ ", Styles::warning()),
            Span::styled(warning, Styles::warning()),
        ]));
        f.render_widget(line, chunks[1]);
    }
}

fn render_applying(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Applying Changes...", Styles::title())),
        Line::from(""),
        Line::from(Span::styled("Please wait...", Styles::status())),
    ];
    render_centered(f, lines, " Applying ", area);
}

fn render_done(f: &mut Frame, message: &str, area: Rect) {
    let message_style = if message == APPLIED_MESSAGE || message.starts_with("Dry run") {
        Styles::success()
    } else {
        Styles::error()
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Done!", Styles::title())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), message_style)),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to exit",
            Style::default().fg(Colors::FG_MUTED),
        )),
    ];
    render_centered(f, lines, " Done ", area);
}

/// Acquisition failed; nothing else can be shown.
pub fn render_failure(f: &mut Frame, err: &RandrTuiError, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("Error: {}", err), Styles::error())),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to exit",
            Style::default().fg(Colors::FG_MUTED),
        )),
    ];
    render_centered(f, lines, " Error ", area);
}

fn render_centered(f: &mut Frame, lines: Vec<Line<'static>>, title: &str, area: Rect) {
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Colors::BORDER_ACTIVE))
                .title(Span::styled(title.to_string(), Styles::title())),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Render the key hint bar. The failure screen only offers exit.
pub fn render_nav_bar(
    f: &mut Frame,
    stage: Option<WizardStage>,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    match stage {
        Some(stage) => {
            for (i, item) in keybinding_ctx.get_nav_items(stage).into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("  ", Styles::nav_hint()));
                }
                spans.push(Span::styled(item.key_display, Styles::nav_key()));
                spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
            }
        }
        None => {
            spans.push(Span::styled("Any key", Styles::nav_key()));
            spans.push(Span::styled(" Exit", Styles::nav_hint()));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
