//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles used by the
//! presentation layer. The wizard itself never styles anything.
//!
//! # Usage
//! ```rust
//! use randrtui::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Magenta;

    /// Secondary accent color - used for selected items
    pub const SECONDARY: Color = Color::LightMagenta;

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Magenta;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Rgb(60, 30, 70);

    /// Navigation hint text
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Key names in the nav bar and help overlay
    pub const NAV_KEY: Color = Color::Magenta;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// Title text
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted list row
    pub fn selected() -> Style {
        Style::default()
            .bg(Colors::SELECTED_BG)
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Plain body text
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Status lines under the list
    pub fn status() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(Colors::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation bar hint
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Key name inside a navigation hint
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::NAV_KEY)
            .add_modifier(Modifier::BOLD)
    }
}
