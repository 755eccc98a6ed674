//! Display data model
//!
//! `Display` and `Mode` are produced once by the report parser and never
//! mutated afterwards. `Resolution` is a transient, read-only grouping of one
//! display's modes, rebuilt every time the resolution stage is entered.

use serde::Serialize;
use std::fmt;

/// One timing configuration of an output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mode {
    /// Horizontal size in pixels
    pub width: u32,
    /// Vertical size in pixels
    pub height: u32,
    /// Refresh rate in Hz
    pub rate: f64,
    /// Whether the output is currently driven at this mode
    pub current: bool,
}

impl Mode {
    pub fn new(width: u32, height: u32, rate: f64, current: bool) -> Self {
        Self {
            width,
            height,
            rate,
            current,
        }
    }

    /// `WxH`, as the apply command expects it.
    pub fn size_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Refresh rate with one decimal place, as the apply command expects it.
    pub fn rate_label(&self) -> String {
        format!("{:.1}", self.rate)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.current { '*' } else { ' ' };
        write!(
            f,
            "{} {}x{} @ {:.1}Hz",
            marker, self.width, self.height, self.rate
        )
    }
}

/// One video output from the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Display {
    /// Output name, unique within a report (e.g. `DP-1`)
    pub name: String,
    /// Whether something is plugged into the output
    pub connected: bool,
    /// The active mode. Always `None` for disconnected outputs.
    pub current: Option<Mode>,
    /// Every reported mode, in report order. Empty when disconnected.
    pub modes: Vec<Mode>,
}

impl Display {
    pub fn new(name: impl Into<String>, connected: bool) -> Self {
        Self {
            name: name.into(),
            connected,
            current: None,
            modes: Vec::new(),
        }
    }

    /// Status line shown under the display name in the display list.
    pub fn status(&self) -> String {
        if !self.connected {
            return "disconnected".to_string();
        }
        match &self.current {
            Some(mode) => format!(
                "connected - {}x{} @ {:.1}Hz",
                mode.width, mode.height, mode.rate
            ),
            None => "connected".to_string(),
        }
    }

    /// Group this display's modes by width/height.
    ///
    /// Groups are created in order of first appearance, each group's modes are
    /// sorted by descending refresh rate, and the groups are then sorted by
    /// descending pixel count. Both sorts are stable, so the result is a pure
    /// function of `self.modes`.
    pub fn resolutions(&self) -> Vec<Resolution> {
        let mut resolutions: Vec<Resolution> = Vec::new();

        for mode in &self.modes {
            match resolutions
                .iter_mut()
                .find(|r| r.width == mode.width && r.height == mode.height)
            {
                Some(existing) => existing.modes.push(*mode),
                None => resolutions.push(Resolution {
                    width: mode.width,
                    height: mode.height,
                    modes: vec![*mode],
                }),
            }
        }

        for resolution in &mut resolutions {
            resolution
                .modes
                .sort_by(|a, b| b.rate.total_cmp(&a.rate));
        }
        resolutions.sort_by(|a, b| b.pixel_count().cmp(&a.pixel_count()));

        resolutions
    }
}

/// Modes of one display sharing a width/height pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
    /// Sorted by descending refresh rate
    pub modes: Vec<Mode>,
}

impl Resolution {
    /// Total pixel count, used for ordering.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// True iff any of its modes is the active one.
    pub fn is_current(&self) -> bool {
        self.modes.iter().any(|m| m.current)
    }

    /// Description line listing the available rates.
    pub fn rates_label(&self) -> String {
        let rates: Vec<String> = self.modes.iter().map(Mode::rate_label).collect();
        format!("Available rates: {} Hz", rates.join(", "))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_current() { '*' } else { ' ' };
        write!(f, "{} {}x{}", marker, self.width, self.height)
    }
}
