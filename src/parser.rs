//! Report parser
//!
//! Turns the text printed by `xrandr --query` into a list of [`Display`]s.
//! Every line is classified on its own into a [`ReportLine`]; the parser then
//! folds those classifications into displays in report order.
//!
//! The parser never fails. Lines it does not recognise are ignored and rate
//! tokens that do not parse are skipped one by one.
//!
//! ```text
//! Screen 0: minimum 8 x 8, current 1920 x 1080, maximum 32767 x 32767
//! DP-1 connected primary 1920x1080+0+0 (normal left inverted right) 527mm x 296mm
//!    1920x1080     60.00*+  59.94    50.00
//!    1280x720      60.00    50.00
//! HDMI-1 disconnected (normal left inverted right x axis y axis)
//! ```

use crate::model::{Display, Mode};
use tracing::{debug, trace};

/// Classification of a single report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine<'a> {
    /// `<name> connected|disconnected ...` at column zero
    Header { name: &'a str, connected: bool },
    /// Indented `<width>x<height>` followed by raw rate tokens
    Mode {
        width: u32,
        height: u32,
        rates: Vec<&'a str>,
    },
    /// Anything else
    Ignored,
}

/// One refresh-rate token of a mode line, e.g. `60.00*+`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateToken {
    pub rate: f64,
    /// The token carried the `*` marker
    pub current: bool,
}

/// Classify one line of the report.
pub fn classify_line(line: &str) -> ReportLine<'_> {
    if let Some(header) = classify_header(line) {
        return header;
    }
    classify_mode(line).unwrap_or(ReportLine::Ignored)
}

fn classify_header(line: &str) -> Option<ReportLine<'_>> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;

    // Header lines start at column zero
    if !line.starts_with(name) {
        return None;
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }

    let connected = match tokens.next()? {
        "connected" => true,
        "disconnected" => false,
        _ => return None,
    };

    Some(ReportLine::Header { name, connected })
}

fn classify_mode(line: &str) -> Option<ReportLine<'_>> {
    if !line.starts_with(char::is_whitespace) {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let (width, height) = parse_dimensions(tokens.next()?)?;
    let rates: Vec<&str> = tokens.collect();
    if rates.is_empty() {
        return None;
    }

    Some(ReportLine::Mode {
        width,
        height,
        rates,
    })
}

/// Parse `1920x1080` into `(1920, 1080)`. Both sides must be non-zero.
pub fn parse_dimensions(token: &str) -> Option<(u32, u32)> {
    let (w, h) = token.split_once('x')?;
    let is_number = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !is_number(w) || !is_number(h) {
        return None;
    }

    let width: u32 = w.parse().ok()?;
    let height: u32 = h.parse().ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

/// Parse a rate token: a decimal number optionally followed by `*` (current)
/// and/or `+` (preferred, discarded).
pub fn parse_rate_token(token: &str) -> Option<RateToken> {
    let split = token
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(token.len());
    let (number, markers) = token.split_at(split);

    if !markers.chars().all(|c| c == '*' || c == '+') {
        return None;
    }

    let rate: f64 = number.parse().ok()?;
    if !rate.is_finite() || rate <= 0.0 {
        return None;
    }

    Some(RateToken {
        rate,
        current: markers.contains('*'),
    })
}

/// Parse a full report into displays, in the order their headers appear.
pub fn parse_report(report: &str) -> Vec<Display> {
    let mut displays = Vec::new();
    let mut pending: Option<Display> = None;

    for line in report.lines() {
        match classify_line(line) {
            ReportLine::Header { name, connected } => {
                if let Some(done) = pending.take() {
                    displays.push(done);
                }
                debug!("Found output {} (connected: {})", name, connected);
                pending = Some(Display::new(name, connected));
            }
            ReportLine::Mode {
                width,
                height,
                rates,
            } => {
                // Mode lines before any header or under a disconnected one
                let Some(output) = pending.as_mut().filter(|d| d.connected) else {
                    continue;
                };
                for token in rates {
                    match parse_rate_token(token) {
                        Some(rate) => push_mode(
                            output,
                            Mode::new(width, height, rate.rate, rate.current),
                        ),
                        None => trace!("Skipping rate token {:?} for {}", token, output.name),
                    }
                }
            }
            ReportLine::Ignored => {}
        }
    }

    if let Some(done) = pending {
        displays.push(done);
    }

    debug!("Parsed {} output(s) from report", displays.len());
    displays
}

/// Append a mode; a later current mode demotes any earlier one.
fn push_mode(display: &mut Display, mode: Mode) {
    if mode.current {
        for earlier in display.modes.iter_mut().filter(|m| m.current) {
            earlier.current = false;
        }
        display.current = Some(mode);
    }
    display.modes.push(mode);
}
