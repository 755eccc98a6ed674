//! Tests for report parsing and resolution grouping
//!
//! These tests verify:
//! - One display per header line, in report order
//! - Mode lines outside a connected display are dropped
//! - Rate token markers and malformed tokens
//! - Resolution grouping and ordering

use randrtui::model::Mode;
use randrtui::parser::{classify_line, parse_report, ReportLine};

const LAPTOP_REPORT: &str = "\
Screen 0: minimum 8 x 8, current 2560 x 1440, maximum 32767 x 32767
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 309mm x 174mm
   1920x1080     60.00*+  59.97    59.96    59.93    48.00
   1680x1050     59.95    59.88
   1280x1024     60.02
   1440x900      59.89
HDMI-1 disconnected (normal left inverted right x axis y axis)
DP-1 connected 2560x1440+1920+0 (normal left inverted right x axis y axis) 597mm x 336mm
   2560x1440     59.95 +  143.91*
   1920x1080     60.00    50.00    59.94
DP-2 disconnected (normal left inverted right x axis y axis)
";

// =============================================================================
// Display Extraction Tests
// =============================================================================

#[test]
fn test_one_display_per_header_in_order() {
    let displays = parse_report(LAPTOP_REPORT);
    let names: Vec<&str> = displays.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["eDP-1", "HDMI-1", "DP-1", "DP-2"]);
}

#[test]
fn test_connection_flags() {
    let displays = parse_report(LAPTOP_REPORT);
    let connected: Vec<bool> = displays.iter().map(|d| d.connected).collect();
    assert_eq!(connected, vec![true, false, true, false]);
}

#[test]
fn test_disconnected_displays_have_no_modes() {
    let displays = parse_report(LAPTOP_REPORT);
    for display in displays.iter().filter(|d| !d.connected) {
        assert!(display.modes.is_empty(), "{} has modes", display.name);
        assert!(display.current.is_none());
    }
}

#[test]
fn test_modes_preserve_report_order() {
    let displays = parse_report(LAPTOP_REPORT);
    let dp1 = &displays[2];
    let rates: Vec<f64> = dp1.modes.iter().map(|m| m.rate).collect();
    assert_eq!(rates, vec![59.95, 143.91, 60.00, 50.00, 59.94]);
}

#[test]
fn test_current_mode_from_star_marker() {
    let displays = parse_report(LAPTOP_REPORT);
    assert_eq!(displays[0].current, Some(Mode::new(1920, 1080, 60.00, true)));
    assert_eq!(displays[2].current, Some(Mode::new(2560, 1440, 143.91, true)));
}

#[test]
fn test_three_rates_on_one_line() {
    let report = "DP-1 connected\n   1920x1080     60.00*  59.94  50.00\n";
    let displays = parse_report(report);

    assert_eq!(
        displays[0].modes,
        vec![
            Mode::new(1920, 1080, 60.00, true),
            Mode::new(1920, 1080, 59.94, false),
            Mode::new(1920, 1080, 50.00, false),
        ]
    );
}

#[test]
fn test_mode_lines_before_first_header_are_dropped() {
    let report = "   1920x1080     60.00*\nDP-1 connected\n   1280x720      60.00\n";
    let displays = parse_report(report);

    assert_eq!(displays.len(), 1);
    assert_eq!(displays[0].modes, vec![Mode::new(1280, 720, 60.00, false)]);
}

#[test]
fn test_mode_lines_under_disconnected_header_are_dropped() {
    let report = "HDMI-1 disconnected\n   1920x1080     60.00*\nDP-1 connected\n";
    let displays = parse_report(report);

    assert_eq!(displays.len(), 2);
    assert!(displays[0].modes.is_empty());
    assert!(displays[0].current.is_none());
    assert!(displays[1].modes.is_empty());
}

#[test]
fn test_last_display_is_flushed_without_trailing_newline() {
    let displays = parse_report("DP-1 connected\n   800x600  60.32*");
    assert_eq!(displays.len(), 1);
    assert_eq!(displays[0].modes.len(), 1);
}

#[test]
fn test_empty_and_garbage_reports() {
    assert!(parse_report("").is_empty());
    assert!(parse_report("Screen 0: minimum 8 x 8\nrandom noise\n\n").is_empty());
}

#[test]
fn test_malformed_rate_tokens_are_skipped() {
    let report = "DP-1 connected\n   1920x1080     60.00*  abc  59.94x  0.00  50.00\n";
    let displays = parse_report(report);
    let rates: Vec<f64> = displays[0].modes.iter().map(|m| m.rate).collect();
    assert_eq!(rates, vec![60.00, 50.00]);
}

#[test]
fn test_last_current_marker_wins() {
    let report = "DP-1 connected\n   1920x1080     60.00*\n   1280x720      75.00*\n";
    let displays = parse_report(report);
    let display = &displays[0];

    assert_eq!(display.current, Some(Mode::new(1280, 720, 75.00, true)));
    assert_eq!(display.modes.iter().filter(|m| m.current).count(), 1);
}

#[test]
fn test_duplicate_mode_lines_are_kept() {
    let report = "DP-1 connected\n   1920x1080     60.00\n   1920x1080     60.00\n";
    let displays = parse_report(report);
    assert_eq!(displays[0].modes.len(), 2);
}

// =============================================================================
// Line Classification Tests
// =============================================================================

#[test]
fn test_classify_header_and_mode_lines() {
    assert_eq!(
        classify_line("HDMI-1 disconnected (normal left inverted right)"),
        ReportLine::Header {
            name: "HDMI-1",
            connected: false
        }
    );
    assert_eq!(
        classify_line("   1280x720      60.00 +  50.00"),
        ReportLine::Mode {
            width: 1280,
            height: 720,
            rates: vec!["60.00", "+", "50.00"],
        }
    );
}

#[test]
fn test_classify_ignores_screen_and_indented_headers() {
    assert_eq!(
        classify_line("Screen 0: minimum 8 x 8, current 1920 x 1080"),
        ReportLine::Ignored
    );
    assert_eq!(classify_line("  DP-1 connected"), ReportLine::Ignored);
    assert_eq!(classify_line("   1920x1080"), ReportLine::Ignored);
}

// =============================================================================
// Resolution Grouping Tests
// =============================================================================

#[test]
fn test_two_resolutions_larger_first() {
    let report = "DP-1 connected\n   1280x720      75.00\n   1920x1080     60.00*\n";
    let displays = parse_report(report);
    let resolutions = displays[0].resolutions();

    assert_eq!(resolutions.len(), 2);
    assert_eq!((resolutions[0].width, resolutions[0].height), (1920, 1080));
    assert_eq!(resolutions[0].modes, vec![Mode::new(1920, 1080, 60.00, true)]);
    assert_eq!((resolutions[1].width, resolutions[1].height), (1280, 720));
    assert_eq!(resolutions[1].modes, vec![Mode::new(1280, 720, 75.00, false)]);
}

#[test]
fn test_rates_sorted_descending_within_group() {
    let displays = parse_report(LAPTOP_REPORT);
    let resolutions = displays[2].resolutions();

    let top = &resolutions[0];
    assert_eq!((top.width, top.height), (2560, 1440));
    let rates: Vec<f64> = top.modes.iter().map(|m| m.rate).collect();
    assert_eq!(rates, vec![143.91, 59.95]);

    let next: Vec<f64> = resolutions[1].modes.iter().map(|m| m.rate).collect();
    assert_eq!(next, vec![60.00, 59.94, 50.00]);
}

#[test]
fn test_equal_pixel_counts_keep_first_appearance() {
    // 1600x900 and 1200x1200 both have 1_440_000 pixels
    let report = "DP-1 connected\n   1600x900      60.00\n   1200x1200     60.00\n";
    let displays = parse_report(report);
    let sizes: Vec<(u32, u32)> = displays[0]
        .resolutions()
        .iter()
        .map(|r| (r.width, r.height))
        .collect();
    assert_eq!(sizes, vec![(1600, 900), (1200, 1200)]);
}

#[test]
fn test_status_labels() {
    let displays = parse_report(LAPTOP_REPORT);
    assert_eq!(displays[0].status(), "connected - 1920x1080 @ 60.0Hz");
    assert_eq!(displays[1].status(), "disconnected");

    let no_current = parse_report("DP-3 connected\n   1024x768  60.00\n");
    assert_eq!(no_current[0].status(), "connected");
}
