#![cfg(feature = "std")]

use log::{Level, LevelFilter};
use seabattle::{effective_level, format_line, parse_level};

#[test]
fn test_parse_level() {
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
    assert_eq!(parse_level(Some("off")), LevelFilter::Off);
    assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
    assert_eq!(parse_level(None), LevelFilter::Info);
}

#[test]
fn test_quiet_caps_level_at_warn() {
    assert_eq!(effective_level(Some("debug"), true), LevelFilter::Warn);
    assert_eq!(effective_level(Some("error"), true), LevelFilter::Error);
    assert_eq!(effective_level(None, false), LevelFilter::Info);
}

#[test]
fn test_format_line_strips_crate_prefix() {
    assert_eq!(
        format_line(Level::Info, "seabattle::service", "Miss at (3, 4)"),
        "INFO  [service] Miss at (3, 4)"
    );
    assert_eq!(
        format_line(Level::Warn, "seabattle", "quiet"),
        "WARN  [seabattle] quiet"
    );
}
