use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_known_levels_parse_case_insensitively() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("warn").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
}

#[test]
fn test_unknown_level_defaults_to_info() {
    assert_eq!(LogLevel::from_str("verbose").unwrap().0, LevelFilter::Info);
}
