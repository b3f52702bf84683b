use regex::Regex;
use lazy_static::lazy_static;
use super::{Category, PatternMatcher};

lazy_static! {
    // 12-hour clock with a meridiem suffix
    static ref TIME_12H_PATTERN: Regex = Regex::new(
        r"\d{1,2}:\d{2}\s?(?:AM|PM|am|pm)"
    ).unwrap();

    // 24-hour clock, bounded on both sides
    static ref TIME_24H_PATTERN: Regex = Regex::new(
        r"\b(?:[01]?\d|2[0-3]):[0-5]\d\b"
    ).unwrap();
}

/// 12-hour matches first, then 24-hour ones. The two overlap, so
/// `10:30 AM` yields both `10:30 AM` and `10:30`.
pub fn extract_times(text: &str) -> Vec<String> {
    TIME_12H_PATTERN
        .find_iter(text)
        .chain(TIME_24H_PATTERN.find_iter(text))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub struct TimeMatcher {}

impl PatternMatcher for TimeMatcher {
    fn category(&self) -> Category {
        Category::Times
    }

    fn extract(&self, line: &str) -> Vec<String> {
        extract_times(line)
    }
}
