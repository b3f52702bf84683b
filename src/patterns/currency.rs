use regex::Regex;
use lazy_static::lazy_static;
use super::{Category, PatternMatcher};

lazy_static! {
    // Rwandan franc amounts: RWF/RF prefix in any case, optional thousands
    // groups and cents
    static ref CURRENCY_PATTERN: Regex = Regex::new(
        r"(?i)(?:RWF|RF)\s?\d+(?:,\d{3})*(?:\.\d{2})?"
    ).unwrap();
}

pub fn extract_amounts(text: &str) -> Vec<String> {
    CURRENCY_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub struct CurrencyMatcher {}

impl PatternMatcher for CurrencyMatcher {
    fn category(&self) -> Category {
        Category::Currency
    }

    fn extract(&self, line: &str) -> Vec<String> {
        extract_amounts(line)
    }
}
