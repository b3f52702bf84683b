use regex::Regex;
use lazy_static::lazy_static;
use super::{Category, PatternMatcher};

lazy_static! {
    // Four groups of four digits, optionally split by one hyphen or space.
    // No Luhn check: anything card-shaped is treated as sensitive.
    static ref CARD_PATTERN: Regex = Regex::new(
        r"\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}"
    ).unwrap();
}

pub fn extract_cards(text: &str) -> Vec<String> {
    CARD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub struct CreditCardMatcher {}

impl PatternMatcher for CreditCardMatcher {
    fn category(&self) -> Category {
        Category::CreditCards
    }

    fn extract(&self, line: &str) -> Vec<String> {
        extract_cards(line)
    }
}
