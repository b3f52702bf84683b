use regex::Regex;
use lazy_static::lazy_static;
use super::{Category, PatternMatcher};

lazy_static! {
    // Rwandan mobile numbers (MTN 078/079, Airtel 072/073). Anchored to the
    // whole line: a number embedded in a sentence is not picked up.
    static ref PHONE_PATTERN: Regex = Regex::new(
        r"^07[2389]\d{7}$"
    ).unwrap();
}

pub fn extract_phonenumbers(text: &str) -> Vec<String> {
    PHONE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub struct PhoneNumberMatcher {}

impl PatternMatcher for PhoneNumberMatcher {
    fn category(&self) -> Category {
        Category::Phones
    }

    fn extract(&self, line: &str) -> Vec<String> {
        extract_phonenumbers(line)
    }
}
