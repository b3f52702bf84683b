use regex::Regex;
use lazy_static::lazy_static;
use super::{Category, PatternMatcher};

lazy_static! {
    // Scheme, dotted host with an alphabetic TLD, then anything up to whitespace
    static ref URL_PATTERN: Regex = Regex::new(
        r"https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}[^\s]*"
    ).unwrap();
}

pub fn extract_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub struct UrlMatcher {}

impl PatternMatcher for UrlMatcher {
    fn category(&self) -> Category {
        Category::Urls
    }

    fn extract(&self, line: &str) -> Vec<String> {
        extract_urls(line)
    }
}
