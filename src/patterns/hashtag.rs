use regex::Regex;
use lazy_static::lazy_static;
use super::{Category, PatternMatcher};

lazy_static! {
    static ref HASHTAG_PATTERN: Regex = Regex::new(
        r"#[a-zA-Z0-9_]+"
    ).unwrap();
}

pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub struct HashtagMatcher {}

impl PatternMatcher for HashtagMatcher {
    fn category(&self) -> Category {
        Category::Hashtags
    }

    fn extract(&self, line: &str) -> Vec<String> {
        extract_hashtags(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hashtags() {
        for tag in ["#BackToSchool", "#exam_2024", "#1", "#_"] {
            assert_eq!(extract_hashtags(tag), vec![tag], "Hashtag should be extracted whole: {}", tag);
        }
    }

    #[test]
    fn test_invalid_hashtags() {
        for tag in ["#", "BackToSchool", "#back-to-school", "# space"] {
            assert!(!extract_hashtags(tag).contains(&tag.to_string()), "Hashtag should not be extracted whole: {}", tag);
        }
    }

    #[test]
    fn test_extract_hashtags_from_line() {
        let found = extract_hashtags("Results are out! #Term2 #proud-parents");
        assert_eq!(found, vec!["#Term2", "#proud"]);
    }
}
