pub mod creditcard;
pub mod currency;
pub mod email;
pub mod hashtag;
pub mod phonenumber;
pub mod time;
pub mod url;

use serde::Serialize;
use std::fmt;

/// The fixed set of buckets a line can contribute to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Emails,
    Urls,
    Phones,
    CreditCards,
    Times,
    Hashtags,
    Currency,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Category; 7] = [
        Category::Emails,
        Category::Urls,
        Category::Phones,
        Category::CreditCards,
        Category::Times,
        Category::Hashtags,
        Category::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Emails => "emails",
            Category::Urls => "urls",
            Category::Phones => "phones",
            Category::CreditCards => "credit_cards",
            Category::Times => "times",
            Category::Hashtags => "hashtags",
            Category::Currency => "currency",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait PatternMatcher {
    /// Bucket the matches of this matcher are stored in.
    fn category(&self) -> Category;

    /// All matches found in a line, left to right.
    fn extract(&self, line: &str) -> Vec<String>;
}

/// One matcher per category, in report order.
pub fn all_matchers() -> Vec<Box<dyn PatternMatcher>> {
    vec![
        Box::new(email::EmailMatcher {}),
        Box::new(url::UrlMatcher {}),
        Box::new(phonenumber::PhoneNumberMatcher {}),
        Box::new(creditcard::CreditCardMatcher {}),
        Box::new(time::TimeMatcher {}),
        Box::new(hashtag::HashtagMatcher {}),
        Box::new(currency::CurrencyMatcher {}),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchers_cover_every_category_once() {
        let categories: Vec<Category> = all_matchers().iter().map(|m| m.category()).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::CreditCards.to_string(), "credit_cards");
        assert_eq!(
            serde_json::to_string(&Category::Hashtags).unwrap(),
            "\"hashtags\""
        );
    }
}
