use serde::Serialize;
use std::collections::HashSet;

use crate::mask::{mask_card, mask_email};
use crate::patterns::Category;

/// Matches collected per category, serialized as one JSON object whose keys
/// follow [`Category::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStore {
    emails: Vec<String>,
    urls: Vec<String>,
    phones: Vec<String>,
    credit_cards: Vec<String>,
    times: Vec<String>,
    hashtags: Vec<String>,
    currency: Vec<String>,
}

impl ExtractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Emails => &self.emails,
            Category::Urls => &self.urls,
            Category::Phones => &self.phones,
            Category::CreditCards => &self.credit_cards,
            Category::Times => &self.times,
            Category::Hashtags => &self.hashtags,
            Category::Currency => &self.currency,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Emails => &mut self.emails,
            Category::Urls => &mut self.urls,
            Category::Phones => &mut self.phones,
            Category::CreditCards => &mut self.credit_cards,
            Category::Times => &mut self.times,
            Category::Hashtags => &mut self.hashtags,
            Category::Currency => &mut self.currency,
        }
    }

    /// Append matches in the order they were found.
    pub fn extend<I>(&mut self, category: Category, matches: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.bucket_mut(category).extend(matches);
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.bucket(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mask emails and cards, then drop repeats from every bucket.
    ///
    /// Masking runs first, so different raw values that mask to the same
    /// text collapse into one entry. Surviving entries keep the order in
    /// which they were first seen. Finalizing twice changes nothing.
    pub fn finalize(mut self) -> Self {
        for email in &mut self.emails {
            *email = mask_email(email);
        }
        for card in &mut self.credit_cards {
            *card = mask_card(card);
        }

        for category in Category::ALL {
            dedupe(self.bucket_mut(category));
        }

        self
    }
}

fn dedupe(bucket: &mut Vec<String>) {
    let mut seen = HashSet::new();
    bucket.retain(|value| seen.insert(value.clone()));
}
