//! Gate that decides whether a pasted line is scanned at all.
//!
//! A rejected line is dropped without any error reaching the caller; the
//! reason only exists so it can be logged.

use thiserror::Error;

use crate::config::{ExtractorConfig, DENY_LIST};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("blank line")]
    Blank,

    #[error("line is not valid UTF-8")]
    Malformed,

    #[error("line is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("line contains deny-listed marker {0:?}")]
    DenyListed(String),
}

#[derive(Debug, Clone)]
pub struct SafetyFilter {
    max_line_length: usize,
}

impl Default for SafetyFilter {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

impl SafetyFilter {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            max_line_length: config.max_line_length,
        }
    }

    pub fn check(&self, line: &str) -> Result<(), Rejection> {
        if line.trim().is_empty() {
            return Err(Rejection::Blank);
        }

        // Byte length bounds the character count, so only count when it could matter
        if line.len() > self.max_line_length {
            let len = line.chars().count();
            if len > self.max_line_length {
                return Err(Rejection::TooLong { len, max: self.max_line_length });
            }
        }

        let lowered = line.to_lowercase();
        // DENY_LIST entries are already lowercase
        if let Some(marker) = DENY_LIST.iter().find(|m| lowered.contains(*m)) {
            return Err(Rejection::DenyListed(marker.to_string()));
        }

        Ok(())
    }

    pub fn is_safe(&self, line: &str) -> bool {
        self.check(line).is_ok()
    }
}
