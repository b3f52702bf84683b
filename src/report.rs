use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::ExtractError;
use crate::store::ExtractionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
}

/// Final result of one extraction session. Built once, never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    status: Status,
    data: ExtractionStore,
    total_found: usize,
}

impl Report {
    /// Finalizes the store (masking, deduplication) and counts what is left.
    pub fn from_store(store: ExtractionStore) -> Self {
        let data = store.finalize();
        let total_found = data.len();
        Self {
            status: Status::Success,
            data,
            total_found,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn data(&self) -> &ExtractionStore {
        &self.data
    }

    pub fn total_found(&self) -> usize {
        self.total_found
    }

    /// JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, ExtractError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty JSON to `path`, replacing whatever was there.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ExtractError> {
        fs::write(path, self.to_pretty_json()?)?;
        Ok(())
    }
}
