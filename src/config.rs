/// Longest line, in characters, that is still scanned.
pub const MAX_INPUT_SIZE: usize = 50_000;

/// Markers that make a whole line untrusted. Compared case-insensitively.
pub const DENY_LIST: [&str; 5] = ["<script", "javascript:", "eval(", "drop table", "../"];

/// Run-time settings. The deny-list is not among them: it is always
/// [`DENY_LIST`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub max_line_length: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_line_length: MAX_INPUT_SIZE,
        }
    }
}

impl ExtractorConfig {
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }
}
