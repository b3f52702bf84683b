use std::io::BufRead;
use tracing::{debug, info};

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::patterns::{all_matchers, PatternMatcher};
use crate::report::Report;
use crate::safety::{Rejection, SafetyFilter};
use crate::store::ExtractionStore;

/// Line that stops reading, compared after trimming and ignoring case.
pub const SENTINEL: &str = "END";

pub fn is_sentinel(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(SENTINEL)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub read: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// One reading session. Lines are fed in with [`Extractor::process_line`];
/// [`Extractor::finish`] consumes the session and produces the report.
pub struct Extractor {
    filter: SafetyFilter,
    matchers: Vec<Box<dyn PatternMatcher>>,
    store: ExtractionStore,
    stats: LineStats,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

impl Extractor {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            filter: SafetyFilter::new(config),
            matchers: all_matchers(),
            store: ExtractionStore::new(),
            stats: LineStats::default(),
        }
    }

    /// Scan one line into the store. Unsafe lines are skipped silently.
    pub fn process_line(&mut self, line: &str) {
        self.stats.read += 1;

        if let Err(reason) = self.filter.check(line) {
            self.skip(reason);
            return;
        }
        self.stats.accepted += 1;

        for matcher in &self.matchers {
            self.store.extend(matcher.category(), matcher.extract(line));
        }
    }

    /// Same as [`Extractor::process_line`] for undecoded input. Bytes that
    /// are not UTF-8 drop the line like any other unsafe input.
    pub fn process_raw_line(&mut self, raw: &[u8]) {
        match std::str::from_utf8(raw) {
            Ok(line) => self.process_line(line),
            Err(_) => {
                self.stats.read += 1;
                self.skip(Rejection::Malformed);
            }
        }
    }

    fn skip(&mut self, reason: Rejection) {
        self.stats.rejected += 1;
        debug!(line = self.stats.read, %reason, "skipping line");
    }

    pub fn stats(&self) -> LineStats {
        self.stats
    }

    /// Raw matches collected so far, before masking.
    pub fn store(&self) -> &ExtractionStore {
        &self.store
    }

    pub fn finish(self) -> Report {
        let report = Report::from_store(self.store);
        info!(
            read = self.stats.read,
            accepted = self.stats.accepted,
            rejected = self.stats.rejected,
            total_found = report.total_found(),
            "extraction finished"
        );
        report
    }
}

/// Read lines until the sentinel (or end of input) and build the report.
///
/// Lines are read as raw bytes so that one undecodable line is dropped
/// instead of ending the session.
pub fn run<R: BufRead>(mut reader: R, config: &ExtractorConfig) -> Result<Report, ExtractError> {
    let mut extractor = Extractor::new(config);
    let mut saw_sentinel = false;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = strip_line_ending(&buf);

        if std::str::from_utf8(raw).is_ok_and(is_sentinel) {
            saw_sentinel = true;
            break;
        }
        extractor.process_raw_line(raw);
    }

    if saw_sentinel {
        debug!(lines = extractor.stats().read, "sentinel reached");
    } else {
        debug!(lines = extractor.stats().read, "input ended without sentinel");
    }

    Ok(extractor.finish())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
