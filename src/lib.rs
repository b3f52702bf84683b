pub mod config;
pub mod error;
pub mod extractor;
pub mod mask;
pub mod patterns;
pub mod report;
pub mod safety;
pub mod store;

pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use extractor::{run, Extractor, LineStats};
pub use patterns::{all_matchers, Category, PatternMatcher};
pub use report::{Report, Status};
pub use safety::{Rejection, SafetyFilter};
pub use store::ExtractionStore;
