// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod feeds;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod summarizer;
pub mod utils;

pub use config::{Config, ExtractionConfig, FeedsConfig, SummarizerConfig};
pub use error::{HubError, Result};
pub use exporter::json::{ExportManifest, JsonExporter};
pub use extractor::{DEFAULT_ALLOWLIST, IocExtractor, default_allowlist};
pub use feeds::FeedFetcher;
pub use models::{Article, ExtractionResult, HashBuckets, IndicatorCategory, RawMatches};
pub use parser::{HtmlStripper, TextNormalizer};
pub use pipeline::{FetchStats, ProgressTracker};
pub use summarizer::OllamaClient;
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _extractor = IocExtractor::new();
        let _normalizer = TextNormalizer::new();
    }
}
