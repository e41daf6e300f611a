// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HubError, Result};
use crate::extractor::domains;
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub feeds: FeedsConfig,
    pub summarizer: SummarizerConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedsConfig {
    pub sources: Vec<String>,
    pub parallel_workers: usize,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummarizerConfig {
    pub host: String,
    pub model: String,
    pub min_words: usize,
    pub max_prompt_chars: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Extra benign domains; empty means the built-in allowlist.
    #[serde(default)]
    pub allowlist: Vec<String>,
}

impl ExtractionConfig {
    /// Allowlist injected into the extractor, lowercased. The built-in set
    /// applies when no override is configured.
    pub fn allowlist_set(&self) -> HashSet<String> {
        if self.allowlist.is_empty() {
            domains::default_allowlist()
        } else {
            self.allowlist.iter().map(|d| d.to_ascii_lowercase()).collect()
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("THREAT_INTEL_HUB")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| HubError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HubError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            feeds: FeedsConfig {
                sources: vec![
                    "https://feeds.feedburner.com/TheHackersNews".to_string(),
                    "https://krebsonsecurity.com/feed/".to_string(),
                    "https://www.darkreading.com/rss_simple.asp".to_string(),
                    "https://www.cisa.gov/uscert/ncas/current-activity.xml".to_string(),
                    "https://threatpost.com/feed/".to_string(),
                    "https://www.bleepingcomputer.com/feed/".to_string(),
                    "https://securelist.com/feed/".to_string(),
                    "https://www.mandiant.com/blogs/rss".to_string(),
                    "https://unit42.paloaltonetworks.com/feed/".to_string(),
                    "https://blog.google/threat-analysis-group/rss/".to_string(),
                    "https://www.microsoft.com/en-us/security/blog/feed/".to_string(),
                    "https://www.recordedfuture.com/blog/rss".to_string(),
                ],
                parallel_workers: 4,
                timeout_secs: 20,
            },
            summarizer: SummarizerConfig {
                host: "http://127.0.0.1:11434".to_string(),
                model: "llama3.2".to_string(),
                min_words: 50,
                max_prompt_chars: 8000,
            },
            extraction: ExtractionConfig { allowlist: vec![] },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.feeds.parallel_workers == 0 {
            return Err(HubError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        if self.feeds.sources.is_empty() {
            return Err(HubError::Config(
                "at least one feed source must be configured".to_string(),
            ));
        }

        for url in &self.feeds.sources {
            Validator::validate_feed_url(url)
                .map_err(|e| HubError::Config(e.to_string()))?;
        }

        if self.summarizer.max_prompt_chars == 0 {
            return Err(HubError::Config(
                "max_prompt_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
