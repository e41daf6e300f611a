// file: src/models/article.rs
// description: feed article record with content fingerprint
// reference: internal data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub source: String,
    pub published: DateTime<Utc>,
    pub content: String,
    pub content_hash: String,
}

impl Article {
    pub fn new(
        title: String,
        link: String,
        source: String,
        published: DateTime<Utc>,
        content: String,
    ) -> Self {
        let content_hash = Self::compute_hash(&content);

        Self {
            title,
            link,
            source,
            published,
            content,
            content_hash,
        }
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn published_str(&self) -> String {
        self.published.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Label shown in article listings: `published | title (source)`.
    pub fn display_label(&self) -> String {
        format!("{} | {} ({})", self.published_str(), self.title, self.source)
    }
}
