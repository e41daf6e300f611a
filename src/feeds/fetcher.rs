// file: src/feeds/fetcher.rs
// description: concurrent syndication feed retrieval into article records
// reference: https://docs.rs/feed-rs

use crate::config::FeedsConfig;
use crate::error::{HubError, Result};
use crate::models::Article;
use crate::pipeline::ProgressTracker;
use chrono::Utc;
use feed_rs::parser;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub struct FeedFetcher {
    client: Client,
    config: FeedsConfig,
}

impl FeedFetcher {
    pub fn new(config: FeedsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("threat_intel_hub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetches every configured feed concurrently. Failed feeds are logged
    /// and skipped, never fatal. Articles come back newest-first.
    pub async fn fetch_all(&self, tracker: Option<&ProgressTracker>) -> Vec<Article> {
        let workers = self.config.parallel_workers.max(1);

        let results = stream::iter(self.config.sources.iter().cloned().map(|url| {
            let client = self.client.clone();
            async move {
                let outcome = fetch_feed(&client, &url).await;
                (url, outcome)
            }
        }))
        .buffer_unordered(workers)
        .collect::<Vec<_>>()
        .await;

        let mut articles = Vec::new();
        for (url, outcome) in results {
            match outcome {
                Ok((mut feed_articles, bytes)) => {
                    debug!("Fetched {} articles from {}", feed_articles.len(), url);
                    if let Some(tracker) = tracker {
                        tracker.inc_feeds_fetched();
                        tracker.add_articles(feed_articles.len());
                        tracker.add_bytes_fetched(bytes);
                    }
                    articles.append(&mut feed_articles);
                }
                Err(e) => {
                    warn!("Skipping feed {}: {}", url, e);
                    if let Some(tracker) = tracker {
                        tracker.inc_feeds_failed();
                    }
                }
            }
        }

        articles.sort_by(|a, b| b.published.cmp(&a.published));
        articles
    }

    pub fn source_count(&self) -> usize {
        self.config.sources.len()
    }
}

async fn fetch_feed(client: &Client, url: &str) -> Result<(Vec<Article>, u64)> {
    let response = client.get(url).send().await.map_err(|e| HubError::FeedFetch {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !response.status().is_success() {
        return Err(HubError::FeedFetch {
            url: url.to_string(),
            message: format!("status {}", response.status()),
        });
    }

    let body = response.bytes().await.map_err(|e| HubError::FeedFetch {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let articles = parse_articles(url, body.as_ref())?;
    Ok((articles, body.len() as u64))
}

/// Maps feed entries to article records. Entry content falls back from the
/// full content body to the summary to a placeholder; missing publish dates
/// fall back to the fetch time.
fn parse_articles(url: &str, body: &[u8]) -> Result<Vec<Article>> {
    let feed = parser::parse(body).map_err(|e| HubError::FeedParse {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let source = feed
        .title
        .as_ref()
        .map(|t| t.content.clone())
        .unwrap_or_else(|| url.to_string());

    let articles = feed
        .entries
        .into_iter()
        .map(|entry| {
            let title = entry
                .title
                .as_ref()
                .map(|t| t.content.clone())
                .unwrap_or_else(|| "No Title".to_string());

            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_else(|| "#".to_string());

            let content = entry
                .content
                .as_ref()
                .and_then(|c| c.body.clone())
                .or_else(|| entry.summary.as_ref().map(|s| s.content.clone()))
                .unwrap_or_else(|| "No content available.".to_string());

            let published = entry.published.or(entry.updated).unwrap_or_else(Utc::now);

            Article::new(title, link, source.clone(), published, content)
        })
        .collect();

    Ok(articles)
}
