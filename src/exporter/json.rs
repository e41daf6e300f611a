// file: src/exporter/json.rs
// description: json export of per-article indicator analyses
// reference: internal data structures

use crate::error::Result;
use crate::models::{Article, ExtractionResult};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
struct ExportedAnalysis<'a> {
    title: &'a str,
    link: &'a str,
    source: &'a str,
    published: String,
    content_hash: &'a str,
    indicator_count: usize,
    category_count: usize,
    indicators: &'a ExtractionResult,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_articles: usize,
    pub total_indicators: usize,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes one analysis document, named by the article's content hash.
    /// Returns the file name recorded in the manifest.
    pub fn export_analysis(
        &self,
        article: &Article,
        indicators: &ExtractionResult,
        pretty: bool,
    ) -> Result<String> {
        let record = ExportedAnalysis {
            title: &article.title,
            link: &article.link,
            source: &article.source,
            published: article.published.to_rfc3339(),
            content_hash: &article.content_hash,
            indicator_count: indicators.indicator_count(),
            category_count: indicators.category_count(),
            indicators,
        };

        let file_name = format!("{}.json", &article.content_hash[..16]);
        let payload = if pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };

        fs::write(self.output_dir.join(&file_name), payload)?;
        Ok(file_name)
    }

    /// Exports every analysis plus a manifest describing the run.
    pub fn export_all(
        &self,
        analyses: &[(Article, ExtractionResult)],
        pretty: bool,
    ) -> Result<ExportManifest> {
        info!("Starting JSON export to {}", self.output_dir.display());

        let mut files = Vec::new();
        let mut total_indicators = 0;

        for (article, indicators) in analyses {
            total_indicators += indicators.indicator_count();
            files.push(self.export_analysis(article, indicators, pretty)?);
        }

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_articles: analyses.len(),
            total_indicators,
            files,
        };

        let payload = serde_json::to_string_pretty(&manifest)?;
        fs::write(self.output_dir.join("manifest.json"), payload)?;

        info!(
            "Export complete: {} articles, {} indicators",
            manifest.total_articles, manifest.total_indicators
        );
        Ok(manifest)
    }
}
