//! PDF Composer Core Library
//!
//! This library provides the core functionality for composing PDF documents:
//! - Merging multiple source PDFs into one, preserving page order
//! - Synthesizing an optional cover page (title, subtitle, rule, wrapped
//!   abstract, footer) ahead of the sources
//! - Smart ordering and cover content via a remote suggestion service

pub mod config;
pub mod error;
pub mod order;
pub mod pdf;
pub mod suggest;
pub mod util;

pub use config::{AppConfig, SuggesterConfig};
pub use error::{Error, Result};
pub use order::reconcile_order;
pub use pdf::{
    A4_HEIGHT, A4_WIDTH, CoverPageData, DEFAULT_OUTPUT_NAME, FontMetrics, MergeRequest,
    SourceFile, normalize_output_name, wrap_text,
};
pub use suggest::{ContentSuggester, FileRef, RemoteSuggester, create_suggester};

use std::sync::Arc;
use tracing::info;

/// High-level composer that ties the suggestion service to the compositor.
///
/// Each merge call owns its output document exclusively; nothing persists
/// across calls.
pub struct PdfComposer {
    suggester: Arc<dyn ContentSuggester>,
    config: AppConfig,
}

impl PdfComposer {
    /// Create a new composer with the given configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let suggester = create_suggester(&config.suggester)?;

        Ok(Self { suggester, config })
    }

    /// Create with a custom suggestion backend (used by tests and embedders)
    pub fn with_suggester(suggester: Arc<dyn ContentSuggester>, config: AppConfig) -> Self {
        Self { suggester, config }
    }

    /// Ask the suggestion service for an ordering and reconcile it against
    /// the full collection. An empty suggestion leaves the original order
    /// untouched.
    pub async fn smart_sort(&self, files: Vec<SourceFile>) -> Result<Vec<SourceFile>> {
        let refs: Vec<FileRef> = files
            .iter()
            .map(|f| FileRef::new(&f.id, &f.name))
            .collect();

        let suggested = self.suggester.suggest_order(&refs).await?;
        if suggested.is_empty() {
            return Ok(files);
        }

        info!(
            "Reconciling suggested order ({} of {} ids)",
            suggested.len(),
            files.len()
        );
        Ok(reconcile_order(files, &suggested))
    }

    /// Generate cover page content from a free-form description.
    pub async fn generate_cover(&self, description: &str) -> Result<CoverPageData> {
        self.suggester.generate_cover(description).await
    }

    /// Merge the request into a single PDF byte buffer.
    pub fn merge(&self, request: &MergeRequest) -> Result<Vec<u8>> {
        pdf::merge(request)
    }

    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn suggester_info(&self) -> suggest::SuggesterInfo {
        self.suggester.info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output_name, DEFAULT_OUTPUT_NAME);
        assert!(config.suggester.endpoint.is_none());
    }

    #[test]
    fn test_composer_requires_endpoint() {
        let result = PdfComposer::new(AppConfig::default());
        assert!(matches!(result, Err(Error::ConfigMissing(_))));
    }
}
