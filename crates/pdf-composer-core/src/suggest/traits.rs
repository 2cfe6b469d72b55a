use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::pdf::CoverPageData;

/// Minimal file reference shared with the suggestion service: the service
/// only ever sees identifiers and display names, never content.
#[derive(Debug, Clone, Serialize)]
pub struct FileRef {
    pub id: String,
    pub name: String,
}

impl FileRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Information about a suggestion backend
#[derive(Debug, Clone)]
pub struct SuggesterInfo {
    /// Human-readable name
    pub name: &'static str,
    /// Whether this backend needs a configured endpoint
    pub requires_endpoint: bool,
}

/// Trait for content suggestion backends.
///
/// Both operations model one-shot remote calls: no automatic retry, every
/// failure surfaces to the caller, who may retry manually.
#[async_trait]
pub trait ContentSuggester: Send + Sync {
    /// Get information about this backend
    fn info(&self) -> SuggesterInfo;

    /// Get the backend name (convenience method)
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Propose an ordering of the given files, returned as a sequence of
    /// identifiers. The result may be partial or contain unknown ids; the
    /// caller reconciles it against the full collection.
    async fn suggest_order(&self, files: &[FileRef]) -> Result<Vec<String>>;

    /// Generate cover page content from a free-form description.
    async fn generate_cover(&self, description: &str) -> Result<CoverPageData>;
}
