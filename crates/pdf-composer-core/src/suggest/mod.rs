mod traits;
mod remote;

pub use traits::{ContentSuggester, FileRef, SuggesterInfo};
pub use remote::RemoteSuggester;

use crate::config::SuggesterConfig;
use crate::error::Result;
use std::sync::Arc;

/// Create a suggester from configuration
pub fn create_suggester(config: &SuggesterConfig) -> Result<Arc<dyn ContentSuggester>> {
    let suggester = RemoteSuggester::new(config)?;
    Ok(Arc::new(suggester))
}
