use thiserror::Error;

/// Unified error type for pdf-composer-core
///
/// This enum encompasses all error cases that can occur in the library:
/// - PDF operations (parsing source documents, assembling, saving)
/// - Suggestion operations (remote smart-sort and cover generation)
/// - Configuration operations (loading, validation)
/// - General I/O operations
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // PDF Errors
    // ==========================================================================
    /// A source byte buffer is not a valid PDF document
    #[error("failed to parse source document '{name}': {reason}")]
    PdfParse { name: String, reason: String },

    /// Failed to serialize the assembled document
    #[error("failed to save PDF: {0}")]
    PdfSave(String),

    /// Merge was requested with no cover page and no source documents
    #[error("nothing to merge: no cover page and no source documents")]
    EmptyMerge,

    /// Error from the lopdf library during assembly
    #[error("lopdf error: {0}")]
    Lopdf(String),

    // ==========================================================================
    // Suggestion Errors
    // ==========================================================================
    /// Suggestion request could not be sent
    #[error("suggestion request failed: {0}")]
    RemoteRequest(String),

    /// Suggestion endpoint returned a non-success status
    #[error("suggestion endpoint returned HTTP {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    /// Suggestion endpoint returned a response we could not interpret
    #[error("invalid suggestion response: {0}")]
    RemoteInvalidResponse(String),

    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    /// Failed to load configuration file
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    /// Missing required configuration field
    #[error("missing required config field: {0}")]
    ConfigMissing(String),

    // ==========================================================================
    // I/O Errors
    // ==========================================================================
    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// One generic user-facing message per failure category.
    ///
    /// The full taxonomy stays available through `Display` for logging, but
    /// end users only ever see one of these strings.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::PdfParse { .. } | Self::PdfSave(_) | Self::EmptyMerge | Self::Lopdf(_) => {
                "An error occurred while merging files. Please try again."
            }
            Self::RemoteRequest(_) | Self::RemoteStatus { .. } | Self::RemoteInvalidResponse(_) => {
                "The AI service could not complete the request. Please try again."
            }
            Self::ConfigLoad(_) | Self::ConfigMissing(_) => {
                "The AI service is not configured."
            }
            Self::Io(_) => "An I/O error occurred.",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
