mod cover;
mod layout;
mod merge;
mod metrics;

pub use cover::{A4_HEIGHT, A4_WIDTH, CoverPageData, render_cover_page};
pub use layout::wrap_text;
pub use merge::{
    DEFAULT_OUTPUT_NAME, MergeRequest, SourceFile, merge, normalize_output_name,
};
pub use metrics::FontMetrics;
