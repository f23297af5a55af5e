//! Pipeline configuration

use std::path::PathBuf;

/// Search endpoint queried for the web excerpt
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

/// Upper bound for compiling one chart
pub const DEFAULT_RENDER_TIMEOUT_MS: u64 = 10_000;

/// Settings shared by every report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory the finished `.docx` is written to
    pub output_dir: PathBuf,
    /// Search endpoint, without query string
    pub search_url: String,
    pub render_timeout_ms: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            render_timeout_ms: DEFAULT_RENDER_TIMEOUT_MS,
        }
    }
}

impl ReportConfig {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_search_url(mut self, search_url: impl Into<String>) -> Self {
        self.search_url = search_url.into();
        self
    }

    pub fn with_render_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.render_timeout_ms = timeout_ms;
        self
    }
}
