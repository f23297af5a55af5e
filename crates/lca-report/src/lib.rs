//! Life Cycle Assessment report pipeline
//!
//! Produces a mock LCA document for a product name in five sequential steps:
//! - Randomized inventory table (`inventory`)
//! - One bar chart per metric (`charts`)
//! - A short excerpt scraped from a search results page (`fetch`)
//! - Eight narrative sections from a chat-completion endpoint (`narrative`)
//! - A `.docx` document combining all of the above (`document`)
//!
//! [`ReportPipeline`] runs the steps in order for one request.

pub mod charts;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod inventory;
pub mod narrative;
pub mod pipeline;
pub mod workspace;

pub use chart_engine::ChartError;
pub use config::ReportConfig;
pub use document::{assemble_report, report_file_name, ReportContent};
pub use error::{AssembleError, CompletionError, FetchError, ReportError};
pub use fetch::WebFetcher;
pub use inventory::{generate_inventory, generate_inventory_with};
pub use narrative::{generate_all_sections, generate_section, CompletionClient, NarrativeBackend};
pub use pipeline::{ReportArtifact, ReportPipeline};
