//! Narrative section generation
//!
//! Each section is one chat-completion call. Failures never leave this
//! module: a missing credential or a failed call turns into fallback text
//! that still names the section.

pub mod client;

pub use client::{ChatMessage, CompletionClient, MessageRole, DEFAULT_BASE_URL, DEFAULT_MODEL};

use lca_types::{NarrativeSection, NarrativeSections};
use tracing::{info, warn};

use crate::error::CompletionError;

pub const SYSTEM_PROMPT: &str =
    "You are a sustainability analyst writing ISO-style LCA reports.";

pub const TEMPERATURE: f32 = 0.7;

/// Where section text comes from
///
/// Built once at startup and shared by reference; `Fallback` is the valid
/// configuration for running without a credential.
#[derive(Debug, Clone)]
pub enum NarrativeBackend {
    Fallback,
    Completion(CompletionClient),
}

impl NarrativeBackend {
    /// `Fallback` when no (or a blank) API key is given
    pub fn from_api_key(
        api_key: Option<&str>,
        model: &str,
        base_url: Option<String>,
    ) -> Result<Self, CompletionError> {
        match api_key.map(str::trim).filter(|key| !key.is_empty()) {
            Some(key) => Ok(Self::Completion(CompletionClient::new(key, model, base_url)?)),
            None => Ok(Self::Fallback),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

pub fn user_prompt(section: NarrativeSection, product: &str) -> String {
    format!(
        "Write the '{}' section for a life cycle assessment of a {}.",
        section.label(),
        product
    )
}

pub fn fallback_text(section: NarrativeSection, product: &str) -> String {
    format!(
        "[Fallback] This section would normally be generated using AI for: {} on {}.",
        section.label(),
        product
    )
}

pub fn error_text(section: NarrativeSection, error: &CompletionError) -> String {
    format!(
        "[Error or Quota Reached] {} section fallback: AI generation failed due to: {}",
        section.label(),
        error
    )
}

/// Text for one section; never fails
pub async fn generate_section(
    backend: &NarrativeBackend,
    section: NarrativeSection,
    product: &str,
) -> String {
    let client = match backend {
        NarrativeBackend::Fallback => return fallback_text(section, product),
        NarrativeBackend::Completion(client) => client,
    };

    let messages = [
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(section, product)),
    ];

    match client.complete(&messages, TEMPERATURE).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Generation of '{}' failed: {}", section, e);
            error_text(section, &e)
        }
    }
}

/// Generate every section, one request at a time, in section order
pub async fn generate_all_sections(
    backend: &NarrativeBackend,
    product: &str,
) -> NarrativeSections {
    if backend.is_fallback() {
        info!("No language model configured, using fallback narrative");
    }

    let mut sections = NarrativeSections::new();
    for section in NarrativeSection::ALL {
        let text = generate_section(backend, section, product).await;
        sections.insert(section, text);
    }
    sections
}
