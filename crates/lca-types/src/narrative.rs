//! Narrative sections drafted for a report

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The eight prose sections of a report, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSection {
    ExecutiveSummary,
    Introduction,
    GoalAndScope,
    FunctionalUnit,
    SystemBoundary,
    Interpretation,
    Limitations,
    Recommendations,
}

impl NarrativeSection {
    pub const ALL: [NarrativeSection; 8] = [
        NarrativeSection::ExecutiveSummary,
        NarrativeSection::Introduction,
        NarrativeSection::GoalAndScope,
        NarrativeSection::FunctionalUnit,
        NarrativeSection::SystemBoundary,
        NarrativeSection::Interpretation,
        NarrativeSection::Limitations,
        NarrativeSection::Recommendations,
    ];

    /// Heading text, which doubles as the section name sent to the model
    pub fn label(&self) -> &'static str {
        match self {
            NarrativeSection::ExecutiveSummary => "Executive Summary",
            NarrativeSection::Introduction => "1. Introduction",
            NarrativeSection::GoalAndScope => "2. Goal and Scope",
            NarrativeSection::FunctionalUnit => "3. Functional Unit",
            NarrativeSection::SystemBoundary => "4. System Boundary",
            NarrativeSection::Interpretation => "8. Interpretation",
            NarrativeSection::Limitations => "9. Limitations",
            NarrativeSection::Recommendations => "10. Recommendations",
        }
    }
}

impl fmt::Display for NarrativeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Generated text keyed by section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSections {
    entries: BTreeMap<NarrativeSection, String>,
}

impl NarrativeSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store text for a section, replacing any earlier text
    pub fn insert(&mut self, section: NarrativeSection, text: impl Into<String>) {
        self.entries.insert(section, text.into());
    }

    pub fn get(&self, section: NarrativeSection) -> Option<&str> {
        self.entries.get(&section).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sections with no text yet, in section order
    pub fn missing(&self) -> Vec<NarrativeSection> {
        NarrativeSection::ALL
            .into_iter()
            .filter(|section| !self.entries.contains_key(section))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NarrativeSection, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(NarrativeSection, String)> for NarrativeSections {
    fn from_iter<I: IntoIterator<Item = (NarrativeSection, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
