//! Report layout: the ordered blocks that make up the document
//!
//! Layout is independent of the output format. The `.docx` writer walks the
//! blocks in order.

use std::path::{Path, PathBuf};

use lca_types::{InventoryTable, NarrativeSection};

use super::ReportContent;
use crate::error::AssembleError;

pub const TABLE_OF_CONTENTS: [&str; 13] = [
    "Executive Summary",
    "1. Introduction",
    "2. Goal and Scope",
    "3. Functional Unit",
    "4. System Boundary",
    "5. Web-Sourced Product Information",
    "6. Inventory Analysis",
    "7. LCIA with Charts",
    "8. Interpretation",
    "9. Limitations",
    "10. Recommendations",
    "Appendix A: Glossary",
    "Appendix B: References",
];

pub const CONFIDENTIAL_NOTICE: &str = "Confidential – For Internal Use Only";

pub const GLOSSARY: &str = "LCA: Life Cycle Assessment\n\
GWP: Global Warming Potential\n\
MJ: Megajoules\n\
CO2-eq: Carbon dioxide equivalent";

pub const REFERENCES: &str = "1. ISO 14040/44\n\
2. Ecoinvent\n\
3. IPCC\n\
4. Manufacturer Reports\n\
5. Online product research";

const FRONT_SECTIONS: [NarrativeSection; 4] = [
    NarrativeSection::Introduction,
    NarrativeSection::GoalAndScope,
    NarrativeSection::FunctionalUnit,
    NarrativeSection::SystemBoundary,
];

const BACK_SECTIONS: [NarrativeSection; 3] = [
    NarrativeSection::Interpretation,
    NarrativeSection::Limitations,
    NarrativeSection::Recommendations,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    /// Newlines become line breaks inside the paragraph
    Paragraph { text: String, align: Align },
    /// First row is the header
    Table(Vec<Vec<String>>),
    Figure { caption: String, image: PathBuf },
    PageBreak,
}

impl Block {
    fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            align: Align::Left,
        }
    }
}

/// Round to two decimals and print the shortest representation
/// (`101.2`, not `101.20`)
pub fn format_value(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}

/// Caption for a chart file: `Energy_Use_(MJ).png` -> `Figure: Energy Use (Mj)`
pub fn figure_caption(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or_default();
    format!("Figure: {}", title_case(&stem.replace('_', " ")))
}

/// Uppercase each letter that follows a non-letter, lowercase the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

fn inventory_rows(table: &InventoryTable) -> Vec<Vec<String>> {
    let header: Vec<String> = InventoryTable::header()
        .into_iter()
        .map(str::to_string)
        .collect();

    std::iter::once(header)
        .chain(table.rows().map(|(stage, values)| {
            std::iter::once(stage.label().to_string())
                .chain(values.iter().map(|v| format_value(*v)))
                .collect()
        }))
        .collect()
}

fn narrative<'a>(
    content: &'a ReportContent,
    section: NarrativeSection,
) -> Result<&'a str, AssembleError> {
    content
        .narrative
        .get(section)
        .ok_or(AssembleError::MissingSection(section))
}

/// Build the full block sequence.
///
/// Fails if any narrative section is missing; no block is substituted.
pub fn build_layout(content: &ReportContent) -> Result<Vec<Block>, AssembleError> {
    if let Some(section) = content.narrative.missing().first() {
        return Err(AssembleError::MissingSection(*section));
    }

    let mut blocks = vec![
        Block::Title(format!("LCA Report for: {}", content.product)),
        Block::paragraph(format!("Date: {}", content.date.format("%Y-%m-%d"))),
        Block::Paragraph {
            text: CONFIDENTIAL_NOTICE.to_string(),
            align: Align::Right,
        },
        Block::PageBreak,
        Block::Heading("Table of Contents".to_string()),
    ];
    blocks.extend(TABLE_OF_CONTENTS.iter().map(|entry| Block::paragraph(*entry)));
    blocks.push(Block::PageBreak);

    let section_blocks = |section: NarrativeSection| -> Result<[Block; 3], AssembleError> {
        Ok([
            Block::Heading(section.label().to_string()),
            Block::paragraph(narrative(content, section)?),
            Block::PageBreak,
        ])
    };

    blocks.extend(section_blocks(NarrativeSection::ExecutiveSummary)?);
    for section in FRONT_SECTIONS {
        blocks.extend(section_blocks(section)?);
    }

    blocks.extend([
        Block::Heading("5. Web-Sourced Product Information".to_string()),
        Block::paragraph(content.web_excerpt.as_str()),
        Block::PageBreak,
        Block::Heading("6. Inventory Analysis".to_string()),
        Block::Table(inventory_rows(&content.inventory)),
        Block::PageBreak,
        Block::Heading("7. LCIA with Charts".to_string()),
    ]);
    blocks.extend(content.charts.iter().map(|chart| Block::Figure {
        caption: figure_caption(chart),
        image: chart.clone(),
    }));
    blocks.push(Block::PageBreak);

    for section in BACK_SECTIONS {
        blocks.extend(section_blocks(section)?);
    }

    blocks.extend([
        Block::Heading("Appendix A: Glossary".to_string()),
        Block::paragraph(GLOSSARY),
        Block::PageBreak,
        Block::Heading("Appendix B: References".to_string()),
        Block::paragraph(REFERENCES),
        Block::PageBreak,
    ]);

    Ok(blocks)
}
