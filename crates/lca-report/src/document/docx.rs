//! `.docx` writer for a report layout

use std::fs::File;
use std::path::Path;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Pic, Run, Style, StyleType, Table, TableCell,
    TableRow,
};
use tracing::debug;

use super::layout::{Align, Block};
use crate::error::AssembleError;

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

/// English Metric Units per inch
const EMU_PER_INCH: u32 = 914_400;

/// Figures are scaled to this width, keeping their aspect ratio
pub const FIGURE_WIDTH_EMU: u32 = 5 * EMU_PER_INCH + EMU_PER_INCH / 2;

fn styled_docx() -> Docx {
    Docx::new()
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
}

/// Text run with `\n` turned into line breaks
fn text_run(text: &str) -> Run {
    text.split('\n')
        .enumerate()
        .fold(Run::new(), |run, (i, line)| {
            let run = if i > 0 {
                run.add_break(BreakType::TextWrapping)
            } else {
                run
            };
            run.add_text(line)
        })
}

fn table(rows: &[Vec<String>]) -> Table {
    Table::new(
        rows.iter()
            .map(|row| {
                TableRow::new(
                    row.iter()
                        .map(|cell| {
                            TableCell::new().add_paragraph(Paragraph::new().add_run(text_run(cell)))
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

/// Width and height of a PNG, read from its header
fn png_dimensions(bytes: &[u8], path: &Path) -> Result<(u32, u32), AssembleError> {
    let reader = png::Decoder::new(bytes)
        .read_info()
        .map_err(|e| AssembleError::InvalidImage {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let info = reader.info();

    if info.width == 0 || info.height == 0 {
        return Err(AssembleError::InvalidImage {
            path: path.to_path_buf(),
            reason: "zero-sized image".to_string(),
        });
    }
    Ok((info.width, info.height))
}

fn figure(image: &Path) -> Result<Paragraph, AssembleError> {
    let bytes = std::fs::read(image).map_err(|source| AssembleError::ChartRead {
        path: image.to_path_buf(),
        source,
    })?;
    let (width, height) = png_dimensions(&bytes, image)?;

    let height_emu = (u64::from(FIGURE_WIDTH_EMU) * u64::from(height) / u64::from(width)) as u32;
    debug!(
        "Embedding {} ({}x{} px) at {}x{} EMU",
        image.display(),
        width,
        height,
        FIGURE_WIDTH_EMU,
        height_emu
    );

    let pic = Pic::new(&bytes).size(FIGURE_WIDTH_EMU, height_emu);
    Ok(Paragraph::new().add_run(Run::new().add_image(pic)))
}

/// Render `blocks` in order and save the package to `path`
pub fn write_docx(blocks: &[Block], path: &Path) -> Result<(), AssembleError> {
    let mut docx = styled_docx();

    for block in blocks {
        docx = match block {
            Block::Title(text) => {
                docx.add_paragraph(Paragraph::new().style(TITLE_STYLE).add_run(text_run(text)))
            }
            Block::Heading(text) => {
                docx.add_paragraph(Paragraph::new().style(HEADING_STYLE).add_run(text_run(text)))
            }
            Block::Paragraph { text, align } => {
                let paragraph = Paragraph::new().add_run(text_run(text));
                let paragraph = match align {
                    Align::Left => paragraph,
                    Align::Right => paragraph.align(AlignmentType::Right),
                };
                docx.add_paragraph(paragraph)
            }
            Block::Table(rows) => docx.add_table(table(rows)),
            Block::Figure { caption, image } => docx
                .add_paragraph(Paragraph::new().add_run(text_run(caption)))
                .add_paragraph(figure(image)?),
            Block::PageBreak => {
                docx.add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
            }
        };
    }

    let file = File::create(path)?;
    docx.build()
        .pack(file)
        .map_err(|e| AssembleError::Package(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Read;
    use std::path::PathBuf;

    /// Solid-color RGB PNG for embedding tests
    pub(crate) fn write_test_png(path: &Path, width: u32, height: u32) {
        let file = File::create(path).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        let data = vec![70u8; (width * height * 3) as usize];
        writer.write_image_data(&data).unwrap();
    }

    /// `word/document.xml` of a saved package
    pub(crate) fn document_xml(path: &Path) -> String {
        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    #[test]
    fn test_figure_width() {
        assert_eq!(FIGURE_WIDTH_EMU, 5_029_200);
    }

    #[test]
    fn test_writes_text_table_and_breaks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        let blocks = vec![
            Block::Title("LCA Report for: Kettle".to_string()),
            Block::Paragraph {
                text: "line one\nline two".to_string(),
                align: Align::Right,
            },
            Block::PageBreak,
            Block::Table(vec![
                vec!["Life Cycle Stage".to_string(), "Water Use (L)".to_string()],
                vec!["Materials".to_string(), "31.05".to_string()],
            ]),
        ];

        write_docx(&blocks, &path).unwrap();
        let xml = document_xml(&path);

        assert!(xml.contains("LCA Report for: Kettle"));
        assert!(xml.contains(">line one<"));
        assert!(xml.contains(">line two<"));
        assert!(xml.contains("w:type=\"page\""));
        assert!(xml.contains(">31.05<"));
        assert_eq!(xml.matches("</w:tr>").count(), 2);
    }

    #[test]
    fn test_embeds_figures() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("Water_Use_(L).png");
        write_test_png(&image, 40, 30);
        let path = dir.path().join("out.docx");
        let blocks = vec![Block::Figure {
            caption: "Figure: Water Use (L)".to_string(),
            image,
        }];

        write_docx(&blocks, &path).unwrap();
        let xml = document_xml(&path);

        assert!(xml.contains("Figure: Water Use (L)"));
        assert_eq!(xml.matches("<w:drawing").count(), 1);
    }

    #[test]
    fn test_missing_chart_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocks = vec![Block::Figure {
            caption: "Figure: Gone".to_string(),
            image: PathBuf::from("/nonexistent/Gone.png"),
        }];

        let err = write_docx(&blocks, &dir.path().join("out.docx")).unwrap_err();
        assert!(matches!(err, AssembleError::ChartRead { .. }));
    }

    #[test]
    fn test_non_png_chart_fails() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("bad.png");
        std::fs::write(&image, b"not a png").unwrap();
        let blocks = vec![Block::Figure {
            caption: "Figure: Bad".to_string(),
            image,
        }];

        let err = write_docx(&blocks, &dir.path().join("out.docx")).unwrap_err();
        assert!(matches!(err, AssembleError::InvalidImage { .. }));
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let blocks = vec![Block::PageBreak];
        let err = write_docx(&blocks, Path::new("/nonexistent/dir/out.docx")).unwrap_err();
        assert!(matches!(err, AssembleError::Io(_)));
    }
}
