//! Fonts bundled with `typst-assets`
//!
//! Chart text never depends on fonts installed on the host.

use std::sync::OnceLock;

use typst::foundations::Bytes;
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;

static EMBEDDED: OnceLock<EmbeddedFonts> = OnceLock::new();

/// Process-wide font set, loaded on first use
pub fn embedded_fonts() -> &'static EmbeddedFonts {
    EMBEDDED.get_or_init(EmbeddedFonts::load)
}

pub struct EmbeddedFonts {
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
}

impl EmbeddedFonts {
    fn load() -> Self {
        let fonts: Vec<Font> = typst_assets::fonts()
            .flat_map(|data| Font::iter(Bytes::from_static(data)))
            .collect();
        let book = FontBook::from_fonts(&fonts);

        tracing::debug!("Loaded {} embedded fonts", fonts.len());

        Self {
            book: LazyHash::new(book),
            fonts,
        }
    }

    pub fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    pub fn get(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }
}
