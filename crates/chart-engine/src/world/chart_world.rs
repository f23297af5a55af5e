//! In-memory World for chart compilation
//!
//! Only the main source exists; every other file id resolves to not found.
//! Charts carry no dates, so `today` is unavailable.

use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime, Dict};
use typst::syntax::{FileId, Source, VirtualPath};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, World};

use super::fonts::{embedded_fonts, EmbeddedFonts};

const MAIN_PATH: &str = "/chart.typ";

pub struct ChartWorld {
    main: Source,
    fonts: &'static EmbeddedFonts,
    library: LazyHash<Library>,
}

impl ChartWorld {
    /// `inputs` become `sys.inputs` inside the source
    pub fn new(source: impl Into<String>, inputs: Dict) -> Self {
        let id = FileId::new(None, VirtualPath::new(MAIN_PATH));

        Self {
            main: Source::new(id, source.into()),
            fonts: embedded_fonts(),
            library: LazyHash::new(Library::builder().with_inputs(inputs).build()),
        }
    }

    fn not_found(id: FileId) -> FileError {
        FileError::NotFound(id.vpath().as_rootless_path().into())
    }
}

impl World for ChartWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        self.fonts.book()
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(Self::not_found(id))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        if id == self.main.id() {
            Ok(Bytes::from(self.main.text().as_bytes().to_vec()))
        } else {
            Err(Self::not_found(id))
        }
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index)
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        None
    }
}
