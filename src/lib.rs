//! # Folio
//!
//! A page-native résumé layout engine.
//!
//! A CV exporter that draws onto an endless canvas and then cuts it into
//! pages ends up with section titles stranded at the bottom of a page and
//! bullets sliced in half. Folio never builds that canvas. A cursor walks
//! down a page of known size, and every line asks for room before it is
//! drawn. When there is none, the line starts the next page.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]      CvRecord: contact fields and entry lists
//!       ↓
//!   [layout]     content → blocks → primitives, one PageCursor throughout
//!       ↓         (measured and wrapped by [text] against [font] metrics)
//!   [Surface]    Canvas records pages; custom backends plug in here
//!       ↓
//!   [pdf]        Serialize to PDF bytes
//! ```

pub mod config;
pub mod error;
pub mod font;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod style;
pub mod text;

use std::io::Write;
use std::path::Path;

pub use config::LayoutConfig;
pub use error::FolioError;
pub use model::CvRecord;

use layout::LayoutEngine;
use pdf::{Metadata, PdfWriter};

/// Render a record to PDF bytes.
///
/// This is the primary entry point. Layout never fails: blank fields are
/// omitted and text the fonts can't show is substituted.
pub fn render(record: &CvRecord, config: &LayoutConfig) -> Vec<u8> {
    let engine = LayoutEngine::new(config.clone());
    let pages = engine.layout_pages(record);
    log::debug!("laid out {} page(s)", pages.len());
    PdfWriter::new().write(&pages, &Metadata::for_record(record))
}

/// Render a record described as JSON to PDF bytes.
pub fn render_json(json: &str, config: &LayoutConfig) -> Result<Vec<u8>, FolioError> {
    let record = CvRecord::from_json(json)?;
    Ok(render(&record, config))
}

/// Render `record` and write it to `path`, all or nothing.
///
/// The PDF is written to a temporary file beside `path` and moved into
/// place once complete. On failure the temporary file is removed and
/// `path` is left as it was.
pub fn export(record: &CvRecord, config: &LayoutConfig, path: impl AsRef<Path>) -> Result<(), FolioError> {
    let path = path.as_ref();
    let bytes = render(record, config);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| FolioError::io(path, e))?;
    file.write_all(&bytes).map_err(|e| FolioError::io(path, e))?;
    file.as_file().sync_all().map_err(|e| FolioError::io(path, e))?;
    file.persist(path).map_err(|e| FolioError::io(path, e.error))?;

    log::info!("CV PDF exported to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
