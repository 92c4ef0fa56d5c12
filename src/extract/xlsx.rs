//! Spreadsheet extraction
//!
//! Treats an .xlsx as a zip archive of XML parts and writes every element's
//! direct text content to the sink, trimmed, one line each. Failures on this
//! side never escape: an archive that will not open becomes a single
//! diagnostic line, and an entry that will not read or parse is skipped.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use thiserror::Error;
use zip::result::ZipError;
use zip::ZipArchive;

/// Failure modes on the spreadsheet side, split by how they are handled.
///
/// `ArchiveOpen` is reportable: the extractor writes its description into
/// the output as a `Failed to read xlsx:` line. `EntryRead` and `EntryParse`
/// are ignorable: the entry is skipped and only a counter records that it
/// happened. Archive entries that are not well-formed XML are a normal part
/// of the format, not a defect in the input.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The file could not be opened as a zip archive at all.
    #[error("{0}")]
    ArchiveOpen(#[source] ZipError),
    /// An individual archive entry could not be read.
    #[error("could not read archive entry: {0}")]
    EntryRead(#[source] ZipError),
    /// An individual archive entry is not well-formed XML.
    #[error("entry is not well-formed XML: {0}")]
    EntryParse(#[source] quick_xml::Error),
}

/// Counters for one spreadsheet pass.
///
/// Diagnostic only; nothing written to the sink depends on them.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxSummary {
    /// Entries the archive reported.
    pub entries: usize,
    /// Entries skipped because they could not be read or parsed.
    pub skipped: usize,
    /// Text lines written to the sink.
    pub text_lines: usize,
    /// True when the archive itself could not be opened.
    pub archive_error: bool,
}

/// Extract text nodes from a spreadsheet archive.
///
/// Only sink write failures are returned; everything that goes wrong with
/// the spreadsheet itself is contained here per [`SheetError`].
pub fn extract_xlsx<W: Write>(path: &Path, out: &mut W) -> io::Result<XlsxSummary> {
    writeln!(out)?;
    writeln!(out, "--- XLSX: {} ---", path.display())?;

    let mut summary = XlsxSummary::default();

    let mut archive = match open_archive(path) {
        Ok(archive) => archive,
        Err(err) => {
            writeln!(out, "Failed to read xlsx: {err}")?;
            summary.archive_error = true;
            return Ok(summary);
        }
    };

    summary.entries = archive.len();

    for index in 0..archive.len() {
        match scan_entry(&mut archive, index) {
            Ok(Some(lines)) => {
                for line in &lines {
                    writeln!(out, "{line}")?;
                }
                summary.text_lines += lines.len();
            }
            // Not an XML part; never parsed.
            Ok(None) => {}
            Err(_) => summary.skipped += 1,
        }
    }

    Ok(summary)
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>, SheetError> {
    let file = File::open(path).map_err(|err| SheetError::ArchiveOpen(err.into()))?;
    ZipArchive::new(file).map_err(SheetError::ArchiveOpen)
}

/// Read one entry and collect its direct-text lines. `None` means the entry
/// name does not end in `.xml` and the entry was never parsed.
fn scan_entry(
    archive: &mut ZipArchive<File>,
    index: usize,
) -> Result<Option<Vec<String>>, SheetError> {
    let mut entry = archive.by_index(index).map_err(SheetError::EntryRead)?;

    if !entry.name().ends_with(".xml") {
        return Ok(None);
    }

    let mut raw = Vec::new();
    entry
        .read_to_end(&mut raw)
        .map_err(|err| SheetError::EntryRead(err.into()))?;

    collect_direct_text(&raw).map(Some)
}

/// Parse one XML part and return every element's direct text content,
/// trimmed, in document order.
///
/// All-or-nothing: a parse error anywhere in the part yields no text at all,
/// even when text had already been seen before the error point.
fn collect_direct_text(raw: &[u8]) -> Result<Vec<String>, SheetError> {
    let mut reader = Reader::from_reader(raw);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    // Direct text follows an element's start tag. After an end tag the
    // reader is looking at tail text, which does not count.
    let mut after_start = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => after_start = true,
            Ok(Event::End(_)) | Ok(Event::Empty(_)) => after_start = false,
            Ok(Event::Text(text)) if after_start => {
                let text = text
                    .unescape()
                    .map_err(|err| SheetError::EntryParse(err.into()))?;
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    lines.push(trimmed.to_string());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(SheetError::EntryParse(err)),
        }
        buf.clear();
    }

    Ok(lines)
}
