//! Text extraction pipeline
//!
//! One output sink, two extractors run in sequence: the Word document first,
//! then the spreadsheet. The two sides handle failure differently — see
//! [`extract_docx`] and [`extract_xlsx`].

pub(crate) mod docx;
pub(crate) mod xlsx;

pub use docx::{extract_docx, DocxSummary};
pub use xlsx::{extract_xlsx, SheetError, XlsxSummary};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::config::ExtractConfig;

/// Counters from one full run, one set per extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractReport {
    pub docx: DocxSummary,
    pub xlsx: XlsxSummary,
}

/// Run both extractors against the configured paths.
///
/// The output file is created (truncating any previous run) before any input
/// is touched, shared by both extractors, and released on every exit path.
/// A Word-side failure propagates to the caller; a spreadsheet-side failure
/// has already been reduced to a diagnostic line in the output by the time
/// this returns.
pub fn run_extraction(config: &ExtractConfig) -> Result<ExtractReport> {
    let out = File::create(&config.output).with_context(|| {
        format!(
            "failed to create output file {}",
            config.output.display()
        )
    })?;
    let mut out = BufWriter::new(out);

    let docx = extract_docx(&config.docx, &mut out)
        .with_context(|| format!("failed to extract {}", config.docx.display()))?;
    let xlsx = extract_xlsx(&config.xlsx, &mut out)?;

    out.flush().context("failed to flush output file")?;

    Ok(ExtractReport { docx, xlsx })
}
