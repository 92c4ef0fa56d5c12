//! Run configuration

use std::path::PathBuf;

/// The three paths one extraction run operates on.
///
/// Built from the command line and handed to [`run_extraction`]; nothing in
/// the pipeline reads paths from anywhere else.
///
/// [`run_extraction`]: crate::extract::run_extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Word document; a failure reading it aborts the run.
    pub docx: PathBuf,
    /// Spreadsheet archive; failures reading it are contained.
    pub xlsx: PathBuf,
    /// Plain-text output file, overwritten on every run.
    pub output: PathBuf,
}
