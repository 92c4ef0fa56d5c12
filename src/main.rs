use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use textract::{run_extraction, ExtractConfig};

#[derive(Parser)]
#[command(
    name = "textract",
    version,
    about = "Extract readable text from .docx and .xlsx files into a single text file"
)]
struct Args {
    /// Word document to extract paragraphs and table rows from
    docx: PathBuf,

    /// Spreadsheet archive to extract text nodes from
    xlsx: PathBuf,

    /// Output text file (overwritten on every run)
    #[arg(short, long, default_value = "extracted_text.txt")]
    output: PathBuf,

    /// Print extraction counters to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ExtractConfig {
        docx: args.docx,
        xlsx: args.xlsx,
        output: args.output,
    };

    let report = run_extraction(&config)?;

    if args.verbose {
        eprintln!(
            "{}: {} paragraphs, {} table rows",
            config.docx.display(),
            report.docx.paragraphs,
            report.docx.table_rows
        );
        eprintln!(
            "{}: {} text lines, {} of {} entries skipped",
            config.xlsx.display(),
            report.xlsx.text_lines,
            report.xlsx.skipped,
            report.xlsx.entries
        );
    }

    Ok(())
}
