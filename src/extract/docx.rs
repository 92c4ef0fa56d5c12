//! Word-document extraction
//!
//! Walks a .docx through docx-rs and writes its readable text to the sink:
//! every non-blank paragraph as its own line, then every table row with at
//! least one non-blank cell as the cell texts joined by `" | "`. Paragraphs
//! come first in document order, then tables.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Counters for one Word-document pass.
///
/// Diagnostic only; nothing written to the sink depends on them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxSummary {
    /// Paragraph lines written.
    pub paragraphs: usize,
    /// Table-row lines written.
    pub table_rows: usize,
}

/// Extract paragraph and table text from a Word document.
///
/// There is no contained failure tier on this side: a missing file, a
/// package that is not a .docx, or a malformed document body all propagate
/// to the caller.
pub fn extract_docx<W: Write>(path: &Path, out: &mut W) -> Result<DocxSummary> {
    writeln!(out, "--- DOCX: {} ---", path.display())?;

    let file_data = std::fs::read(path)?;
    let docx = docx_rs::read_docx(&file_data)?;

    let mut summary = DocxSummary::default();

    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let text = paragraph_text(para);
            if !text.trim().is_empty() {
                writeln!(out, "{text}")?;
                summary.paragraphs += 1;
            }
        }
    }

    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Table(table) = child {
            summary.table_rows += write_table(table, out)?;
        }
    }

    Ok(summary)
}

/// Concatenated text of all runs in a paragraph.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text_elem) = run_child {
                    text.push_str(&text_elem.text);
                }
            }
        }
    }

    text
}

/// Write one table as `" | "`-joined rows, skipping rows whose cells are all
/// blank. Returns the number of rows written.
fn write_table<W: Write>(table: &docx_rs::Table, out: &mut W) -> Result<usize> {
    let mut rows_written = 0;

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            cells.push(cell_text(cell));
        }

        // A row where every cell is blank produces no line at all.
        if cells.iter().any(|cell| !cell.is_empty()) {
            writeln!(out, "{}", cells.join(" | "))?;
            rows_written += 1;
        }
    }

    Ok(rows_written)
}

/// A cell's text is its paragraphs joined by line breaks, with the breaks
/// then flattened to single spaces so the row stays on one line.
fn cell_text(cell: &docx_rs::TableCell) -> String {
    let mut paragraphs = Vec::new();

    for content in &cell.children {
        if let docx_rs::TableCellContent::Paragraph(para) = content {
            paragraphs.push(paragraph_text(para));
        }
    }

    paragraphs
        .join("\n")
        .replace('\n', " ")
        .trim()
        .to_string()
}
