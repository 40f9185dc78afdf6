//! Record rendering for the output sink
//!
//! Human-readable output only: one block per record with the source address,
//! the time-span label, then the grid with columns padded to their widest
//! cell. Flattening may leave rows with different widths; short rows simply
//! end early.

use crate::extract::tables::ExtractedRecord;

/// Formats one record as an output block
///
/// The block starts with a blank separator line, then the source URL, the
/// time label terminated by a colon, and the aligned grid.
pub fn format_record(record: &ExtractedRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", record.source_url));
    out.push_str(&format!("{}:\n", record.time_label));
    out.push_str(&format_grid(&record.rows));

    out
}

/// Aligns rows into columns, two spaces between columns
///
/// Column widths are taken over all rows that reach that column; the last
/// cell of each row is left unpadded.
fn format_grid(rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i >= widths.len() {
                widths.push(cell.len());
            } else if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    for row in rows {
        let last = row.len().saturating_sub(1);
        for (i, cell) in row.iter().enumerate() {
            if i == last {
                out.push_str(cell);
            } else {
                out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
        }
        out.push('\n');
    }

    out
}
