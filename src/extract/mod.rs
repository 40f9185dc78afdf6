//! Table extraction and rendering
//!
//! This module turns fetched event pages into printed discount tables:
//! - A content heuristic and shape check select candidate tables
//! - Qualifying tables are flattened into rows of text cells
//! - Records are rendered as aligned text blocks for the output sink

mod render;
mod tables;

pub use render::format_record;
pub use tables::{extract_records, ExtractedRecord};
