//! Discount-table extraction
//!
//! Event pages are free-form marketing markup, so extraction is best-effort
//! by design: a single pre-order walk of the parsed tree collects candidate
//! `tbody` regions and the most recent time-of-day text seen before each one,
//! then a content heuristic and a shape check decide which candidates become
//! records. Tables that fail either test are skipped silently.

use crate::pipeline::FetchedResponse;
use crate::ExtractError;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

/// One qualifying table, flattened for rendering
///
/// Ephemeral output: records are printed and discarded, never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    /// Address of the page the table was found on
    pub source_url: String,

    /// Text of the nearest preceding time-of-day node, or empty if none
    pub time_label: String,

    /// Rows of non-whitespace text cells
    ///
    /// Whitespace-only cells are dropped outright, so row widths here may
    /// differ from the raw `td` counts the shape check saw.
    pub rows: Vec<Vec<String>>,
}

fn selector(sel_str: &str) -> Result<Selector, ExtractError> {
    Selector::parse(sel_str).map_err(|_| ExtractError::Selector(sel_str.to_string()))
}

/// Extracts all qualifying discount tables from one fetched page
///
/// A table qualifies when some descendant text node contains `discount`, no
/// descendant text node contains `rental`, and every row has the same raw
/// cell count. Records come back in the order the tables appear in the
/// document; an empty vector is the normal outcome for most pages.
pub fn extract_records(
    response: &FetchedResponse,
) -> Result<Vec<ExtractedRecord>, ExtractError> {
    let document = Html::parse_document(&response.body);

    let tr_selector = selector("tr")?;
    let td_selector = selector("td")?;
    let time_pattern = Regex::new(r"\d\d:\d\d")?;
    let word_pattern = Regex::new(r"\w")?;

    let mut records = Vec::new();
    let mut last_time: Option<String> = None;

    // Pre-order traversal is document order, so the label snapshot taken at
    // each tbody is exactly the nearest preceding matching text node: text
    // inside the tbody has not been visited yet.
    for node in document.tree.root().descendants() {
        match node.value() {
            Node::Text(text) => {
                if time_pattern.is_match(&text.text) {
                    last_time = Some(text.text.to_string());
                }
            }
            Node::Element(element) if element.name() == "tbody" => {
                let Some(tbody) = ElementRef::wrap(node) else {
                    continue;
                };

                if !mentions_discount(&tbody) {
                    continue;
                }
                if !is_printable_grid(&tbody, &tr_selector, &td_selector) {
                    continue;
                }

                records.push(ExtractedRecord {
                    source_url: response.url.clone(),
                    time_label: last_time.clone().unwrap_or_default(),
                    rows: flatten_rows(&tbody, &tr_selector, &word_pattern),
                });
            }
            _ => {}
        }
    }

    Ok(records)
}

/// Content heuristic: `discount` somewhere, `rental` nowhere
///
/// Case-sensitive on purpose: the site's discount tables spell it lowercase,
/// and rental offers reuse the same table markup.
fn mentions_discount(tbody: &ElementRef) -> bool {
    let mut seen_discount = false;
    for chunk in tbody.text() {
        if chunk.contains("rental") {
            return false;
        }
        if chunk.contains("discount") {
            seen_discount = true;
        }
    }
    seen_discount
}

/// Shape invariant: at least one row, every row with the same raw `td` count
///
/// Evaluated on raw cell counts, before whitespace-only cells are dropped. A
/// failing table is rejected outright, never trimmed or padded.
fn is_printable_grid(
    tbody: &ElementRef,
    tr_selector: &Selector,
    td_selector: &Selector,
) -> bool {
    let mut width: Option<usize> = None;

    for row in tbody.select(tr_selector) {
        let cells = row.select(td_selector).count();
        match width {
            None => width = Some(cells),
            Some(expected) if cells != expected => return false,
            Some(_) => {}
        }
    }

    width.is_some()
}

/// Flattens a validated table into rows of text cells
///
/// Every descendant text node of a row that contains a word character
/// becomes one cell, text kept verbatim; whitespace-only nodes vanish rather
/// than turning into empty placeholders.
fn flatten_rows(
    tbody: &ElementRef,
    tr_selector: &Selector,
    word_pattern: &Regex,
) -> Vec<Vec<String>> {
    tbody
        .select(tr_selector)
        .map(|row| {
            row.text()
                .filter(|chunk| word_pattern.is_match(chunk))
                .map(str::to_string)
                .collect()
        })
        .collect()
}
