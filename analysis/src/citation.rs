//! `[Page N]` citation tokens embedded in backend-generated text.
//!
//! DESIGN
//! ======
//! Answers and analysis sections carry inline page markers. Rendering splits
//! text into alternating literal and citation segments so every marker can
//! become a jump-to-page control while the surrounding text (including line
//! breaks) is kept byte for byte.

#[cfg(test)]
#[path = "citation_test.rs"]
mod citation_test;

use std::sync::LazyLock;

use regex::Regex;

static CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[Page (\d+)\]").expect("static regex"));

/// Lenient page mention used for risk evidence: `[Page 74]`, `[Page 74`,
/// `Page 74`, `page 74.5`.
static PAGE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[?page\s+(\d+(?:\.\d+)?)\]?").expect("static regex"));

/// A piece of cited text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Literal text between citations.
    Text(String),
    /// A `[Page N]` marker.
    Citation(u32),
}

/// Split text into literal and citation segments, in order.
///
/// Empty literal runs between adjacent citations are dropped. A marker whose
/// number does not fit in `u32` stays literal text.
#[must_use]
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for caps in CITATION.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let Some(page) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
            continue;
        };
        if whole.start() > cursor {
            out.push(Segment::Text(text[cursor..whole.start()].to_owned()));
        }
        out.push(Segment::Citation(page));
        cursor = whole.end();
    }
    if cursor < text.len() {
        out.push(Segment::Text(text[cursor..].to_owned()));
    }
    out
}

/// Unique cited pages in order of first appearance.
#[must_use]
pub fn cited_pages(text: &str) -> Vec<u32> {
    let mut pages = Vec::new();
    for segment in segments(text) {
        if let Segment::Citation(page) = segment
            && !pages.contains(&page)
        {
            pages.push(page);
        }
    }
    pages
}

/// Remove every `[Page N]` marker and trim the result.
#[must_use]
pub fn strip_citations(text: &str) -> String {
    CITATION.replace_all(text, "").trim().to_owned()
}

/// Sorted unique pages mentioned anywhere in free text, with loose matching.
///
/// Decimal page numbers are floored and zero is discarded.
#[must_use]
pub fn mentioned_pages(text: &str) -> Vec<u32> {
    let mut pages: Vec<u32> = PAGE_MENTION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| {
            let whole = m.as_str().split('.').next().unwrap_or_default();
            whole.parse::<u32>().ok()
        })
        .filter(|page| *page > 0)
        .collect();
    pages.sort_unstable();
    pages.dedup();
    pages
}

/// Label shown on a citation control.
#[must_use]
pub fn citation_label(page: u32) -> String {
    format!("Page {page}")
}
