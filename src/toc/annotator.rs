//! Section markers prepended to headings.
//!
//! A marker looks like
//! `<span class="heading-section-outer"><span class="heading-section-prefix">Section</span>`
//! `<span class="heading-section-id">...per-number spans...</span></span>`.
//! Whether a heading has already been marked is tracked by an [`AnnotationLedger`] owned by the
//! caller, so building the markup itself has no side effects.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Every marker ends with the closing spans of the last number, the id and the outer wrapper.
    static ref MARKER_REGEX: Regex = Regex::new(
        r#"(?s)^\s*<span class="heading-section-outer">.*?</span></span></span>"#
    ).unwrap();
}

/// Builds section markers with a fixed label
#[derive(Debug, Clone)]
pub struct HeadingAnnotator {
    label: String,
}

impl HeadingAnnotator {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Marker markup for `section_id`
    pub fn marker(&self, section_id: &str) -> String {
        format!(
            "<span class=\"heading-section-outer\"><span class=\"heading-section-prefix\">{}</span><span class=\"heading-section-id\">{}</span></span>",
            html_escape::encode_text(&self.label),
            per_number_markup(section_id)
        )
    }

    /// Heading inner HTML with the marker prepended
    pub fn annotate(&self, inner_html: &str, section_id: &str) -> String {
        format!("{}{}", self.marker(section_id), inner_html)
    }
}

/// Wrap each number of a section id in a depth-indexed span.
///
/// `"2.1"` becomes `<span class="sid-1">2<span class="sid-dot">.</span></span><span class="sid-2">1</span>`.
pub fn per_number_markup(section_id: &str) -> String {
    let numbers: Vec<&str> = section_id.split('.').collect();
    let mut html = String::new();

    for (i, number) in numbers.iter().enumerate() {
        let depth = i + 1;
        let dot = if depth == numbers.len() {
            ""
        } else {
            "<span class=\"sid-dot\">.</span>"
        };
        html.push_str(&format!(
            "<span class=\"sid-{}\">{}{}</span>",
            depth,
            html_escape::encode_text(number),
            dot
        ));
    }

    html
}

/// Whether heading content already starts with a section marker
pub fn has_marker(inner_html: &str) -> bool {
    MARKER_REGEX.is_match(inner_html)
}

/// Heading content with a leading section marker removed
pub fn strip_marker(inner_html: &str) -> &str {
    match MARKER_REGEX.find(inner_html) {
        Some(m) => &inner_html[m.end()..],
        None => inner_html,
    }
}

/// Records which headings (by sequence index) have been annotated during a run
#[derive(Debug, Clone, Default)]
pub struct AnnotationLedger {
    annotated: HashSet<usize>,
}

impl AnnotationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from headings that already carry a marker.
    pub fn with_annotated<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        Self {
            annotated: indices.into_iter().collect(),
        }
    }

    /// Claim a heading for annotation; false if it was already annotated.
    pub fn claim(&mut self, sequence_index: usize) -> bool {
        self.annotated.insert(sequence_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_number_markup() {
        assert_eq!(
            per_number_markup("2.1"),
            "<span class=\"sid-1\">2<span class=\"sid-dot\">.</span></span><span class=\"sid-2\">1</span>"
        );
        assert_eq!(per_number_markup("7"), "<span class=\"sid-1\">7</span>");
    }

    #[test]
    fn test_marker_round_trips_through_detection() {
        let annotator = HeadingAnnotator::new("Section");
        let annotated = annotator.annotate("Getting <em>started</em>", "1.2.3");

        assert!(annotated.starts_with("<span class=\"heading-section-outer\"><span class=\"heading-section-prefix\">Section</span>"));
        assert!(has_marker(&annotated));
        assert_eq!(strip_marker(&annotated), "Getting <em>started</em>");
        assert!(!has_marker("Getting <em>started</em>"));
    }

    #[test]
    fn test_label_is_escaped() {
        let annotator = HeadingAnnotator::new("<Part>");
        let marker = annotator.marker("1");
        assert!(marker.contains("&lt;Part&gt;"));
        assert!(has_marker(&marker));
    }

    #[test]
    fn test_ledger_makes_annotation_idempotent() {
        let annotator = HeadingAnnotator::new("Section");
        let mut ledger = AnnotationLedger::new();
        let mut content = "Intro".to_string();

        for section_id in ["1.1", "1.1", "9.9"] {
            if ledger.claim(0) {
                content = annotator.annotate(&content, section_id);
            }
        }

        assert_eq!(content, annotator.annotate("Intro", "1.1"));
        assert!(!ledger.claim(0));
        assert!(ledger.claim(1));
    }

    #[test]
    fn test_seeded_ledger() {
        let mut ledger = AnnotationLedger::with_annotated([2, 5]);
        assert!(!ledger.claim(2));
        assert!(ledger.claim(3));
    }
}
