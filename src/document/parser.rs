use std::collections::HashSet;
use std::ops::Range;

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::document::container::attribute;
use crate::toc::annotator::{has_marker, strip_marker};
use crate::toc::heading::HeadingRecord;

lazy_static! {
    // The regex crate has no backreferences, so the closing level is captured and compared.
    static ref HEADING_REGEX: Regex = Regex::new(
        r"(?is)<h([1-9])(\s[^>]*)?>(.*?)</h([1-9])\s*>"
    ).unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// A heading element found in an HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingElement {
    /// Heading level from the tag name
    pub level: u32,
    /// Byte range of the opening tag
    pub open_tag: Range<usize>,
    /// Byte range of the heading content
    pub inner: Range<usize>,
    /// Anchor id, taken from the element or generated from its text
    pub id: String,
    /// Whether `id` was generated and still has to be written into the document
    pub id_generated: bool,
    /// Plain heading text, section marker and tags removed
    pub text: String,
    /// Whether the content already starts with a section marker
    pub annotated: bool,
    /// Zero-based position among the collected headings
    pub sequence_index: usize,
}

impl HeadingElement {
    /// Range from the opening tag through the end of the content
    pub fn outer(&self) -> Range<usize> {
        self.open_tag.start..self.inner.end
    }

    pub fn to_record(&self) -> HeadingRecord {
        HeadingRecord {
            tag_depth: self.level,
            tag: format!("H{}", self.level),
            text: self.text.clone(),
            element_id: self.id.clone(),
            sequence_index: self.sequence_index,
        }
    }
}

/// Extract heading elements within `scope`, in document order.
///
/// Headings deeper than `max_level` are skipped. Headings without an `id` get one generated
/// from their text, unique within the document.
pub fn extract_headings(html: &str, scope: Range<usize>, max_level: u32) -> Vec<HeadingElement> {
    let mut found = Vec::new();

    for cap in HEADING_REGEX.captures_iter(&html[scope.clone()]) {
        let open_level = &cap[1];
        let close_level = &cap[4];
        let whole = match cap.get(0) {
            Some(m) => m,
            None => continue,
        };

        if open_level != close_level {
            warn!(
                "Skipping <h{}> closed by </h{}> at byte {}",
                open_level,
                close_level,
                scope.start + whole.start()
            );
            continue;
        }

        let level: u32 = match open_level.parse() {
            Ok(level) => level,
            Err(_) => continue,
        };
        if level > max_level {
            debug!("Ignoring h{} heading (limit is h{})", level, max_level);
            continue;
        }

        let inner = match cap.get(3) {
            Some(m) => (scope.start + m.start())..(scope.start + m.end()),
            None => continue,
        };
        let open_tag = (scope.start + whole.start())..inner.start;
        let attrs = cap.get(2).map(|m| m.as_str()).unwrap_or("");
        let content = &html[inner.clone()];

        found.push(HeadingElement {
            level,
            open_tag,
            inner,
            id: attribute(attrs, "id").unwrap_or_default(),
            id_generated: false,
            text: heading_text(content),
            annotated: has_marker(content),
            sequence_index: found.len(),
        });
    }

    assign_missing_ids(&mut found);
    debug!("Extracted {} headings", found.len());
    found
}

/// Plain text of heading content
pub fn heading_text(content: &str) -> String {
    let stripped = strip_html_tags(strip_marker(content));
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip HTML tags from text
fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").trim().to_string()
}

/// Give every heading without an id a unique slug
fn assign_missing_ids(headings: &mut [HeadingElement]) {
    let mut used: HashSet<String> = headings
        .iter()
        .filter(|h| !h.id.is_empty())
        .map(|h| h.id.clone())
        .collect();

    for heading in headings.iter_mut().filter(|h| h.id.is_empty()) {
        let base = generate_id_from_text(&heading.text, heading.sequence_index);
        let mut candidate = base.clone();
        let mut suffix = 1;

        while used.contains(&candidate) {
            candidate = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        used.insert(candidate.clone());
        heading.id = candidate;
        heading.id_generated = true;
    }
}

/// Generate an anchor id from heading text
fn generate_id_from_text(text: &str, sequence_index: usize) -> String {
    let decoded = html_escape::decode_html_entities(text);
    let slug = slug::slugify(decoded.as_ref());

    if slug.is_empty() {
        format!("section-{}", sequence_index + 1)
    } else {
        slug
    }
}
