use std::ops::Range;

use log::{debug, info, warn};

use crate::config::Config;
use crate::document::container::{
    add_class, attribute, find_element_by_id, insert_attribute, remove_class, ElementSpan,
};
use crate::document::parser::{extract_headings, HeadingElement};
use crate::toc::annotator::{AnnotationLedger, HeadingAnnotator};
use crate::toc::generator::{TocGenerator, TocOutcome};
use crate::toc::heading::HeadingRecord;
use crate::utils::error::BoxResult;

/// What happened to the TOC container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    /// The document has no container; nothing was changed
    Missing,
    /// No headings; the container was emptied and flagged with the empty class
    Empty,
    /// The container received the TOC markup
    Populated,
}

/// Summary of one processed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    pub container: ContainerState,
    pub headings: usize,
    pub listed: usize,
    pub annotated: usize,
}

/// Headings and TOC container located in an HTML document
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub container: Option<ElementSpan>,
    pub root_section_id: String,
    pub headings: Vec<HeadingElement>,
}

impl ParsedDocument {
    pub fn records(&self) -> Vec<HeadingRecord> {
        self.headings.iter().map(HeadingElement::to_record).collect()
    }
}

/// Locate the TOC container, the root section id and the headings to number
pub fn parse_document(html: &str, config: &Config) -> BoxResult<ParsedDocument> {
    let container = find_element_by_id(html, &config.container_id)?;

    let root_section_id = container
        .as_ref()
        .and_then(|span| attribute(span.open_tag_str(html), "data-section-id"))
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| config.root_section_id.clone());

    let scope = match &config.content_id {
        Some(content_id) => match find_element_by_id(html, content_id)? {
            Some(span) => span.inner,
            None => {
                warn!("Content element #{} not found; no headings will be numbered", content_id);
                0..0
            }
        },
        None => 0..html.len(),
    };

    let mut headings = extract_headings(html, scope, config.max_heading_level);

    if let Some(span) = &container {
        debug!("TOC container: <{}> #{}", span.name, config.container_id);
        let before = headings.len();
        headings.retain(|h| !span.overlaps(&h.outer()));
        if headings.len() != before {
            debug!("Ignoring {} headings inside the TOC container", before - headings.len());
            for (index, heading) in headings.iter_mut().enumerate() {
                heading.sequence_index = index;
            }
        }
    }

    debug!("Root section id: {}", root_section_id);
    Ok(ParsedDocument {
        container,
        root_section_id,
        headings,
    })
}

/// Number the headings of an HTML document, mark them and install the TOC.
///
/// Returns the rewritten document. Running this on its own output yields the same document.
pub fn process_document(html: &str, config: &Config) -> BoxResult<(String, DocumentReport)> {
    let parsed = parse_document(html, config)?;

    let container = match &parsed.container {
        Some(span) => span,
        None => {
            warn!("No element with id \"{}\" found; document left unchanged", config.container_id);
            return Ok((
                html.to_string(),
                DocumentReport {
                    container: ContainerState::Missing,
                    headings: parsed.headings.len(),
                    listed: 0,
                    annotated: 0,
                },
            ));
        }
    };

    let mut ledger = AnnotationLedger::with_annotated(
        parsed.headings.iter().filter(|h| h.annotated).map(|h| h.sequence_index),
    );
    let generator = TocGenerator::new(config);
    let outcome = generator.generate(&parsed.root_section_id, &parsed.records(), &mut ledger);

    let mut edits: Vec<(Range<usize>, String)> = Vec::new();

    let report = match outcome {
        TocOutcome::Empty => {
            edits.push((
                container.open_tag.clone(),
                add_class(container.open_tag_str(html), &config.empty_class),
            ));
            edits.push((container.inner.clone(), String::new()));
            DocumentReport {
                container: ContainerState::Empty,
                headings: 0,
                listed: 0,
                annotated: 0,
            }
        }
        TocOutcome::Populated(listing) => {
            edits.push((
                container.open_tag.clone(),
                remove_class(container.open_tag_str(html), &config.empty_class),
            ));
            edits.push((container.inner.clone(), listing.markup));

            for heading in parsed.headings.iter().filter(|h| h.id_generated) {
                edits.push((
                    heading.open_tag.clone(),
                    insert_attribute(&html[heading.open_tag.clone()], "id", &heading.id),
                ));
            }

            let annotator = HeadingAnnotator::new(config.section_label.as_str());
            for annotation in &listing.annotations {
                let heading = &parsed.headings[annotation.sequence_index];
                edits.push((
                    heading.inner.clone(),
                    annotator.annotate(&html[heading.inner.clone()], &annotation.section_id),
                ));
            }

            DocumentReport {
                container: ContainerState::Populated,
                headings: listing.entries.len(),
                listed: listing
                    .entries
                    .iter()
                    .filter(|e| e.toc_depth <= config.max_toc_depth)
                    .count(),
                annotated: listing.annotations.len(),
            }
        }
    };

    info!(
        "TOC {:?}: {} headings, {} listed, {} newly annotated",
        report.container, report.headings, report.listed, report.annotated
    );

    Ok((apply_edits(html, edits), report))
}

/// Apply non-overlapping replacements, back to front so earlier offsets stay valid
fn apply_edits(html: &str, mut edits: Vec<(Range<usize>, String)>) -> String {
    edits.sort_by(|a, b| b.0.start.cmp(&a.0.start).then(b.0.end.cmp(&a.0.end)));

    let mut out = html.to_string();
    for (range, replacement) in edits {
        out.replace_range(range, &replacement);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        let mut config = Config::default();
        config.html.prefix = "<ul>".to_string();
        config.html.suffix = "</ul>".to_string();
        config.html.item = "<li><a href=\"{link}\">{section} {text}</a></li>".to_string();
        config
    }

    const PAGE: &str = r#"<html><body>
<div id="inner-toc" data-section-id="2"></div>
<div id="doc-content-inner">
<h1 id="intro">Intro</h1>
<h1>Usage</h1>
<h2 id="cli">CLI</h2>
<h1 id="faq">FAQ</h1>
</div>
</body></html>"#;

    #[test]
    fn test_process_document() {
        let (out, report) = process_document(PAGE, &config()).unwrap();

        assert_eq!(report.container, ContainerState::Populated);
        assert_eq!(report.headings, 4);
        assert_eq!(report.annotated, 4);
        assert!(out.contains(
            "<div id=\"inner-toc\" data-section-id=\"2\"><ul><li><a href=\"#intro\">2.1 Intro</a></li><li><a href=\"#usage\">2.2 Usage</a></li><li><a href=\"#cli\">2.2.1 CLI</a></li><li><a href=\"#faq\">2.3 FAQ</a></li></ul></div>"
        ));
        assert!(out.contains("<h1 id=\"usage\"><span class=\"heading-section-outer\">"));
        assert!(out.contains("<span class=\"sid-3\">1</span></span></span>CLI</h2>"));
    }

    #[test]
    fn test_depth_filter_keeps_numbering() {
        let mut config = config();
        config.max_toc_depth = 1;
        let (out, report) = process_document(PAGE, &config).unwrap();

        assert_eq!(report.listed, 3);
        assert!(!out.contains("2.2.1 CLI</a>"));
        assert!(out.contains("2.3 FAQ</a>"));
        // The filtered heading is still marked.
        assert!(out.contains("<span class=\"sid-3\">1</span></span></span>CLI</h2>"));
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let (first, _) = process_document(PAGE, &config()).unwrap();
        let (second, report) = process_document(&first, &config()).unwrap();

        assert_eq!(first, second);
        assert_eq!(report.annotated, 0);
        assert_eq!(report.headings, 4);
    }

    #[test]
    fn test_empty_document_marks_container() {
        let html = r#"<div id="inner-toc" class="toc"></div><p>No headings here.</p>"#;
        let (out, report) = process_document(html, &config()).unwrap();

        assert_eq!(report.container, ContainerState::Empty);
        assert_eq!(out, r#"<div id="inner-toc" class="toc empty-toc"></div><p>No headings here.</p>"#);
    }

    #[test]
    fn test_rerun_without_headings_clears_stale_toc() {
        let (first, _) = process_document(PAGE, &config()).unwrap();
        let start = first.find("<div id=\"doc-content-inner\">").unwrap();
        let end = first.find("</body>").unwrap();
        let stripped = format!("{}{}", &first[..start], &first[end..]);

        let (second, report) = process_document(&stripped, &config()).unwrap();
        assert_eq!(report.container, ContainerState::Empty);
        assert!(second.contains(
            "<div id=\"inner-toc\" data-section-id=\"2\" class=\"empty-toc\"></div>"
        ));
        assert!(!second.contains("href="));
    }

    #[test]
    fn test_rerun_with_headings_drops_empty_class() {
        let html = r#"<div id="inner-toc" class="toc"></div>"#;
        let (empty, _) = process_document(html, &config()).unwrap();
        assert_eq!(empty, r#"<div id="inner-toc" class="toc empty-toc"></div>"#);

        let with_heading = format!("{}<h1 id=\"new\">New</h1>", empty);
        let (out, report) = process_document(&with_heading, &config()).unwrap();
        assert_eq!(report.container, ContainerState::Populated);
        assert!(out.starts_with(
            r##"<div id="inner-toc" class="toc"><ul><li><a href="#new">1.1 New</a></li></ul></div>"##
        ));
    }

    #[test]
    fn test_missing_container_leaves_document() {
        let html = "<h1>Title</h1>";
        let (out, report) = process_document(html, &config()).unwrap();
        assert_eq!(report.container, ContainerState::Missing);
        assert_eq!(out, html);
    }

    #[test]
    fn test_content_scope() {
        let mut config = config();
        config.content_id = Some("doc-content-inner".to_string());
        let html = r#"<h1>Site</h1><div id="inner-toc"></div><div id="doc-content-inner"><h1>Only</h1></div>"#;

        let parsed = parse_document(html, &config).unwrap();
        assert_eq!(parsed.root_section_id, "1");
        let texts: Vec<String> = parsed.headings.iter().map(|h| h.text.clone()).collect();
        assert_eq!(texts, vec!["Only".to_string()]);
    }

    #[test]
    fn test_missing_content_scope_gives_empty_state() {
        let mut config = config();
        config.content_id = Some("absent".to_string());
        let html = r#"<div id="inner-toc"></div><h1>Title</h1>"#;

        let (out, report) = process_document(html, &config).unwrap();
        assert_eq!(report.container, ContainerState::Empty);
        assert!(out.starts_with(r#"<div id="inner-toc" class="empty-toc">"#));
    }

    #[test]
    fn test_headings_inside_container_ignored() {
        let html = r#"<div id="inner-toc"><h2>Contents</h2></div><h1>Real</h1>"#;
        let parsed = parse_document(html, &config()).unwrap();
        assert_eq!(parsed.headings.len(), 1);
        assert_eq!(parsed.headings[0].text, "Real");
        assert_eq!(parsed.headings[0].sequence_index, 0);
    }
}
