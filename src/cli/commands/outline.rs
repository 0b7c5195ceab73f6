use std::path::Path;

use crate::cli::types::OutlineFormat;
use crate::config::Config;
use crate::document::load_headings;
use crate::toc::renderer::TocEntry;
use crate::toc::{AnnotationLedger, TocGenerator, TocOutcome};
use crate::utils::error::BoxResult;

/// Handle the outline command
pub fn handle_outline_command(input: &Path, format: OutlineFormat, config: &Config) -> BoxResult<()> {
    let source = load_headings(input, config)?;
    let mut ledger = AnnotationLedger::new();

    let entries = match TocGenerator::new(config).generate(&source.root_section_id, &source.records, &mut ledger) {
        TocOutcome::Empty => Vec::new(),
        TocOutcome::Populated(listing) => listing.entries,
    };

    match format {
        OutlineFormat::Text => print!("{}", format_text(&entries)),
        OutlineFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }

    Ok(())
}

/// One line per heading, indented by TOC depth
fn format_text(entries: &[TocEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}{} {}\n",
                "  ".repeat(entry.toc_depth.saturating_sub(1)),
                entry.section_id,
                html_escape::decode_html_entities(&entry.text)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(section_id: &str, toc_depth: usize, text: &str) -> TocEntry {
        TocEntry {
            section_id: section_id.to_string(),
            toc_depth,
            text: text.to_string(),
            element_id: String::new(),
            tag: "H1".to_string(),
            sequence_index: 0,
        }
    }

    #[test]
    fn test_format_text() {
        let text = format_text(&[
            entry("1.1", 1, "Intro"),
            entry("1.1.1", 2, "Q &amp; A"),
        ]);
        assert_eq!(text, "1.1 Intro\n  1.1.1 Q & A\n");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(vec![entry("1.1", 1, "Intro")]).unwrap();
        assert_eq!(json[0]["sectionId"], "1.1");
        assert_eq!(json[0]["tocDepth"], 1);
    }
}
