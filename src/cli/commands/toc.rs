use log::info;
use std::path::Path;

use crate::config::Config;
use crate::document::load_headings;
use crate::toc::{AnnotationLedger, TocGenerator, TocOutcome};
use crate::utils::error::BoxResult;

/// Handle the toc command
pub fn handle_toc_command(input: &Path, config: &Config) -> BoxResult<()> {
    if let Some(markup) = render_toc_for(input, config)? {
        println!("{}", markup);
    }
    Ok(())
}

/// Rendered TOC markup for an input, or `None` when it has no headings
fn render_toc_for(input: &Path, config: &Config) -> BoxResult<Option<String>> {
    let source = load_headings(input, config)?;
    let mut ledger = AnnotationLedger::new();

    match TocGenerator::new(config).generate(&source.root_section_id, &source.records, &mut ledger) {
        TocOutcome::Empty => {
            info!("{} has no headings; no TOC produced", input.display());
            Ok(None)
        }
        TocOutcome::Populated(listing) => Ok(Some(listing.markup)),
    }
}
