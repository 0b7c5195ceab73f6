use log::{debug, info};

use crate::config::Config;
use crate::toc::annotator::AnnotationLedger;
use crate::toc::heading::HeadingRecord;
use crate::toc::numberer::CounterState;
use crate::toc::renderer::{render_toc, TocEntry, TocWrapper};
use crate::toc::template::TocTemplate;

/// A heading that should receive a section marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub sequence_index: usize,
    pub section_id: String,
}

/// A rendered table of contents with everything needed to update the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocListing {
    /// Container markup: prefix, the retained items, suffix
    pub markup: String,
    /// Every numbered heading, including those filtered out of `markup`
    pub entries: Vec<TocEntry>,
    /// Headings to mark, in document order
    pub annotations: Vec<Annotation>,
}

/// Result of one TOC generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocOutcome {
    /// No headings; the container should only be flagged as empty
    Empty,
    Populated(TocListing),
}

/// Drives headings through numbering, annotation requests and rendering
pub struct TocGenerator<'a> {
    config: &'a Config,
    template: TocTemplate,
}

impl<'a> TocGenerator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            template: TocTemplate::parse(&config.html.item),
        }
    }

    /// Number `headings` under `root_section_id` and render the TOC.
    ///
    /// Every heading is offered to `ledger` for annotation regardless of the depth filter;
    /// headings the ledger has already seen are skipped.
    pub fn generate(
        &self,
        root_section_id: &str,
        headings: &[HeadingRecord],
        ledger: &mut AnnotationLedger,
    ) -> TocOutcome {
        if headings.is_empty() {
            info!("No headings found; leaving the TOC empty");
            return TocOutcome::Empty;
        }

        let mut state = CounterState::new(root_section_id);
        let mut entries = Vec::with_capacity(headings.len());
        let mut annotations = Vec::new();

        for heading in headings {
            let (next, meta) = state.advance(heading.tag_depth);
            state = next;

            if ledger.claim(heading.sequence_index) {
                annotations.push(Annotation {
                    sequence_index: heading.sequence_index,
                    section_id: meta.section_id.clone(),
                });
            } else {
                debug!("Heading {} is already annotated", heading.sequence_index);
            }

            entries.push(TocEntry {
                section_id: meta.section_id,
                toc_depth: meta.toc_depth,
                text: heading.text.clone(),
                element_id: heading.element_id.clone(),
                tag: heading.tag.clone(),
                sequence_index: heading.sequence_index,
            });
        }

        let wrapper = TocWrapper {
            prefix: &self.config.html.prefix,
            suffix: &self.config.html.suffix,
        };
        let markup = render_toc(&entries, self.config.max_toc_depth, &self.template, &wrapper);

        let shown = entries
            .iter()
            .filter(|e| e.toc_depth <= self.config.max_toc_depth)
            .count();
        info!(
            "Numbered {} headings, {} listed in the TOC",
            entries.len(),
            shown
        );

        TocOutcome::Populated(TocListing {
            markup,
            entries,
            annotations,
        })
    }
}
