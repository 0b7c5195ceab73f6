pub mod container;
pub mod markdown;
pub mod parser;
pub mod rewrite;

use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::toc::heading::{records_from_json, HeadingRecord};
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs::{extension_of, read_file};

pub use rewrite::{parse_document, process_document, ContainerState};

/// Kind of input, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Html,
    Markdown,
    /// JSON array of `{tag, text, elementId}` objects
    HeadingList,
}

impl SourceKind {
    pub fn from_path<P: AsRef<Path>>(path: P) -> BoxResult<Self> {
        match extension_of(&path).as_deref() {
            Some("html") | Some("htm") => Ok(SourceKind::Html),
            Some("md") | Some("markdown") => Ok(SourceKind::Markdown),
            Some("json") => Ok(SourceKind::HeadingList),
            _ => Err(TocError::Document(format!(
                "Unsupported input file: {}",
                path.as_ref().display()
            ))
            .into()),
        }
    }
}

/// Ordered headings plus the root id they are numbered under
#[derive(Debug, Clone)]
pub struct HeadingSource {
    pub root_section_id: String,
    pub records: Vec<HeadingRecord>,
}

/// Read a document as HTML, rendering Markdown first
pub fn read_html<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let content = read_file(&path)?;

    match SourceKind::from_path(&path)? {
        SourceKind::Html => Ok(content),
        SourceKind::Markdown => {
            debug!("Rendering markdown {}", path.as_ref().display());
            Ok(markdown::render_markdown(&content))
        }
        SourceKind::HeadingList => Err(TocError::Document(format!(
            "{} is a heading list, not a document",
            path.as_ref().display()
        ))
        .into()),
    }
}

/// Load the headings of any supported input
pub fn load_headings<P: AsRef<Path>>(path: P, config: &Config) -> BoxResult<HeadingSource> {
    if SourceKind::from_path(&path)? == SourceKind::HeadingList {
        let records = records_from_json(&read_file(&path)?)?;
        return Ok(HeadingSource {
            root_section_id: config.root_section_id.clone(),
            records,
        });
    }

    let html = read_html(&path)?;
    let parsed = parse_document(&html, config)?;

    Ok(HeadingSource {
        records: parsed.records(),
        root_section_id: parsed.root_section_id,
    })
}
