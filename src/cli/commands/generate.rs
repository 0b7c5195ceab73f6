use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::document::{process_document, read_html, ContainerState, SourceKind};
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs::{list_documents, write_file};

/// Handle the generate command
pub fn handle_generate_command(input: &Path, output: Option<&PathBuf>, config: &Config) -> BoxResult<()> {
    if input.is_dir() {
        let documents = list_documents(input)?;
        if documents.is_empty() {
            warn!("No HTML or Markdown documents found in {}", input.display());
            return Ok(());
        }

        info!("Processing {} documents in {}", documents.len(), input.display());
        for document in &documents {
            let relative = document.strip_prefix(input).unwrap_or(document.as_path());
            let target = match output {
                Some(dir) => dir.join(relative),
                None => document.clone(),
            };
            generate_file(document, &output_path(document, &target)?, config)?;
        }
        return Ok(());
    }

    if !input.exists() {
        return Err(TocError::Document(format!("Input not found: {}", input.display())).into());
    }

    let target = match output {
        Some(path) => path.clone(),
        None => output_path(input, input)?,
    };
    generate_file(input, &target, config)
}

/// Output location for `source`: Markdown becomes HTML next to the requested path
fn output_path(source: &Path, requested: &Path) -> BoxResult<PathBuf> {
    match SourceKind::from_path(source)? {
        SourceKind::Markdown => Ok(requested.with_extension("html")),
        _ => Ok(requested.to_path_buf()),
    }
}

/// Process one document and write the result
fn generate_file(source: &Path, target: &Path, config: &Config) -> BoxResult<()> {
    let html = read_html(source)?;
    let (rewritten, report) = process_document(&html, config)?;

    match report.container {
        ContainerState::Missing => {
            warn!("{}: no TOC container, skipped", source.display());
            // Markdown is still rendered so the output set is complete.
            if target != source {
                write_file(target, &rewritten)?;
            }
        }
        ContainerState::Empty => {
            info!("{}: no headings, container marked empty", source.display());
            write_file(target, &rewritten)?;
        }
        ContainerState::Populated => {
            info!(
                "{}: {} headings numbered, {} in TOC -> {}",
                source.display(),
                report.headings,
                report.listed,
                target.display()
            );
            write_file(target, &rewritten)?;
        }
    }

    Ok(())
}
