use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::utils::error::{BoxResult, TocError};

/// File extensions that the document pipeline knows how to read
pub const DOCUMENT_EXTENSIONS: [&str; 4] = ["html", "htm", "md", "markdown"];

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref()).map_err(TocError::Io)?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref()).map_err(TocError::Io)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(TocError::Io)?;
    Ok(contents)
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref()).map_err(TocError::Io)?;
    file.write_all(contents.as_bytes()).map_err(TocError::Io)?;
    Ok(())
}

/// Lowercased extension of a path, if any
pub fn extension_of<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Whether the path names a document the pipeline can process
pub fn is_document<P: AsRef<Path>>(path: P) -> bool {
    extension_of(path)
        .map(|ext| DOCUMENT_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// List all processable documents below a directory, sorted by path
pub fn list_documents<P: AsRef<Path>>(dir: P) -> BoxResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
        let entry = entry.map_err(|e| TocError::Io(e.into()))?;
        if entry.file_type().is_file() && is_document(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
