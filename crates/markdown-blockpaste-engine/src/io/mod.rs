use crate::editing::Document;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid draft file {path}: {source}")]
    InvalidDraft {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid drafts directory: {0}")]
    InvalidDraftsDir(String),
}

/// Read a draft document (JSON) relative to the drafts directory
pub fn read_draft(relative_path: &RelativePath, drafts_root: &Path) -> Result<Document, IoError> {
    let absolute_path = relative_path.to_path(drafts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let content = fs::read_to_string(&absolute_path)?;
    Document::from_json(&content).map_err(|source| IoError::InvalidDraft {
        path: absolute_path,
        source,
    })
}

/// Read a draft, or start an empty document if it does not exist yet
pub fn read_or_create_draft(
    relative_path: &RelativePath,
    drafts_root: &Path,
) -> Result<Document, IoError> {
    match read_draft(relative_path, drafts_root) {
        Err(IoError::NotFound(_)) => Ok(Document::new()),
        other => other,
    }
}

/// Write a draft document as pretty JSON
pub fn write_draft(
    relative_path: &RelativePath,
    drafts_root: &Path,
    document: &Document,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(drafts_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = document.to_json().map_err(|source| IoError::InvalidDraft {
        path: absolute_path.clone(),
        source,
    })?;
    fs::write(&absolute_path, content).map_err(IoError::Io)
}

pub fn validate_drafts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDraftsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
