//! Canonical file inputs.
//!
//! Every way a file can arrive (local path, in-memory bytes, structured
//! upload, remote URL) is one variant of [`Source`], and all of them
//! normalize into the same [`FileDescriptor`] consumed by storage backends.

mod descriptor;

pub use descriptor::FileDescriptor;

use crate::acquire::{self, AcquireError, Scope};
use crate::config::RetryConfig;
use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};

/// A file input in one of its recognized shapes. Each variant carries only
/// the fields relevant to that origin.
#[derive(Debug, Clone)]
pub enum Source {
    /// File already present on local storage.
    Local { path: PathBuf },
    /// In-memory bytes with a caller-supplied display name.
    Memory { file_name: String, data: Vec<u8> },
    /// Remote URL to download; the scope may override the candidate name.
    Remote { url: String, scope: Scope },
    /// Structured upload: display name plus an already-materialized path
    /// (e.g. a multipart upload handoff).
    Upload { file_name: String, path: PathBuf },
}

impl Source {
    /// Classifies a raw string input by shape: http(s) URLs become
    /// [`Source::Remote`], anything else a [`Source::Local`] path. Empty
    /// input is rejected. Pure; no I/O happens until normalization.
    pub fn from_raw(raw: &str) -> Result<Self, AcquireError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AcquireError::InvalidInput("empty input".to_string()));
        }
        match url::Url::parse(trimmed) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(Source::Remote {
                url: trimmed.to_string(),
                scope: Scope::default(),
            }),
            _ => Ok(Source::Local {
                path: PathBuf::from(trimmed),
            }),
        }
    }

    /// Normalizes this input into a [`FileDescriptor`].
    ///
    /// Remote inputs run the full acquisition pipeline (and so may block for
    /// network retries); the other variants are local I/O glue.
    pub fn into_descriptor(self, config: &RetryConfig) -> Result<FileDescriptor, AcquireError> {
        match self {
            Source::Local { path } => descriptor_from_path(&path, None),
            Source::Upload { file_name, path } => descriptor_from_path(&path, Some(file_name)),
            Source::Memory { file_name, data } => Ok(FileDescriptor::from_binary(file_name, data)),
            Source::Remote { url, scope } => acquire::acquire(&url, &scope, config),
        }
    }
}

fn descriptor_from_path(
    path: &Path,
    file_name: Option<String>,
) -> Result<FileDescriptor, AcquireError> {
    if !path.exists() {
        return Err(AcquireError::InvalidInput(format!(
            "no such file: {}",
            path.display()
        )));
    }
    let absolute = fs::canonicalize(path).map_err(|source| AcquireError::LocalIo {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = match file_name {
        Some(name) => name,
        None => absolute
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                AcquireError::InvalidInput(format!("not a file: {}", path.display()))
            })?,
    };

    let extension = naming::extension_of(&file_name).map(str::to_string);
    let mime_type = extension
        .as_deref()
        .and_then(naming::mime_registry::first_mime_for);

    Ok(FileDescriptor {
        local_path: Some(absolute),
        file_name,
        binary: None,
        headers: Vec::new(),
        mime_type,
        extension,
    })
}
