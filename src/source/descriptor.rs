//! The canonical output value consumed by storage backends.

use crate::acquire::AcquireError;
use crate::naming;
use crate::temp_path;
use std::fs;
use std::path::PathBuf;

/// Canonical representation of a normalized file input.
///
/// Exactly one of `local_path` / `binary` is meaningfully populated at
/// construction. A descriptor is immutable once built except for the one
/// lazy [`materialize`](FileDescriptor::materialize) step, which consumes
/// the binary form and produces the on-disk form. Whoever ends up holding a
/// descriptor with `local_path` set owns that file; this crate never deletes
/// temp files itself.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    /// Absolute path to the materialized bytes, when on local storage.
    pub local_path: Option<PathBuf>,
    /// Resolved display name; always present.
    pub file_name: String,
    /// In-memory bytes, only for binary-origin files not yet materialized.
    pub binary: Option<Vec<u8>>,
    /// Final HTTP response headers in wire order; empty for non-remote
    /// origins.
    pub headers: Vec<(String, String)>,
    pub mime_type: Option<String>,
    /// Resolved extension without the leading dot.
    pub extension: Option<String>,
}

impl FileDescriptor {
    /// Descriptor for in-memory bytes. Extension and MIME type come from the
    /// display name alone; there is no content to consult.
    pub fn from_binary(file_name: String, data: Vec<u8>) -> Self {
        let extension = naming::extension_of(&file_name).map(str::to_string);
        let mime_type = extension
            .as_deref()
            .and_then(naming::mime_registry::first_mime_for);
        Self {
            local_path: None,
            file_name,
            binary: Some(data),
            headers: Vec::new(),
            mime_type,
            extension,
        }
    }

    /// True once the bytes exist on local storage.
    pub fn is_materialized(&self) -> bool {
        self.local_path.is_some()
    }

    /// Writes a binary-origin descriptor's bytes to a fresh temp path,
    /// returning the materialized descriptor. Ownership of the temp file
    /// transfers to the caller, who is responsible for eventual deletion.
    /// Already-materialized descriptors pass through unchanged.
    pub fn materialize(mut self) -> Result<Self, AcquireError> {
        if self.local_path.is_some() {
            return Ok(self);
        }
        let data = self.binary.take().ok_or_else(|| {
            AcquireError::InvalidInput(
                "descriptor has neither bytes nor a local path".to_string(),
            )
        })?;
        let hint = self
            .extension
            .as_deref()
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();
        let target = temp_path::generate(&hint);
        fs::write(&target, &data).map_err(|source| AcquireError::LocalIo {
            path: target.clone(),
            source,
        })?;
        self.local_path = Some(target);
        Ok(self)
    }
}
