//! Filename and extension resolution against the MIME registry.
//!
//! Decides the final display name for an acquired file: a filename's own
//! extension wins when it is registered for some MIME type, otherwise an
//! extension is derived from the response's content type.

pub mod mime_registry;

mod path;

pub use path::candidate_from_url;

/// Extension of `name`: the substring after the last `.`, case as given.
/// A trailing dot counts as no extension.
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// Resolves the final `(file_name, extension)` for `filename` and `mime_type`.
///
/// If the filename carries a registered extension it is kept as-is. Otherwise
/// the first extension registered for `mime_type` is appended; an unregistered
/// original extension stays embedded in the name (`photo.qqq` + `image/png`
/// becomes `photo.qqq.png`). Returns `None` when the MIME type has no
/// registered extensions; there is no fallback extension.
pub fn resolve(filename: &str, mime_type: &str) -> Option<(String, String)> {
    if let Some(ext) = extension_of(filename) {
        if mime_registry::has_registered_extension(ext) {
            return Some((filename.to_string(), ext.to_string()));
        }
    }
    let derived = mime_registry::first_extension_for(mime_type)?;
    Some((format!("{}.{}", filename, derived), derived.to_string()))
}
