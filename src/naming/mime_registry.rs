//! Thin wrapper over the process-wide MIME type registry.
//!
//! Backed by `mime_guess`'s static IANA media-type table; deterministic and
//! never mutated.

/// True if `ext` (no leading dot) is a registered extension for some MIME type.
pub fn has_registered_extension(ext: &str) -> bool {
    !mime_guess::from_ext(ext).is_empty()
}

/// First extension registered for `mime_type`, if any.
pub fn first_extension_for(mime_type: &str) -> Option<&'static str> {
    mime_guess::get_mime_extensions_str(mime_type)
        .and_then(|exts| exts.first())
        .copied()
}

/// First MIME type registered for `ext`, if any. Used when a file arrives
/// with a name but no content type of its own (local and in-memory origins).
pub fn first_mime_for(ext: &str) -> Option<String> {
    mime_guess::from_ext(ext)
        .first_raw()
        .map(|m| m.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_extensions_registered() {
        assert!(has_registered_extension("jpg"));
        assert!(has_registered_extension("png"));
        assert!(has_registered_extension("pdf"));
        assert!(!has_registered_extension("qqq"));
        assert!(!has_registered_extension(""));
    }

    #[test]
    fn extension_lookup_by_mime() {
        assert_eq!(first_extension_for("image/png"), Some("png"));
        assert!(first_extension_for("image/jpeg").is_some());
        assert_eq!(first_extension_for("application/x-zzz-unknown"), None);
        assert_eq!(first_extension_for("not a mime"), None);
    }

    #[test]
    fn mime_lookup_by_extension() {
        assert_eq!(first_mime_for("png").as_deref(), Some("image/png"));
        assert!(first_mime_for("qqq").is_none());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(has_registered_extension("JPG"));
        assert_eq!(first_extension_for("Image/PNG"), Some("png"));
    }
}
