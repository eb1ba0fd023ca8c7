//! Candidate filename derivation from a URL path.

/// Base name used when the URL path yields nothing usable. Carries no
/// extension so the MIME-derived one lands cleanly during resolution.
const DEFAULT_BASENAME: &str = "download";

/// Derives the candidate filename for an acquisition from `url`.
///
/// Takes the last non-empty path segment, lower-cased and sanitized for the
/// local filesystem. Falls back to `"download"` for root or empty paths.
///
/// # Examples
///
/// - `https://example.com/images/Cat.JPG` → `"cat.jpg"`
/// - `https://example.com/` → `"download"`
pub fn candidate_from_url(url: &url::Url) -> String {
    let segment = url
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .last()
        .unwrap_or("");

    let cleaned = sanitize(&segment.to_lowercase());
    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        DEFAULT_BASENAME.to_string()
    } else {
        cleaned
    }
}

/// Replaces path separators, NUL, and control characters with `_` and trims
/// leading/trailing dots and spaces. Candidate names come straight off the
/// wire; everything downstream assumes they are safe path components.
fn sanitize(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    replaced
        .trim_matches(|c| c == ' ' || c == '.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(raw: &str) -> String {
        candidate_from_url(&url::Url::parse(raw).unwrap())
    }

    #[test]
    fn last_segment_lowercased() {
        assert_eq!(candidate("https://example.com/images/Cat.JPG"), "cat.jpg");
        assert_eq!(candidate("https://example.com/a/b/file.deb"), "file.deb");
        assert_eq!(candidate("https://example.com/single"), "single");
    }

    #[test]
    fn query_ignored() {
        assert_eq!(
            candidate("https://example.com/file.zip?token=abc"),
            "file.zip"
        );
    }

    #[test]
    fn root_or_empty_falls_back() {
        assert_eq!(candidate("https://example.com/"), "download");
        assert_eq!(candidate("https://example.com"), "download");
        assert_eq!(candidate("https://example.com/.."), "download");
    }

    #[test]
    fn unsafe_characters_replaced() {
        assert_eq!(candidate("https://example.com/a%2Fb"), "a%2fb");
        assert_eq!(
            sanitize("with\u{0007}bell.txt"),
            "with_bell.txt"
        );
        assert_eq!(sanitize("..hidden.."), "hidden");
    }
}
