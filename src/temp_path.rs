//! Collision-resistant temporary path naming.

use data_encoding::BASE32_NOPAD;
use rand::rngs::OsRng;
use rand::RngCore;
use std::path::PathBuf;

/// Names (but does not create) a file in the system temp directory.
///
/// The base name is 20 bytes from the OS CSPRNG, base32-encoded without
/// padding, concatenated with `extension_hint` (which includes its leading
/// dot, e.g. `".png"`, or is empty). 160 bits of entropy per call is the
/// collision-avoidance mechanism; no existence check is performed.
pub fn generate(extension_hint: &str) -> PathBuf {
    let mut entropy = [0u8; 20];
    OsRng.fill_bytes(&mut entropy);
    let base = BASE32_NOPAD.encode(&entropy).to_ascii_lowercase();
    std::env::temp_dir().join(format!("{}{}", base, extension_hint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn appends_extension_hint() {
        let p = generate(".png");
        let name = p.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with(".png"));
        // 20 bytes -> 32 base32 chars, no padding.
        assert_eq!(name.len(), 32 + 4);
    }

    #[test]
    fn empty_hint_gives_bare_name() {
        let p = generate("");
        let name = p.file_name().unwrap().to_str().unwrap();
        assert_eq!(name.len(), 32);
        assert!(name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(!name.contains('='));
    }

    #[test]
    fn lives_in_system_temp_dir() {
        let p = generate(".bin");
        assert_eq!(p.parent().unwrap(), std::env::temp_dir());
        assert!(p.is_absolute());
    }

    #[test]
    fn no_collisions_across_many_samples() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate(".png")), "duplicate temp path");
        }
    }
}
