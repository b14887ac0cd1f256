//! Supported language tags
//!
//! The review pipeline accepts any non-empty language tag; this table only
//! drives extension detection and the selector shown by the CLI.

use std::path::Path;

/// A known programming language tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Tag sent to the completion service and stored in history
    pub tag: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// File extensions that map to this language
    pub extensions: &'static [&'static str],
}

/// Languages offered by the selector, in display order
pub const LANGUAGES: &[Language] = &[
    Language { tag: "javascript", label: "JavaScript", extensions: &["js", "jsx", "mjs", "cjs"] },
    Language { tag: "typescript", label: "TypeScript", extensions: &["ts", "tsx"] },
    Language { tag: "python", label: "Python", extensions: &["py"] },
    Language { tag: "java", label: "Java", extensions: &["java"] },
    Language { tag: "cpp", label: "C++", extensions: &["cpp", "cc", "cxx", "hpp"] },
    Language { tag: "go", label: "Go", extensions: &["go"] },
    Language { tag: "rust", label: "Rust", extensions: &["rs"] },
    Language { tag: "php", label: "PHP", extensions: &["php"] },
    Language { tag: "ruby", label: "Ruby", extensions: &["rb"] },
    Language { tag: "swift", label: "Swift", extensions: &["swift"] },
];

/// Detect a language tag from a file path's extension
pub fn detect_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    LANGUAGES
        .iter()
        .find(|lang| lang.extensions.contains(&ext.as_str()))
        .map(|lang| lang.tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_extensions() {
        assert_eq!(detect_from_path(Path::new("main.rs")), Some("rust"));
        assert_eq!(detect_from_path(Path::new("app/index.tsx")), Some("typescript"));
        assert_eq!(detect_from_path(Path::new("lib.CC")), Some("cpp"));
    }

    #[test]
    fn test_detect_unknown_extension() {
        assert_eq!(detect_from_path(Path::new("notes.txt")), None);
        assert_eq!(detect_from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_tags_are_unique() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in LANGUAGES.iter().skip(i + 1) {
                assert_ne!(a.tag, b.tag);
            }
        }
    }
}
