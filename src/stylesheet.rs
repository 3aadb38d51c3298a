//! Extraction of `@define-color` declarations from a walker stylesheet.
//!
//! Only one line shape is recognized:
//!
//! ```text
//! @define-color <name> <value>;
//! ```
//!
//! with the keyword matched case-insensitively. Everything else (comments,
//! rules, several declarations on one line, trailing content after the
//! semicolon) is skipped without complaint.

use regex::Regex;
use std::{collections::HashMap, fs, path::Path, sync::LazyLock};
use tracing::trace;

use crate::error::{RasifyError, RasifyResult};

static DEFINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*@define-color\s+(?P<name>[-\w]+)\s+(?P<value>[^;]+)\s*;\s*$")
        .expect("define-color pattern is valid")
});

/// Color declarations keyed by lowercased name, holding raw trimmed values
pub type Declarations = HashMap<String, String>;

/// Matches a single stylesheet line against the declaration shape.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let caps = DEFINE_RE.captures(line)?;
    let name = caps["name"].trim().to_lowercase();
    let value = caps["value"].trim().to_string();
    Some((name, value))
}

/// Collects declarations from stylesheet text; later lines win on duplicates.
pub fn extract_str(text: &str) -> Declarations {
    let mut colors = Declarations::new();
    for line in text.split(['\n', '\r']) {
        if let Some((name, value)) = parse_line(line) {
            trace!(%name, %value, "color declaration");
            colors.insert(name, value);
        }
    }
    colors
}

/// Reads a stylesheet from disk and extracts its declarations.
///
/// Invalid UTF-8 sequences are replaced rather than failing the read.
pub fn extract(path: &Path) -> RasifyResult<Declarations> {
    let bytes = fs::read(path).map_err(|e| RasifyError::read(path, e))?;
    Ok(extract_str(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("@define-color background #1e1e2e;"),
            Some(("background".to_string(), "#1e1e2e".to_string()))
        );
        assert_eq!(
            parse_line("   @DEFINE-COLOR Selected-Text   rgba(1, 2, 3, 0.5)  ;   "),
            Some(("selected-text".to_string(), "rgba(1, 2, 3, 0.5)".to_string()))
        );
        assert_eq!(
            parse_line("@define-color my_color red;"),
            Some(("my_color".to_string(), "red".to_string()))
        );
    }

    #[test]
    fn test_parse_line_rejects_other_shapes() {
        for line in [
            "",
            "/* @define-color background #000000; */",
            "@define-color background #000000",
            "@define-color background #000000; /* trailing */",
            "@define-color a #000000; @define-color b #ffffff;",
            "@define-color background;",
            "@define-colorbackground #000000;",
            "#window { background: @background; }",
        ] {
            assert_eq!(parse_line(line), None, "line {line:?}");
        }
    }

    #[test]
    fn test_extract_last_declaration_wins() {
        let css = "\
@define-color text #cdd6f4;
window { color: @text; }
@define-color TEXT #ffffff;\r
@define-color base #181825;
";
        let colors = extract_str(css);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors["text"], "#ffffff");
        assert_eq!(colors["base"], "#181825");
    }

    #[test]
    fn test_extract_carriage_return_line_endings() {
        let colors = extract_str("@define-color background #111111;\r@define-color text #222222;\r");
        assert_eq!(colors.len(), 2);
        assert_eq!(colors["background"], "#111111");
        assert_eq!(colors["text"], "#222222");
    }

    #[test]
    fn test_extract_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walker.css");
        let mut bytes = b"@define-color border #89b4fa;\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"@define-color urgent #f38ba8;\n");
        fs::write(&path, bytes).unwrap();

        let colors = extract(&path).unwrap();
        assert_eq!(colors["border"], "#89b4fa");
        assert_eq!(colors["urgent"], "#f38ba8");
    }

    #[test]
    fn test_extract_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(&dir.path().join("walker.css")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
