//! File-to-file conversion.
//!
//! Reads one markdown document, base64-encodes it, renders the fixed page
//! shell around it, and writes the result next to the input. No markdown
//! parsing happens here; the document text is an opaque character sequence
//! until the browser decodes it at view time.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use crate::frontmatter;
use crate::template;

/// Per-file conversion failure. A failed file never stops the batch.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path does not reference an existing file. Nothing was read
    /// or written.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// The input exists but reading it or writing the output failed.
    #[error("Error converting '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The document title shown in the browser tab: the final path component,
/// including extension. Falls back to the full path string for inputs with
/// no final component.
pub fn derive_title(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// The output path for an input path.
///
/// A trailing `.md` extension (any case) is replaced with `.html`. Every
/// other input gets `.html` appended, so the source file is never silently
/// overwritten.
pub fn derive_output_path(input: &Path) -> PathBuf {
    match input.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("md") => input.with_extension("html"),
        _ => {
            let mut name = input.as_os_str().to_os_string();
            name.push(".html");
            PathBuf::from(name)
        }
    }
}

/// Convert one markdown file into a standalone HTML document.
///
/// Reads the full input text, encodes it so it round-trips byte-for-byte,
/// renders the page shell with the derived title, and writes the result to
/// the derived output path, overwriting any existing file there.
///
/// Returns the written output path.
pub fn convert(input: &Path) -> Result<PathBuf, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::NotFound {
            path: input.to_path_buf(),
        });
    }

    let text = fs::read_to_string(input).map_err(|source| ConvertError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    frontmatter::lint(input, &text);

    let payload = STANDARD.encode(text.as_bytes());
    let title = derive_title(input);
    let page = template::render_page(&title, &payload);

    let output = derive_output_path(input);
    fs::write(&output, page).map_err(|source| ConvertError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    Ok(output)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_final_path_component() {
        assert_eq!(derive_title(Path::new("notes.md")), "notes.md");
        assert_eq!(derive_title(Path::new("docs/guide/notes.md")), "notes.md");
        assert_eq!(derive_title(Path::new("/abs/path/readme.MD")), "readme.MD");
    }

    #[test]
    fn title_derivation_is_idempotent() {
        let title = derive_title(Path::new("docs/notes.md"));
        assert_eq!(derive_title(Path::new(&title)), title);
    }

    #[test]
    fn output_path_replaces_md_extension() {
        assert_eq!(
            derive_output_path(Path::new("notes.md")),
            PathBuf::from("notes.html")
        );
        assert_eq!(
            derive_output_path(Path::new("docs/guide/notes.md")),
            PathBuf::from("docs/guide/notes.html")
        );
    }

    #[test]
    fn output_path_extension_match_is_case_insensitive() {
        assert_eq!(
            derive_output_path(Path::new("NOTES.MD")),
            PathBuf::from("NOTES.html")
        );
        assert_eq!(
            derive_output_path(Path::new("notes.mD")),
            PathBuf::from("notes.html")
        );
    }

    #[test]
    fn output_path_appends_for_other_extensions() {
        assert_eq!(
            derive_output_path(Path::new("notes.txt")),
            PathBuf::from("notes.txt.html")
        );
        assert_eq!(
            derive_output_path(Path::new("README")),
            PathBuf::from("README.html")
        );
    }

    #[test]
    fn encoding_round_trips() {
        let inputs = [
            "",
            "# Hello",
            "héllo 世界 🚀",
            "---\ntitle: x\n---\nBody with ---\n",
            "quote \" backslash \\ `tick`\r\nCRLF line",
        ];
        for text in inputs {
            let payload = STANDARD.encode(text.as_bytes());
            let decoded = STANDARD.decode(payload).expect("valid base64");
            assert_eq!(decoded, text.as_bytes(), "round-trip failed for {text:?}");
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = tempfile::tempdir().expect("create tempdir");
        let missing = tmp.path().join("absent.md");
        let err = convert(&missing).expect_err("missing input must fail");
        assert!(matches!(err, ConvertError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            format!("File not found: {}", missing.display())
        );
        // Nothing may be written on failure.
        assert!(!tmp.path().join("absent.html").exists());
    }

    #[test]
    fn convert_writes_decodable_output() {
        let tmp = tempfile::tempdir().expect("create tempdir");
        let input = tmp.path().join("notes.md");
        fs::write(&input, "# Hello").expect("write input");

        let output = convert(&input).expect("conversion succeeds");
        assert_eq!(output, tmp.path().join("notes.html"));

        let page = fs::read_to_string(&output).expect("read output");
        assert!(page.contains("<title>notes.md</title>"));

        let marker = "const ENCODED_DOCUMENT = \"";
        let start = page.find(marker).expect("payload present") + marker.len();
        let end = page[start..].find('"').expect("terminated") + start;
        let decoded = STANDARD.decode(&page[start..end]).expect("valid base64");
        assert_eq!(decoded, b"# Hello");
    }

    #[test]
    fn convert_overwrites_existing_output() {
        let tmp = tempfile::tempdir().expect("create tempdir");
        let input = tmp.path().join("notes.md");
        fs::write(&input, "# One").expect("write input");
        let output = convert(&input).expect("first conversion");
        let first = fs::read(&output).expect("read first output");

        fs::write(&output, "stale content").expect("clobber output");
        convert(&input).expect("second conversion");
        let second = fs::read(&output).expect("read second output");
        assert_eq!(first, second, "same input text must produce identical output");
    }
}
