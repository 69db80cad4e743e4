//! Typed view of the optional YAML frontmatter block.
//!
//! The generated page parses frontmatter in the browser with js-yaml; this
//! module mirrors the recognized fields so the converter can flag a malformed
//! block at build time instead of leaving the problem to the browser console.
//! The lint is diagnostic only; it never changes the rendered output.

use std::path::Path;

use serde::Deserialize;

/// Recognized frontmatter fields. Unknown keys are ignored, matching the
/// view-time renderer.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub date: Option<String>,
    pub authors: Option<AuthorList>,
}

/// `authors:` accepts either a single author or an ordered sequence.
///
/// `Many` is tried first: untagged matching takes the first variant that
/// fits, and a sequence must never be mistaken for a positional `Author`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AuthorList {
    Many(Vec<Author>),
    One(Author),
}

/// One author: a plain name, or a structured entry with optional affiliations.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Author {
    Name(String),
    Entry {
        name: String,
        #[serde(default)]
        affiliations: Option<Affiliations>,
    },
}

/// `affiliations:` accepts a single value or a sequence.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Affiliations {
    One(String),
    Many(Vec<String>),
}

impl Frontmatter {
    /// Flatten whichever `authors:` shape was written into an ordered list.
    pub fn normalized_authors(&self) -> Vec<&Author> {
        match &self.authors {
            None => Vec::new(),
            Some(AuthorList::One(author)) => vec![author],
            Some(AuthorList::Many(authors)) => authors.iter().collect(),
        }
    }
}

impl Author {
    /// The display name, regardless of shape.
    pub fn name(&self) -> &str {
        match self {
            Author::Name(name) => name,
            Author::Entry { name, .. } => name,
        }
    }

    /// Affiliations flattened to a list; empty when absent or for plain names.
    pub fn affiliations(&self) -> Vec<&str> {
        match self {
            Author::Name(_) => Vec::new(),
            Author::Entry { affiliations, .. } => match affiliations {
                None => Vec::new(),
                Some(Affiliations::One(a)) => vec![a.as_str()],
                Some(Affiliations::Many(list)) => list.iter().map(String::as_str).collect(),
            },
        }
    }
}

/// Split a leading frontmatter block from `source`.
///
/// Returns `(Some(yaml), rest)` when the document opens with a `---` line and
/// a later line consisting of exactly `---` closes the block; `rest` is the
/// document with the whole block removed. Returns `(None, source)` otherwise.
///
/// Matches the view-time script: the opening `---` must be the very first
/// line, the closing `---` must be newline-terminated, and both accept CRLF.
pub fn split(source: &str) -> (Option<&str>, &str) {
    let body = if let Some(rest) = source.strip_prefix("---\n") {
        rest
    } else if let Some(rest) = source.strip_prefix("---\r\n") {
        rest
    } else {
        return (None, source);
    };

    let mut line_start = 0;
    while line_start < body.len() {
        let Some(nl) = body[line_start..].find('\n') else {
            // Final line lacks a newline, so it cannot close the block.
            break;
        };
        let line_end = line_start + nl + 1;
        let line = body[line_start..line_end].trim_end_matches(['\n', '\r']);
        if line_start > 0 && line == "---" {
            let yaml = body[..line_start].trim_end_matches(['\n', '\r']);
            return (Some(yaml), &body[line_end..]);
        }
        line_start = line_end;
    }

    (None, source)
}

/// Parse the YAML text of a frontmatter block.
///
/// An empty block parses to the default (all fields absent), mirroring a
/// document whose delimiters enclose nothing.
pub fn parse(yaml: &str) -> Result<Frontmatter, serde_yml::Error> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yml::from_str(yaml)
}

/// Build-time frontmatter diagnostic.
///
/// Logs one stderr line per document carrying a frontmatter block; warns when
/// the block is not valid YAML. The browser performs the authoritative parse
/// at view time either way.
pub fn lint(path: &Path, source: &str) {
    let (Some(yaml), _) = split(source) else {
        return;
    };
    match parse(yaml) {
        Ok(fm) => {
            let authors: Vec<String> = fm
                .normalized_authors()
                .iter()
                .map(|a| {
                    let affiliations = a.affiliations();
                    if affiliations.is_empty() {
                        a.name().to_owned()
                    } else {
                        format!("{} ({})", a.name(), affiliations.join(", "))
                    }
                })
                .collect();
            eprintln!(
                "[frontmatter] file={} title={:?} thumbnail={:?} date={:?} authors=[{}]",
                path.display(),
                fm.title.as_deref().unwrap_or("-"),
                fm.thumbnail.as_deref().unwrap_or("-"),
                fm.date.as_deref().unwrap_or("-"),
                authors.join(", ")
            );
        }
        Err(e) => {
            eprintln!(
                "[frontmatter] file={} warning: invalid YAML ({e}); the page will render without a header",
                path.display()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
