//! Embedded static assets for the generated page.
//!
//! Both files are compiled into the binary via `include_str!` so the tool is
//! fully self-contained; they are inlined verbatim into every generated
//! document.

/// Style rules inlined into the `<head>` of every generated document:
/// layout, theme-toggle control, frontmatter header, mermaid container.
///
/// Loaded from `src/assets/page.css` at compile time.
pub const CSS: &str = include_str!("assets/page.css");

/// View-time script module inlined into the `<body>`.
///
/// Decodes the embedded payload, extracts frontmatter, renders markdown and
/// mermaid diagrams, and wires the theme toggle. Expects the inline
/// `ENCODED_DOCUMENT` constant to be defined immediately before it.
/// Loaded from `src/assets/page.js` at compile time.
pub const JS: &str = include_str!("assets/page.js");
