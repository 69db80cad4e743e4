//! Fixed HTML page shell for converted documents.
//!
//! The shell has exactly two substitution points (the document title and the
//! base64 payload), so the same input text always produces a byte-identical
//! output document. Markdown rendering, frontmatter parsing, and diagram
//! layout all happen in the browser via the referenced libraries; nothing
//! here interprets the document content.

use crate::web_assets;

/// github-markdown-css light theme, loaded in `<head>`. The dark variant is
/// swapped in by the view-time script.
const MARKDOWN_CSS_CDN_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/github-markdown-css/5.5.0/github-markdown-light.min.css";

/// marked, the client-side markdown renderer.
const MARKED_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/marked@12.0.0/marked.min.js";

/// js-yaml, the client-side frontmatter parser.
const JSYAML_CDN_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/js-yaml/4.1.0/js-yaml.min.js";

/// Minimal HTML entity escaping for text content and attribute values.
fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the complete HTML document for one converted file.
///
/// # Parameters
/// - `title`: the browser-tab title (the input file's base name). Escaped
///   here, so paths containing HTML-sensitive characters cannot break the
///   document structure.
/// - `payload`: the base64-encoded document text. The base64 alphabet is
///   string-literal-safe, so it is embedded directly inside a quoted literal
///   in the inline script module.
pub fn render_page(title: &str, payload: &str) -> String {
    let title = html_escape(title);
    let css = web_assets::CSS;
    let script = web_assets::JS;

    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n\
<link id=\"markdown-css\" rel=\"stylesheet\" href=\"{MARKDOWN_CSS_CDN_URL}\">\n\
<script src=\"{MARKED_CDN_URL}\"></script>\n\
<script src=\"{JSYAML_CDN_URL}\"></script>\n\
<style>\n\
{css}\
</style>\n\
</head>\n\
<body class=\"markdown-body\">\n\
<button id=\"theme-toggle\">Switch to Dark Theme</button>\n\
<div id=\"content\">Rendering Markdown...</div>\n\
<script type=\"module\">\n\
const ENCODED_DOCUMENT = \"{payload}\";\n\
{script}\
</script>\n\
</body>\n\
</html>\n"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
