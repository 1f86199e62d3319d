//! Code block highlighting stage.
//!
//! Fenced code blocks are taken out of the markdown event stream and
//! rendered through a [`Highlighter`], which produces the full HTML for
//! the block. The default implementation annotates blocks with a
//! `language-<lang>` class, the convention consumed by client-side
//! highlighters (Prism, highlight.js).

use std::fmt::Write;

use crate::html::escape_html;
use crate::renderer::RenderError;

/// Produces HTML for one fenced code block.
///
/// Implementations receive the fence language (if one was declared) and
/// the raw block source, and return complete `<pre><code>` markup.
pub trait Highlighter: Send + Sync {
    /// Render one code block to HTML.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the block cannot be processed; the
    /// surrounding render fails as a whole, no partial output is kept.
    fn highlight(&self, lang: Option<&str>, source: &str) -> Result<String, RenderError>;
}

/// Default highlighter: class annotation for client-side highlighting.
///
/// Emits `<pre><code class="language-rust">…</code></pre>` for a block
/// fenced with `rust`, and a bare `<pre><code>` for blocks without a
/// language.
#[derive(Debug, Default)]
pub struct ClassHighlighter;

impl Highlighter for ClassHighlighter {
    fn highlight(&self, lang: Option<&str>, source: &str) -> Result<String, RenderError> {
        let mut out = String::with_capacity(source.len() + 64);
        if let Some(lang) = lang {
            write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(source)
            )
            .map_err(|e| RenderError::Highlight(e.to_string()))?;
        } else {
            write!(out, "<pre><code>{}</code></pre>", escape_html(source))
                .map_err(|e| RenderError::Highlight(e.to_string()))?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_highlight_with_language() {
        let html = ClassHighlighter.highlight(Some("rust"), "fn main() {}").unwrap();

        assert_eq!(
            html,
            r#"<pre><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_highlight_without_language() {
        let html = ClassHighlighter.highlight(None, "plain code").unwrap();

        assert_eq!(html, "<pre><code>plain code</code></pre>");
    }

    #[test]
    fn test_highlight_escapes_source() {
        let html = ClassHighlighter
            .highlight(Some("html"), "<div class=\"x\">")
            .unwrap();

        assert_eq!(
            html,
            r#"<pre><code class="language-html">&lt;div class=&quot;x&quot;&gt;</code></pre>"#
        );
    }
}
