//! Markdown renderer over `pulldown-cmark`.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::highlight::{ClassHighlighter, Highlighter};

/// Rendering error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A code block could not be highlighted.
    #[error("Code block highlighting failed: {0}")]
    Highlight(String),
}

/// Markdown to HTML renderer.
///
/// Parses markdown into an event stream, intercepts fenced code blocks
/// through the configured [`Highlighter`], and serializes the result to
/// HTML. Rendering is a pure function of the input text: repeated calls
/// on the same input produce byte-identical output.
pub struct MarkdownRenderer {
    gfm: bool,
    highlighter: Box<dyn Highlighter>,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer with GFM enabled and the class-annotating
    /// highlighter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gfm: true,
            highlighter: Box::new(ClassHighlighter),
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports
    /// tables, strikethrough (`~~text~~`) and task lists (`- [ ] item`).
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Replace the code block highlighter.
    #[must_use]
    pub fn with_highlighter<H: Highlighter + 'static>(mut self, highlighter: H) -> Self {
        self.highlighter = Box::new(highlighter);
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render markdown text to HTML.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the highlighting stage fails for any
    /// code block. No partial output is returned.
    pub fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let parser = Parser::new_ext(markdown, self.parser_options());

        let mut events: Vec<Event<'_>> = Vec::new();
        // (language, accumulated source) while inside a code block
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match &kind {
                        CodeBlockKind::Fenced(info) => parse_fence_lang(info),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, source)) = code_block.as_mut() {
                        source.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, source)) = code_block.take() {
                        let rendered = self.highlighter.highlight(lang.as_deref(), &source)?;
                        events.push(Event::Html(rendered.into()));
                    }
                }
                other => events.push(other),
            }
        }

        let mut html = String::with_capacity(markdown.len() * 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        Ok(html)
    }
}

/// Extract the language from a fence info string.
///
/// The info string may carry attributes after the language
/// (e.g. ```` ```rust,ignore ````); only the first token names the
/// language.
fn parse_fence_lang(info: &str) -> Option<String> {
    let lang = info
        .split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or("");
    if lang.is_empty() {
        None
    } else {
        Some(lang.to_owned())
    }
}
