//! Markdown to HTML renderer with a pluggable highlighting stage.
//!
//! This crate provides [`MarkdownRenderer`], which converts markdown body
//! text to HTML in three ordered stages:
//!
//! 1. parse the text into a markdown event stream (`pulldown-cmark`)
//! 2. pass fenced code blocks through a [`Highlighter`]
//! 3. serialize the stream back into HTML
//!
//! The default [`ClassHighlighter`] annotates code blocks with a
//! `language-<lang>` class for client-side highlighting.
//!
//! # Example
//!
//! ```
//! use folio_render::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::new();
//! let html = renderer.render("# Hello\n\n**Bold** text").unwrap();
//! assert!(html.contains("<h1>Hello</h1>"));
//! ```

mod highlight;
mod html;
mod renderer;

pub use highlight::{ClassHighlighter, Highlighter};
pub use html::escape_html;
pub use renderer::{MarkdownRenderer, RenderError};
