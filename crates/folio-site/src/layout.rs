//! Page layout: HTML shell, head metadata and sidebar navigation.

use std::fmt::Write;

use folio_render::escape_html;

use crate::nav::nav_link_class;

/// One sidebar navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Link target path (e.g. `/posts/getting-started`).
    pub href: String,
    /// Link text.
    pub label: String,
}

/// HTML page layout.
///
/// Produces the full document shell around rendered post content: head
/// metadata, a sidebar listing all posts, and the main content area.
#[derive(Clone, Debug)]
pub struct Layout {
    site_title: String,
    description: Option<String>,
}

impl Layout {
    /// Create a layout for a site.
    #[must_use]
    pub fn new(site_title: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
            description: None,
        }
    }

    /// Set the site description for head metadata.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Site title shown in the sidebar and page titles.
    #[must_use]
    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    /// Render a complete HTML page.
    ///
    /// `current_path` selects which sidebar entry is marked active;
    /// `content` is injected into the main area as markup, unescaped.
    #[must_use]
    pub fn page(
        &self,
        page_title: &str,
        current_path: &str,
        nav: &[NavEntry],
        content: &str,
    ) -> String {
        let mut out = String::with_capacity(content.len() + 2048);

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(
            out,
            "<title>{} — {}</title>",
            escape_html(page_title),
            escape_html(&self.site_title)
        );
        if let Some(description) = &self.description {
            let _ = writeln!(
                out,
                r#"<meta name="description" content="{}">"#,
                escape_html(description)
            );
        }
        let _ = writeln!(
            out,
            r#"<meta property="og:title" content="{}">"#,
            escape_html(&self.site_title)
        );
        out.push_str("<link rel=\"stylesheet\" href=\"/styles/site.css\">\n</head>\n<body>\n");

        out.push_str("<div class=\"container\">\n<aside class=\"sidebar\">\n");
        let _ = writeln!(out, "<h1>{}</h1>", escape_html(&self.site_title));
        out.push_str("<nav class=\"menu\">\n");
        for entry in nav {
            let _ = writeln!(
                out,
                r#"<a href="{}" class="{}">{}</a>"#,
                escape_html(&entry.href),
                nav_link_class(current_path, &entry.href),
                escape_html(&entry.label)
            );
        }
        out.push_str("</nav>\n</aside>\n<main class=\"main\">\n");
        out.push_str(content);
        out.push_str("\n</main>\n</div>\n</body>\n</html>\n");

        out
    }
}
