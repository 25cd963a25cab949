//! Markdown Renderer — converts Markdown text to a styled HTML document.
//!
//! The conversion itself is delegated to `pulldown-cmark` with the
//! GitHub-flavored extensions (tables, strikethrough, task lists) enabled;
//! this service owns the document wrapping around the converter's output.

use std::fs;
use std::path::Path;

use pulldown_cmark::{html, Options, Parser};

use crate::types::errors::RenderError;

/// Trait defining the renderer interface.
pub trait MarkdownRendererTrait {
    fn render_body(&self, markdown: &str) -> String;
    fn render_document(&self, markdown: &str, style: &str) -> String;
    fn render_file(&self, path: &Path, style: &str) -> Result<String, RenderError>;
}

/// Renderer implementation backed by pulldown-cmark.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRendererTrait for MarkdownRenderer {
    /// Converts Markdown text to an HTML fragment (no document shell).
    fn render_body(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut body = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut body, parser);
        body
    }

    /// Wraps the converted Markdown in a full HTML document with the given
    /// stylesheet embedded in `<head><style>`.
    fn render_document(&self, markdown: &str, style: &str) -> String {
        let body = self.render_body(markdown);
        let mut doc = String::with_capacity(body.len() + style.len() + 256);
        doc.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
        doc.push_str(style);
        doc.push_str("</style></head><body><article class=\"markdown-body\">");
        doc.push_str(&body);
        doc.push_str("</article></body></html>");
        doc
    }

    /// Reads a Markdown file and renders it as a full styled document.
    fn render_file(&self, path: &Path, style: &str) -> Result<String, RenderError> {
        let bytes =
            fs::read(path).map_err(|e| RenderError::ReadFailed(format!("{}: {}", path.display(), e)))?;
        let markdown = String::from_utf8(bytes)
            .map_err(|_| RenderError::InvalidUtf8(path.display().to_string()))?;
        Ok(self.render_document(&markdown, style))
    }
}
