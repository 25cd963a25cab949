//! Property-based tests for the document wrapper around the Markdown
//! converter: for arbitrary inputs the shell structure must hold and the
//! stylesheet must be embedded verbatim, exactly once.

use mdpreview::services::renderer::{MarkdownRenderer, MarkdownRendererTrait};
use mdpreview::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use mdpreview::types::settings::ThemeMode;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // *For any* Markdown text (without raw inline HTML, which the converter
    // passes through), the wrapped document is a single well-formed shell:
    // one DOCTYPE, one style block, one body, in that order.
    #[test]
    fn document_shell_is_well_formed(markdown in "[a-zA-Z0-9 #*_`>.()!\\[\\]\n-]{0,400}") {
        let renderer = MarkdownRenderer::new();
        let doc = renderer.render_document(&markdown, "body{margin:0}");

        prop_assert!(doc.starts_with("<!DOCTYPE html><html><head>"));
        prop_assert!(doc.ends_with("</article></body></html>"));
        prop_assert_eq!(doc.matches("<!DOCTYPE html>").count(), 1);
        prop_assert_eq!(doc.matches("<style>").count(), 1);
        prop_assert!(doc.find("</style>").unwrap() < doc.find("<body>").unwrap());
    }

    // *For any* stylesheet text without a closing style tag, the wrapper
    // embeds it verbatim between `<style>` and `</style>`.
    #[test]
    fn stylesheet_is_embedded_verbatim(css in "[a-z{}:;#0-9.%-]{0,200}") {
        let renderer = MarkdownRenderer::new();
        let doc = renderer.render_document("text", &css);

        let expected = format!("<style>{}</style>", css);
        prop_assert!(doc.contains(&expected));
    }

    // *For any* plain word, rendering it through the active theme produces a
    // document containing both the word and the theme's background color, so
    // the preview always reflects the configured palette.
    #[test]
    fn themed_document_contains_content_and_palette(word in "[a-zA-Z0-9]{1,20}") {
        let renderer = MarkdownRenderer::new();
        let engine = ThemeEngine::new(ThemeMode::Dark);
        let style = engine.markdown_style(16, 900);
        let doc = renderer.render_document(&word, &style);

        prop_assert!(doc.contains(&word));
        prop_assert!(doc.contains("#0d1117"));
    }
}
