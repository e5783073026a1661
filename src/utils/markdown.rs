//! Markdown rendering for the preview pane
//!
//! Thin wrapper over pulldown-cmark. Rendering is an off-the-shelf concern;
//! the session only needs "markup source in, preview HTML out".

use pulldown_cmark::{html, Options, Parser};

/// Render markdown source to preview HTML.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, parser);
    out
}
