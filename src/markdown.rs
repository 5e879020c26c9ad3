//! Markdown Rendering
//!
//! pulldown-cmark based rendering for card descriptions.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

/// Parse markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        let html = parse_markdown("# Title\n\nbody");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_task_lists() {
        let html = parse_markdown("- [x] done\n- [ ] open");
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_inline_strips_paragraph() {
        let html = parse_markdown_inline("just *emphasis*");
        assert!(!html.starts_with("<p>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_strikethrough_extension() {
        let html = parse_markdown_inline("~~old~~");
        assert!(html.contains("<del>old</del>"));
    }
}
