//! Notes Markdown
//!
//! Renders food notes with pulldown-cmark for the preview pane. Raw HTML in
//! the source is shown as text, and script-capable link targets are dropped.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Is `url` safe to put in an `href`?
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    !UNSAFE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Shopping link as an `href`, or `None` when there is nothing to open
pub fn link_href(link: &str) -> Option<String> {
    let link = link.trim();
    (!link.is_empty() && is_safe_url(link)).then(|| link.to_string())
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render notes to HTML
pub fn render_notes(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Event::Start(Tag::Link { link_type, dest_url: CowStr::from("#"), title, id })
        }
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        let html = render_notes("**fresh** from the market");
        assert!(html.contains("<strong>fresh</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_notes("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let inline = render_notes("buy <b>two</b>");
        assert!(!inline.contains("<b>"));
    }

    #[test]
    fn test_script_links_are_neutralised() {
        let html = render_notes("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"#\""));

        let ok = render_notes("[shop](https://example.com/apples)");
        assert!(ok.contains("href=\"https://example.com/apples\""));
    }

    #[test]
    fn test_link_href() {
        assert_eq!(link_href("  "), None);
        assert_eq!(link_href("JavaScript:void(0)"), None);
        assert_eq!(link_href(" https://shop.example/x "), Some("https://shop.example/x".to_string()));
    }
}
