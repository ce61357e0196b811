//! Markdown Rendering
//!
//! Idea descriptions and solutions are user-written Markdown. Rendering goes
//! through pulldown-cmark with two restrictions:
//! - raw HTML blocks and inline HTML are emitted as escaped text
//! - links and images with a script-capable scheme get an inert `#` target

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Render Markdown to HTML that is safe to set as `inner_html`
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(sanitize_event);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Render for inline use (strips the outer `<p>`)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|scheme| normalized.starts_with(scheme)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}
