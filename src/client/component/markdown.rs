use dioxus::prelude::*;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const SAFE_SCHEMES: [&str; 3] = ["http:", "https:", "mailto:"];

/// Renders Markdown source to an HTML fragment.
///
/// Raw HTML in the source is escaped rather than passed through, and link or image
/// targets with any scheme other than http, https, or mailto are replaced by `#`.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES)
        .map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            Event::Start(Tag::Link(kind, dest, title)) => {
                Event::Start(Tag::Link(kind, sanitize_url(dest), title))
            }
            Event::Start(Tag::Image(kind, dest, title)) => {
                Event::Start(Tag::Image(kind, sanitize_url(dest), title))
            }
            event => event,
        });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Keeps relative targets and allowed schemes; everything else becomes `#`.
fn sanitize_url(dest: CowStr<'_>) -> CowStr<'_> {
    // Browsers ignore whitespace and control characters inside a scheme.
    let normalized: String = dest
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    let scheme_end = normalized.find(':');
    let path_start = normalized.find(['/', '?', '#']);

    let has_scheme = match (scheme_end, path_start) {
        (Some(colon), Some(path)) => colon < path,
        (Some(_), None) => true,
        (None, _) => false,
    };

    if !has_scheme || SAFE_SCHEMES.iter().any(|scheme| normalized.starts_with(scheme)) {
        dest
    } else {
        CowStr::Borrowed("#")
    }
}

#[component]
pub fn Markdown(content: String) -> Element {
    let rendered = render_markdown(&content);

    rsx!(div {
        class: "prose max-w-none",
        dangerous_inner_html: rendered
    })
}
