use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use super::is_unsafe_url;

/// Renders Markdown to HTML.
///
/// Raw HTML in the source is shown as text and script links are replaced with `#`.
pub fn render(source: &str) -> String {
    let options = Options::all();
    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(Tag::Link(kind, url, title)) => {
            Event::Start(Tag::Link(kind, neutralize(url), title))
        }
        Event::Start(Tag::Image(kind, url, title)) => {
            Event::Start(Tag::Image(kind, neutralize(url), title))
        }
        event => event,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn neutralize(url: CowStr<'_>) -> CowStr<'_> {
    if is_unsafe_url(&url) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}
