//! Converter for the commonly used subset of AsciiDoc.
//!
//! Supported blocks: section titles (`=` to `======`), paragraphs with ` +` hard breaks,
//! `*`/`-` and `.` lists, `----` listing and `....` literal blocks, `'''` rules, line and
//! block comments. Supported inline markup: `*strong*`, `_emphasis_`, `` `monospace` ``,
//! bare `http(s)` URLs and `link:`/URL macros with a `[label]`. Everything else is shown
//! as escaped text.

use std::fmt::Write;

use super::{escape_html, is_unsafe_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(&self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

#[derive(Default)]
struct Writer {
    out: String,
    paragraph: Vec<String>,
    list: Option<ListKind>,
}

impl Writer {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }

        let body = self
            .paragraph
            .drain(..)
            .map(|line| match line.strip_suffix(" +") {
                Some(line) => format!("{}<br>", format_inline(&escape_html(line))),
                None => format_inline(&escape_html(&line)),
            })
            .collect::<Vec<_>>()
            .join("\n");

        let _ = writeln!(self.out, "<p>{}</p>", body);
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.list.take() {
            let _ = writeln!(self.out, "</{}>", kind.tag());
        }
    }

    fn close_blocks(&mut self) {
        self.flush_paragraph();
        self.close_list();
    }

    fn list_item(&mut self, kind: ListKind, text: &str) {
        self.flush_paragraph();
        if self.list != Some(kind) {
            self.close_list();
            let _ = writeln!(self.out, "<{}>", kind.tag());
            self.list = Some(kind);
        }
        let _ = writeln!(self.out, "<li>{}</li>", format_inline(&escape_html(text)));
    }
}

/// Renders AsciiDoc to HTML.
pub fn render(source: &str) -> String {
    let mut writer = Writer::default();
    let mut lines = source.lines();

    while let Some(line) = lines.next() {
        let line = line.trim_end();

        match line {
            "----" | "...." => {
                writer.close_blocks();
                let (open, close) = if line == "----" {
                    ("<pre><code>", "</code></pre>\n")
                } else {
                    ("<pre>", "</pre>\n")
                };
                writer.out.push_str(open);
                let body: Vec<String> = lines
                    .by_ref()
                    .take_while(|inner| inner.trim_end() != line)
                    .map(escape_html)
                    .collect();
                writer.out.push_str(&body.join("\n"));
                writer.out.push_str(close);
            }
            "////" => {
                writer.close_blocks();
                lines.by_ref().find(|inner| inner.trim_end() == "////");
            }
            "'''" => {
                writer.close_blocks();
                writer.out.push_str("<hr>\n");
            }
            "" => writer.close_blocks(),
            _ if line.starts_with("//") => {}
            _ if is_block_attribute(line) => {}
            _ => {
                if let Some((level, title)) = section_title(line) {
                    writer.close_blocks();
                    let _ = writeln!(
                        writer.out,
                        "<h{level}>{}</h{level}>",
                        format_inline(&escape_html(title))
                    );
                } else if let Some((kind, text)) = list_item(line) {
                    writer.list_item(kind, text);
                } else {
                    writer.close_list();
                    writer.paragraph.push(line.to_string());
                }
            }
        }
    }

    writer.close_blocks();
    writer.out
}

/// `= Title` is level 1, `====== Title` level 6.
fn section_title(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '=').count();
    if !(1..=6).contains(&level) {
        return None;
    }

    let title = line[level..].strip_prefix(' ')?.trim();
    (!title.is_empty()).then_some((level, title))
}

fn list_item(line: &str) -> Option<(ListKind, &str)> {
    let trimmed = line.trim_start();
    let (kind, marker) = match trimmed.chars().next()? {
        '*' => (ListKind::Unordered, '*'),
        '-' => (ListKind::Unordered, '-'),
        '.' => (ListKind::Ordered, '.'),
        _ => return None,
    };

    let text = trimmed.trim_start_matches(marker).strip_prefix(' ')?.trim();
    (!text.is_empty()).then_some((kind, text))
}

/// Lines such as `[source,rust]` configure the next block and produce no output.
fn is_block_attribute(line: &str) -> bool {
    line.len() > 2
        && line.starts_with('[')
        && line.ends_with(']')
        && !line[1..line.len() - 1].contains(['[', ']'])
}

/// Applies inline markup to already escaped text.
fn format_inline(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    // Markers with no closer left on the line. Later openers of the same marker only see
    // a subset of the same candidates, so they are not scanned again.
    let mut unclosed: Vec<char> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let at_boundary = i == 0 || !chars[i - 1].is_alphanumeric();

        if at_boundary {
            match c {
                '`' | '*' | '_' if !unclosed.contains(&c) => {
                    if let Some(end) = find_closing(&chars, i, c) {
                        if c == '`' {
                            out.push_str("<code>");
                            out.extend(&chars[i + 1..end]);
                            out.push_str("</code>");
                        } else {
                            let tag = if c == '*' { "strong" } else { "em" };
                            let inner: String = chars[i + 1..end].iter().collect();
                            let _ = write!(out, "<{tag}>{}</{tag}>", format_inline(&inner));
                        }
                        i = end + 1;
                        continue;
                    }
                    if chars.get(i + 1).is_some_and(|next| !next.is_whitespace() && *next != c) {
                        unclosed.push(c);
                    }
                }
                '`' | '*' | '_' => {}
                _ => {
                    if let Some((html, consumed)) = parse_link(&chars[i..]) {
                        out.push_str(&html);
                        i += consumed;
                        continue;
                    }
                }
            }
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Finds the marker closing a constrained span opened at `open`.
fn find_closing(chars: &[char], open: usize, marker: char) -> Option<usize> {
    let first = *chars.get(open + 1)?;
    if first.is_whitespace() || first == marker {
        return None;
    }

    (open + 2..chars.len()).find(|&j| {
        chars[j] == marker
            && !chars[j - 1].is_whitespace()
            && chars.get(j + 1).map_or(true, |next| !next.is_alphanumeric())
    })
}

fn starts_with(chars: &[char], prefix: &str) -> bool {
    chars.len() >= prefix.chars().count() && chars.iter().zip(prefix.chars()).all(|(a, b)| *a == b)
}

/// Parses `https://url`, `https://url[label]` or `link:url[label]` at the start of `chars`.
///
/// Returns the anchor markup and the number of characters consumed.
fn parse_link(chars: &[char]) -> Option<(String, usize)> {
    let skip = if starts_with(chars, "link:") { 5 } else { 0 };
    let target = &chars[skip..];

    if !(starts_with(target, "https://") || starts_with(target, "http://")) {
        return None;
    }

    let mut url_len = target
        .iter()
        .position(|c| c.is_whitespace() || *c == '[')
        .unwrap_or(target.len());

    let label_end = match target.get(url_len) {
        Some('[') => target[url_len + 1..]
            .iter()
            .position(|c| matches!(c, ']' | '['))
            .filter(|&offset| target[url_len + 1 + offset] == ']')
            .map(|offset| url_len + 1 + offset),
        _ => None,
    };

    let label = match label_end {
        Some(end) => Some(target[url_len + 1..end].iter().collect::<String>()),
        None => {
            while url_len > 0 && matches!(target[url_len - 1], '.' | ',' | ')' | '!' | '?') {
                url_len -= 1;
            }
            None
        }
    };

    let url: String = target[..url_len].iter().collect();
    if url_len <= "http://".len() || is_unsafe_url(&url) {
        return None;
    }

    let consumed = skip + label_end.map_or(url_len, |end| end + 1);
    let label = label
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| url.clone());

    Some((format!("<a href=\"{}\">{}</a>", url, label), consumed))
}
