//! Line classification and list-container emission.
//!
//! At most one list container is open at a time: `HtmlBuilder::open` is a single
//! `Option<ListKind>`, so opening one kind always closes the other first.

use regex::Regex;

use super::patterns::patterns;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            Self::Ordered => "<ol>",
            Self::Unordered => "<ul>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Ordered => "</ol>",
            Self::Unordered => "</ul>",
        }
    }
}

/// A trimmed input line after classification.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Line<'a> {
    Item(ListKind, &'a str),
    Plain(&'a str),
}

/// Classify a trimmed line. Numbered items win over bullets; a marker without
/// following whitespace (`*emphasis*`, `-5`) is plain text.
pub(super) fn classify(line: &str) -> Line<'_> {
    let p = patterns();
    if let Some(text) = item_text(&p.ordered_item, line) {
        Line::Item(ListKind::Ordered, text)
    } else if let Some(text) = item_text(&p.unordered_item, line) {
        Line::Item(ListKind::Unordered, text)
    } else {
        Line::Plain(line)
    }
}

fn item_text<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Default)]
struct HtmlBuilder {
    out: String,
    open: Option<ListKind>,
}

impl HtmlBuilder {
    fn close_list(&mut self) {
        if let Some(kind) = self.open.take() {
            self.out.push_str(kind.close_tag());
        }
    }

    fn item(&mut self, kind: ListKind, text: &str) {
        if self.open != Some(kind) {
            self.close_list();
            self.out.push_str(kind.open_tag());
            self.open = Some(kind);
        }
        self.out.push_str("<li>");
        self.out.push_str(text);
        self.out.push_str("</li>");
    }

    /// Plain line or heading: ends any open list. Empty lines emit nothing.
    fn line(&mut self, text: &str) {
        self.close_list();
        if !text.is_empty() {
            self.out.push_str(text);
            self.out.push_str("<br>");
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.out
    }
}

/// Build HTML from text whose bold spans are already converted to `<b>` tags.
pub(super) fn build(text: &str) -> String {
    let bold_line = &patterns().bold_line;
    let mut builder = HtmlBuilder::default();
    for raw in text.trim().split('\n') {
        match classify(raw.trim()) {
            // A bold-only item is a category heading, never a one-item list.
            Line::Item(_, text) if bold_line.is_match(text) => builder.line(text),
            Line::Item(kind, text) => builder.item(kind, text),
            Line::Plain(text) => builder.line(text),
        }
    }
    builder.finish()
}
