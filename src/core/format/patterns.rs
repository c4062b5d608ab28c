//! Compiled regexes shared by the formatting passes.

use std::sync::OnceLock;

use regex::Regex;

pub(super) struct Patterns {
    /// A bullet alone on its line (blank lines around it included).
    pub stray_bullet: Regex,
    /// A `N.` marker alone on its line.
    pub stray_number: Regex,
    /// A bullet whose whole content is a bold span.
    pub bulleted_heading: Regex,
    pub bold: Regex,
    pub ordered_item: Regex,
    pub unordered_item: Regex,
    /// Item content that is one bold span after bold conversion.
    pub bold_line: Regex,
    pub repeated_breaks: Regex,
    pub break_after_list: Regex,
    pub break_before_list: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in formatting pattern must compile")
}

/// Returns the shared patterns, compiling them on first access.
pub(super) fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        stray_bullet: compile(r"(?m)^\s*([*•-])\s*$\n"),
        stray_number: compile(r"(?m)^\s*([0-9]+\.)\s*$\n"),
        bulleted_heading: compile(r"(?m)^\s*[*•-]\s*(\*\*[^\n]+\*\*)\s*$"),
        bold: compile(r"\*\*(.*?)\*\*"),
        ordered_item: compile(r"^[0-9]+\.\s+(.*)"),
        unordered_item: compile(r"^[*•-]\s+(.*)"),
        bold_line: compile(r"^<b>.*</b>$"),
        repeated_breaks: compile(r"(<br\s*/?>\s*){2,}"),
        break_after_list: compile(r"</(ol|ul)><br>"),
        break_before_list: compile(r"<br><(ol|ul)>"),
    })
}
