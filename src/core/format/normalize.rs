//! Whole-text regex passes that run before and after line building.

use super::patterns::patterns;

/// Glue stray list markers onto the next line, unwrap bulleted headings, convert bold.
pub(super) fn repair_markers(text: &str) -> String {
    let p = patterns();
    let text = p.stray_bullet.replace_all(text, "${1} ");
    let text = p.stray_number.replace_all(&text, "${1} ");
    let text = p.bulleted_heading.replace_all(&text, "${1}");
    p.bold.replace_all(&text, "<b>${1}</b>").into_owned()
}

/// Drop the trailing break, collapse break runs, and remove breaks touching list tags.
pub(super) fn tidy_breaks(html: &str) -> String {
    let p = patterns();
    let html = html.strip_suffix("<br>").unwrap_or(html);
    let html = p.repeated_breaks.replace_all(html, "<br>");
    let html = p.break_after_list.replace_all(&html, "</${1}>");
    let html = p.break_before_list.replace_all(&html, "<${1}>");
    html.trim().to_string()
}
