//! Reply formatting: markdown-like model output to an HTML fragment for the chat bubble.
//!
//! Handles the subset the helpdesk prompt asks the model to use:
//! - **bold** -> `<b>bold</b>`
//! - numbered lists (`1. item`) -> `<ol><li>item</li></ol>`
//! - bulleted lists (`*`, `-`, `•`) -> `<ul><li>item</li></ul>`
//! - bold "category" lines inside a list -> heading line, not a one-item list
//! - everything else -> one line per `<br>`
//!
//! The model does not always follow the formatting rules, so markers placed on
//! their own line are glued back onto the following line before parsing.

mod builder;
mod normalize;
mod patterns;

/// Convert a model reply into HTML. Never fails; irregular input degrades to plain lines.
pub fn format_reply(text: &str) -> String {
    let text = normalize::repair_markers(text);
    let html = builder::build(&text);
    normalize::tidy_breaks(&html)
}
