//! Helpdesk prompt: instructions, knowledge base, and the visitor's question.
//!
//! The template is embedded from `config/prompt-template.txt` at compile time
//! (build.rs checks that every placeholder is present).

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::core::knowledge::KnowledgeBase;

const TEMPLATE: &str = include_str!("../../config/prompt-template.txt");

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{(institute|knowledge|message)\}").expect("placeholder pattern must compile")
    })
}

/// Build the full prompt for one visitor message.
pub fn build_prompt(institute: &str, knowledge: &KnowledgeBase, message: &str) -> String {
    fill(TEMPLATE, institute, &knowledge.to_prompt_json(), message)
}

/// Substitute placeholders in one pass, so braces inside the knowledge base or
/// the message are never expanded.
fn fill(template: &str, institute: &str, knowledge: &str, message: &str) -> String {
    placeholder()
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "institute" => institute.to_string(),
            "knowledge" => knowledge.to_string(),
            _ => message.to_string(),
        })
        .into_owned()
}
