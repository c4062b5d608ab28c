//! Build script: validates prompt-template.txt at compile time.

use std::path::PathBuf;

const PLACEHOLDERS: &[&str] = &["{institute}", "{knowledge}", "{message}"];

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let template_path: PathBuf = [&manifest_dir, "config", "prompt-template.txt"]
        .iter()
        .collect();
    println!("cargo:rerun-if-changed={}", template_path.display());
    let template = std::fs::read_to_string(&template_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. prompt-template.txt must exist.",
            template_path.display(),
            e
        )
    });
    for placeholder in PLACEHOLDERS {
        if !template.contains(placeholder) {
            panic!(
                "prompt-template.txt is missing the {} placeholder. Fix the file and rebuild.",
                placeholder
            );
        }
    }
}
