//! Knowledge base: the static JSON document embedded in every helpdesk prompt.
//!
//! Loaded once at start-up. A missing or invalid file is not fatal: the helpdesk
//! runs with an empty knowledge base and the model is told it has no information.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

/// Error reading or parsing the knowledge base file.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge base: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parsed knowledge base document.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    data: Value,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            data: Value::Object(Default::default()),
        }
    }
}

impl KnowledgeBase {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// True for `{}`, `[]` and `null`.
    pub fn is_empty(&self) -> bool {
        match &self.data {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Pretty JSON (2-space indent) for embedding in the prompt.
    pub fn to_prompt_json(&self) -> String {
        serde_json::to_string_pretty(&self.data).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Read and parse the knowledge base at `path`.
pub fn try_load(path: &Path) -> Result<KnowledgeBase, KnowledgeError> {
    let content = fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&content)?;
    Ok(KnowledgeBase::new(data))
}

/// Load the knowledge base, falling back to an empty one (with a log message) on any error.
pub fn load(path: &Path) -> KnowledgeBase {
    match try_load(path) {
        Ok(kb) => {
            log::info!("Loaded knowledge base from {}", path.display());
            kb
        }
        Err(KnowledgeError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!(
                "{} not found. Using empty knowledge base.",
                path.display()
            );
            KnowledgeBase::default()
        }
        Err(KnowledgeError::Json(e)) => {
            log::error!(
                "{} is not valid JSON ({}). Using empty knowledge base.",
                path.display(),
                e
            );
            KnowledgeBase::default()
        }
        Err(e) => {
            log::error!("{}: {}. Using empty knowledge base.", path.display(), e);
            KnowledgeBase::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        fs::write(&path, r#"{"courses": ["Civil", "Mechanical"]}"#).unwrap();

        let kb = load(&path);
        assert!(!kb.is_empty());
        assert_eq!(kb, KnowledgeBase::new(json!({"courses": ["Civil", "Mechanical"]})));
    }

    #[test]
    fn missing_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(try_load(&path), Err(KnowledgeError::Io(_))));
        let kb = load(&path);
        assert!(kb.is_empty());
        assert_eq!(kb.to_prompt_json(), "{}");
    }

    #[test]
    fn invalid_json_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(try_load(&path), Err(KnowledgeError::Json(_))));
        assert!(load(&path).is_empty());
    }

    #[test]
    fn prompt_json_is_indented() {
        let kb = KnowledgeBase::new(json!({"fees": {"diploma": 50000}}));
        assert_eq!(
            kb.to_prompt_json(),
            "{\n  \"fees\": {\n    \"diploma\": 50000\n  }\n}"
        );
    }

    #[test]
    fn non_object_documents_are_kept() {
        assert!(KnowledgeBase::new(json!([])).is_empty());
        assert!(!KnowledgeBase::new(json!(["SSC Marksheet"])).is_empty());
        assert!(!KnowledgeBase::new(json!("text")).is_empty());
    }
}
