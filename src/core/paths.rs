//! Path helpers for the config directory and the knowledge base lookup.

use std::path::PathBuf;

use crate::core::app;

/// File name of the knowledge base, in the working directory or the config directory.
pub const KNOWLEDGE_BASE_FILE: &str = "knowledge-base.json";

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/helpdesk-chat/).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// `knowledge-base.json` in the working directory if present, else in the config
/// directory if present. Falls back to the working-directory path so a missing
/// file is reported where users expect it.
pub fn default_knowledge_base() -> PathBuf {
    let local = PathBuf::from(KNOWLEDGE_BASE_FILE);
    if local.exists() {
        return local;
    }
    config_dir()
        .map(|d| d.join(KNOWLEDGE_BASE_FILE))
        .filter(|p| p.exists())
        .unwrap_or(local)
}
