pub mod app;
pub mod config;
pub mod format;
pub mod knowledge;
pub mod llm;
pub mod paths;
pub mod prompt;
