use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use async_openai::config::OpenAIConfig;

use crate::core::paths;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_INSTITUTE: &str =
    "ARMIET Educational Institute (Alamuri Ratnamala Institute of Engineering and Technology)";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    pub model_id: String,
    /// Session cookie signing secret. `None` means the development default is used.
    pub secret_key: Option<String>,
    pub bind: SocketAddr,
    pub knowledge_path: PathBuf,
    pub institute: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidBind {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Load configuration from environment. Returns an error if API key is missing.
pub fn load() -> Result<Config, ConfigError> {
    let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let api_key = env::var("GEMINI_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;

    let openai_config = OpenAIConfig::new()
        .with_api_base(base_url)
        .with_api_key(api_key);

    Ok(Config {
        openai_config,
        model_id: model_id(),
        secret_key: env::var("HELPDESK_SECRET_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty()),
        bind: bind_addr()?,
        knowledge_path: knowledge_path(),
        institute: env::var("HELPDESK_INSTITUTE").unwrap_or_else(|_| DEFAULT_INSTITUTE.to_string()),
    })
}

/// Model id from `GEMINI_MODEL`, or the default.
pub fn model_id() -> String {
    env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

/// Listen address from `HELPDESK_BIND`, or the default.
pub fn bind_addr() -> Result<SocketAddr, ConfigError> {
    parse_bind(&env::var("HELPDESK_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()))
}

pub fn parse_bind(addr: &str) -> Result<SocketAddr, ConfigError> {
    addr.trim()
        .parse()
        .map_err(|source| ConfigError::InvalidBind {
            addr: addr.to_string(),
            source,
        })
}

/// Knowledge base path from `HELPDESK_KNOWLEDGE_BASE`, or the default lookup.
pub fn knowledge_path() -> PathBuf {
    env::var_os("HELPDESK_KNOWLEDGE_BASE")
        .map(PathBuf::from)
        .unwrap_or_else(paths::default_knowledge_base)
}

/// Whether `GEMINI_API_KEY` is set (for the `config` command).
pub fn has_api_key() -> bool {
    env::var("GEMINI_API_KEY").is_ok_and(|k| !k.trim().is_empty())
}
