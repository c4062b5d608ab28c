//! Generation API error types.

/// Errors from the text-generation call.
#[derive(Debug)]
pub enum ChatError {
    ApiAuth(String),
    ApiMessage(String),
    /// The API answered without any text.
    EmptyReply,
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::ApiAuth(msg) => write!(f, "{}", msg),
            ChatError::ApiMessage(msg) => write!(f, "API error: {}", msg),
            ChatError::EmptyReply => write!(f, "API returned an empty reply"),
            ChatError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatError::Other(e) => e.source(),
            ChatError::ApiAuth(_) | ChatError::ApiMessage(_) | ChatError::EmptyReply => None,
        }
    }
}

/// Map async-openai or API errors into ChatError.
pub fn map_api_error<E>(e: E) -> ChatError
where
    E: std::fmt::Display + Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    let s = e.to_string();
    if s.contains("API key not valid") || s.contains("API_KEY_INVALID") || s.contains("401") {
        return ChatError::ApiAuth(
            "API error: the Gemini API key was rejected. Check GEMINI_API_KEY in .env.".to_string(),
        );
    }
    if s.contains("\"error\"")
        && let Some((_, rest)) = s.split_once("\"message\":\"")
        && let Some((msg, _)) = rest.split_once('"')
    {
        return ChatError::ApiMessage(msg.to_string());
    }
    ChatError::Other(e.into())
}
