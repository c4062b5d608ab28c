//! Route handlers.

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::SignedCookieJar;
use serde::{Deserialize, Serialize};

use super::AppState;
use super::session;
use crate::core::format::format_reply;
use crate::core::prompt::build_prompt;

/// Reply shown when generation fails for any reason.
pub(super) const APOLOGY: &str = "⚠️ Sorry, something went wrong with the helpdesk bot.";

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Debug, Deserialize)]
pub(super) struct ChatRequest {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatResponse {
    reply: String,
    unread_message: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatStatusRequest {
    #[serde(default)]
    chat_open: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct StatusResponse {
    status: &'static str,
}

/// `GET /`: the widget page. A fresh page load starts with the chat closed.
pub(super) async fn index(jar: SignedCookieJar) -> (SignedCookieJar, Html<&'static str>) {
    (session::set_chat_open(jar, false), Html(INDEX_HTML))
}

/// `POST /update_chat_status`: the widget reports its panel opened or closed.
pub(super) async fn update_chat_status(
    jar: SignedCookieJar,
    Json(req): Json<ChatStatusRequest>,
) -> (SignedCookieJar, Json<StatusResponse>) {
    log::debug!("chat_open = {}", req.chat_open);
    (
        session::set_chat_open(jar, req.chat_open),
        Json(StatusResponse { status: "success" }),
    )
}

/// `POST /chat`: answer one visitor message.
pub(super) async fn chat(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let prompt = build_prompt(&state.institute, &state.knowledge, &req.message);
    match state.generator.generate(&prompt).await {
        Ok(text) => Json(ChatResponse {
            reply: format_reply(text.trim()),
            unread_message: !session::is_chat_open(&jar),
        }),
        Err(e) => {
            log::error!("Gemini API error: {}", e);
            Json(ChatResponse {
                reply: APOLOGY.to_string(),
                unread_message: true,
            })
        }
    }
}
