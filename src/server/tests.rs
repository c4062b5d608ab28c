use std::sync::{Arc, Mutex};

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use futures::future::BoxFuture;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::handlers::APOLOGY;
use super::{AppState, router};
use crate::core::knowledge::KnowledgeBase;
use crate::core::llm::{ChatError, Generator};

/// Returns a fixed reply (or a failure) and records the prompt it was given.
struct ScriptedGenerator {
    reply: Option<&'static str>,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedGenerator {
    fn replying(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply),
            last_prompt: Mutex::new(None),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            last_prompt: Mutex::new(None),
        })
    }

    fn last_prompt(&self) -> String {
        self.last_prompt.lock().unwrap().clone().unwrap_or_default()
    }
}

impl Generator for ScriptedGenerator {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ChatError>> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        let result = match self.reply {
            Some(text) => Ok(text.to_string()),
            None => Err(ChatError::ApiMessage("quota exceeded".to_string())),
        };
        Box::pin(futures::future::ready(result))
    }
}

fn state(generator: Arc<ScriptedGenerator>) -> AppState {
    AppState::new(
        generator,
        KnowledgeBase::new(json!({ "courses": ["Civil Engineering"] })),
        "ARMIET",
        "test-secret",
    )
}

fn post_json(uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

struct Reply {
    status: StatusCode,
    /// `name=value` part of the Set-Cookie header, if any.
    cookie: Option<String>,
    body: String,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

async fn send(state: &AppState, req: Request<Body>) -> Reply {
    let resp = router(state.clone()).oneshot(req).await.unwrap();
    let status = resp.status();
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    Reply {
        status,
        cookie,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

async fn chat_status_cookie(state: &AppState, open: bool) -> String {
    let reply = send(
        state,
        post_json("/update_chat_status", json!({ "chat_open": open }), None),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!({ "status": "success" }));
    reply.cookie.expect("chat status sets a cookie")
}

#[tokio::test]
async fn chat_formats_reply_and_marks_unread_without_session() {
    let generator = ScriptedGenerator::replying("**Diploma**\n* Civil\n* Mechanical");
    let state = state(generator.clone());

    let reply = send(
        &state,
        post_json("/chat", json!({ "message": "Which courses?" }), None),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.json(),
        json!({
            "reply": "<b>Diploma</b><ul><li>Civil</li><li>Mechanical</li></ul>",
            "unread_message": true
        })
    );
    let prompt = generator.last_prompt();
    assert!(prompt.contains("Student: Which courses?"));
    assert!(prompt.contains("\"Civil Engineering\""));
    assert!(prompt.contains("assistant for ARMIET"));
}

#[tokio::test]
async fn open_chat_reads_reply_immediately() {
    let state = state(ScriptedGenerator::replying("Fees are 50,000."));
    let cookie = chat_status_cookie(&state, true).await;

    let reply = send(
        &state,
        post_json("/chat", json!({ "message": "Fees?" }), Some(&cookie)),
    )
    .await;

    assert_eq!(reply.json()["unread_message"], json!(false));
    assert_eq!(reply.json()["reply"], json!("Fees are 50,000."));
}

#[tokio::test]
async fn closed_chat_marks_reply_unread() {
    let state = state(ScriptedGenerator::replying("Hello"));
    let cookie = chat_status_cookie(&state, false).await;

    let reply = send(
        &state,
        post_json("/chat", json!({ "message": "hi" }), Some(&cookie)),
    )
    .await;

    assert_eq!(reply.json()["unread_message"], json!(true));
}

#[tokio::test]
async fn generation_failure_returns_apology() {
    let state = state(ScriptedGenerator::failing());
    let cookie = chat_status_cookie(&state, true).await;

    let reply = send(
        &state,
        post_json("/chat", json!({ "message": "hi" }), Some(&cookie)),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.json(),
        json!({ "reply": APOLOGY, "unread_message": true })
    );
}

#[tokio::test]
async fn index_serves_page_and_closes_chat() {
    let state = state(ScriptedGenerator::replying("Hello"));
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();

    let page = send(&state, req).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("<!DOCTYPE html>"));
    let cookie = page.cookie.expect("index resets the chat flag");
    assert!(cookie.starts_with("chat_open="));

    let reply = send(
        &state,
        post_json("/chat", json!({ "message": "hi" }), Some(&cookie)),
    )
    .await;
    assert_eq!(reply.json()["unread_message"], json!(true));
}

#[tokio::test]
async fn forged_cookie_is_ignored() {
    let state = state(ScriptedGenerator::replying("Hello"));

    let reply = send(
        &state,
        post_json("/chat", json!({ "message": "hi" }), Some("chat_open=true")),
    )
    .await;

    assert_eq!(reply.json()["unread_message"], json!(true));
}

#[tokio::test]
async fn cookie_signed_with_other_secret_is_ignored() {
    let other = AppState::new(
        ScriptedGenerator::replying("Hello"),
        KnowledgeBase::default(),
        "ARMIET",
        "another-secret",
    );
    let cookie = chat_status_cookie(&other, true).await;
    let state = state(ScriptedGenerator::replying("Hello"));

    let reply = send(
        &state,
        post_json("/chat", json!({ "message": "hi" }), Some(&cookie)),
    )
    .await;

    assert_eq!(reply.json()["unread_message"], json!(true));
}

#[tokio::test]
async fn missing_fields_use_defaults() {
    let generator = ScriptedGenerator::replying("Hello");
    let state = state(generator.clone());

    let status = send(&state, post_json("/update_chat_status", json!({}), None)).await;
    assert_eq!(status.json(), json!({ "status": "success" }));

    let reply = send(&state, post_json("/chat", json!({}), status.cookie.as_deref())).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["unread_message"], json!(true));
    assert!(generator.last_prompt().contains("Student: \nHelpdesk:"));
}
