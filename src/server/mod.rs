//! HTTP server: chat widget page, chat endpoint, and the chat-open session flag.

mod handlers;
mod session;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::FromRef;
use axum::routing::{get, post};
use axum_extra::extract::cookie::Key;

use crate::core::knowledge::KnowledgeBase;
use crate::core::llm::Generator;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn Generator>,
    pub knowledge: Arc<KnowledgeBase>,
    pub institute: Arc<str>,
    pub key: Key,
}

impl AppState {
    pub fn new(
        generator: Arc<dyn Generator>,
        knowledge: KnowledgeBase,
        institute: &str,
        secret: &str,
    ) -> Self {
        Self {
            generator,
            knowledge: Arc::new(knowledge),
            institute: Arc::from(institute),
            key: session::signing_key(secret),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

/// Build the router with all helpdesk routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/chat", post(handlers::chat))
        .route("/update_chat_status", post(handlers::update_chat_status))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Helpdesk listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}

#[cfg(test)]
mod tests;
