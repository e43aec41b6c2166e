//! Liveness endpoint for external uptime monitors

use std::net::SocketAddr;

use axum::{routing::any, Router};

use crate::application::errors::BotError;

/// Body returned for every request
pub const ALIVE_BODY: &str = "✅ Bot is running!";

/// `/` with any method, and anything else that reaches the server, answers 200 with a fixed body
pub fn router() -> Router {
    Router::new().route("/", any(alive)).fallback(alive)
}

async fn alive() -> &'static str {
    ALIVE_BODY
}

/// Serve the liveness router on all interfaces until the process exits
pub async fn serve(port: u16) -> Result<(), BotError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| BotError::Network(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Liveness endpoint listening on http://{}", addr);

    axum::serve(listener, router())
        .await
        .map_err(|e| BotError::Network(e.to_string()))
}
