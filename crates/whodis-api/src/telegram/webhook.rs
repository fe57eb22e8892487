//! Webhook delivery mode.
//!
//! Registers the public URL with Telegram, then serves an axum app that
//! accepts update POSTs. Each update is handled in a spawned task and the
//! route acknowledges immediately, so Telegram never retries a slow
//! oracle call.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::error;

use super::dispatch;
use super::types::Update;
use crate::state::AppState;

/// Register the webhook and serve updates until Ctrl+C/SIGTERM.
pub async fn serve(state: AppState, public_url: &str) -> anyhow::Result<()> {
    state.telegram.set_webhook(public_url).await?;

    let addr = format!(
        "{}:{}",
        state.config.telegram.host, state.config.telegram.port
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "webhook listener bound");

    let router = Router::new()
        .route("/", post(receive_update))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(crate::shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// POST / - receive one Telegram update.
async fn receive_update(State(state): State<AppState>, Json(update): Json<Update>) -> &'static str {
    let Some(message) = update.message else {
        return "ok";
    };

    tokio::spawn(async move {
        if let Err(err) = dispatch::handle_message(&state, &message).await {
            error!(chat_id = message.chat.id, error = %err, "update handling failed");
        }
    });
    "ok"
}

/// GET /health - liveness probe.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
