//! HTTP server: the move endpoint plus the browser frontend.

use crate::api::{MoveRequest, MoveResponse, compact};
use crate::assets::static_asset;
use crate::config::ServerConfig;
use crate::error::ApiError;
use anyhow::{Context, Result};
use axum::body::{Body, Bytes};
use axum::http::Request;
use axum::routing::post;
use axum::{Json, Router};
use derive_new::new;
use oracle_tictactoe::select_move;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

/// Read-only state shared by every handler.
#[derive(Debug, Clone, new)]
pub struct AppState {
    static_dir: Option<PathBuf>,
}

impl AppState {
    /// Directory holding frontend assets, if configured.
    pub fn static_dir(&self) -> Option<&Path> {
        self.static_dir.as_deref()
    }
}

/// Builds the application router.
///
/// `POST /api/move` runs the engine; every other path is a static asset.
pub fn router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState::new(config.static_dir().clone()));
    Router::new()
        .route("/api/move", post(move_handler))
        .fallback(static_asset)
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(state)
}

/// Scores the posted board and returns O's move.
///
/// The body is read raw so that an empty body means an empty board.
#[instrument(skip(body), fields(bytes = body.len()))]
async fn move_handler(body: Bytes) -> Result<Json<MoveResponse>, ApiError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        MoveRequest::default()
    } else {
        serde_json::from_slice::<MoveRequest>(&body)
            .map_err(|e| ApiError::Malformed(e.to_string()))?
    };
    let board = request.board()?;
    debug!(board = %compact(&board), "Analysing board");

    let analysis = select_move(&board)?;
    Ok(Json(MoveResponse::from(&analysis)))
}

/// Binds and serves until Ctrl+C.
#[instrument(skip(config), fields(address = %config.address()))]
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = router(&config);
    let listener = tokio::net::TcpListener::bind(config.address())
        .await
        .with_context(|| format!("Failed to bind {}", config.address()))?;

    match config.static_dir() {
        Some(dir) => info!(static_dir = %dir.display(), "Serving frontend assets"),
        None => info!("No static directory configured, serving default page"),
    }
    info!("Server ready at http://{}/", config.address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
