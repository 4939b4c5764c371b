//! Move sources for the play session: the HTTP server or the engine in-process.

use crate::api::{MoveRequest, MoveResponse};
use async_trait::async_trait;
use derive_more::{Display, Error};
use oracle_tictactoe::{Board, select_move};
use tracing::{debug, info, instrument};

/// Something that can answer "what does O play here?".
#[async_trait]
pub trait MoveSource: Send + Sync {
    /// Requests O's move for `board`.
    async fn request_move(&self, board: &Board) -> Result<MoveResponse, ClientError>;
}

/// Client for a running server's `POST /api/move`.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestClient {
    /// Creates a client for the server at `base_url`.
    #[instrument]
    pub fn new(base_url: String) -> Self {
        info!("Creating REST client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// The endpoint URL.
    pub fn move_url(&self) -> String {
        format!("{}/api/move", self.base_url)
    }
}

#[async_trait]
impl MoveSource for RestClient {
    #[instrument(skip(self, board), fields(url = %self.move_url()))]
    async fn request_move(&self, board: &Board) -> Result<MoveResponse, ClientError> {
        let response = self
            .client
            .post(self.move_url())
            .json(&MoveRequest::from_board(board))
            .send()
            .await
            .map_err(|e| ClientError::new(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::new(format!(
                "Server returned {}: {}",
                status, body
            )));
        }

        let reply: MoveResponse = response
            .json()
            .await
            .map_err(|e| ClientError::new(format!("Invalid response: {}", e)))?;
        debug!(chosen_cell = reply.chosen_cell, "Server replied");
        Ok(reply)
    }
}

/// Runs the engine in-process, for offline play and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalEngine;

#[async_trait]
impl MoveSource for LocalEngine {
    async fn request_move(&self, board: &Board) -> Result<MoveResponse, ClientError> {
        let analysis = select_move(board).map_err(|e| ClientError::new(e.to_string()))?;
        Ok(MoveResponse::from(&analysis))
    }
}

/// Transport or protocol failure talking to the engine.
#[derive(Debug, Clone, Display, Error)]
#[display("Client error: {} at {}:{}", message, file, line)]
pub struct ClientError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ClientError {
    /// Creates a new client error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
