//! HTTP-facing error type.

use crate::api::ErrorBody;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use oracle_tictactoe::{BoardParseError, EngineError};
use tracing::warn;

/// Failure of a `POST /api/move` request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum ApiError {
    /// The body was not valid JSON for a move request.
    #[display("Malformed request body: {}", _0)]
    #[from(skip)]
    Malformed(String),

    /// The board itself was invalid.
    #[display("Invalid board: {}", _0)]
    Board(BoardParseError),

    /// The engine had no square to play.
    #[display("{}", _0)]
    Engine(EngineError),
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Malformed(_) | ApiError::Board(_) => StatusCode::BAD_REQUEST,
            ApiError::Engine(EngineError::NoLegalMove) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "Move request rejected");
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
