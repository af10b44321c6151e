//! HTTP error mapping and server start-up errors.

use super::dto::{ErrorResponse, SaveResponse};
use crate::board::{domain::ColumnSetError, services::BoardStoreError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::io;
use thiserror::Error;

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not valid JSON or has the wrong shape.
    #[error("malformed request payload: {0}")]
    MalformedPayload(String),

    /// The board could not be read.
    #[error("board could not be loaded: {0}")]
    LoadFailed(#[source] BoardStoreError),

    /// The board could not be written.
    #[error("board could not be saved: {0}")]
    SaveFailed(#[source] BoardStoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedPayload(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),
            Self::LoadFailed(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::SaveFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveResponse { success: false }),
            )
                .into_response(),
        }
    }
}

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The configured columns are invalid.
    #[error("invalid column configuration: {0}")]
    Columns(#[from] ColumnSetError),

    /// The board file's directory could not be opened.
    #[error("cannot open board file location: {0}")]
    BoardLocation(#[source] io::Error),

    /// The initial board load failed.
    #[error("initial board load failed: {0}")]
    InitialLoad(#[from] BoardStoreError),

    /// The listening socket could not be bound.
    #[error("cannot bind listener: {0}")]
    Bind(#[source] io::Error),

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
