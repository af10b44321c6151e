//! Route table and request handlers.

use super::{
    dto::{BoardResponse, ConfigResponse, SaveBoardRequest, SaveResponse},
    error::ApiError,
};
use crate::board::{domain::BoardMutation, ports::BoardSource, services::BoardStore};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode, header},
    routing::{get, post},
};
use camino::Utf8Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Shared handler dependencies.
pub struct AppState<S: BoardSource> {
    store: Arc<BoardStore<S>>,
    board_file: String,
}

impl<S: BoardSource> AppState<S> {
    /// Creates handler state around a board store.
    #[must_use]
    pub const fn new(store: Arc<BoardStore<S>>, board_file: String) -> Self {
        Self { store, board_file }
    }
}

impl<S: BoardSource> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            board_file: self.board_file.clone(),
        }
    }
}

/// Builds the complete application: API under `/api`, dashboard assets
/// everywhere else.
pub fn router<S: BoardSource + 'static>(state: AppState<S>, assets: &Utf8Path) -> Router {
    Router::new()
        .nest("/api", api_router(state))
        .fallback_service(ServeDir::new(assets))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Builds the JSON API routes.
///
/// - `GET /board`: reload the board from its source
/// - `POST /board`: replace and persist the whole board
/// - `POST /board/mutations`: apply one [`BoardMutation`]
/// - `GET /config`: column order and board file
pub fn api_router<S: BoardSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/board", get(get_board::<S>).post(save_board::<S>))
        .route("/board/mutations", post(apply_mutation::<S>))
        .route("/config", get(get_config::<S>))
        .fallback(not_found)
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

async fn get_board<S: BoardSource>(
    State(state): State<AppState<S>>,
) -> Result<Json<BoardResponse>, ApiError> {
    let board = state.store.load().await.map_err(ApiError::LoadFailed)?;
    Ok(Json(BoardResponse {
        columns: state.store.columns().clone(),
        board,
    }))
}

async fn save_board<S: BoardSource>(
    State(state): State<AppState<S>>,
    payload: Result<Json<SaveBoardRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::MalformedPayload(rejection.body_text()))?;
    state
        .store
        .replace(request.into_snapshot())
        .await
        .map_err(ApiError::SaveFailed)?;
    Ok(Json(SaveResponse { success: true }))
}

async fn apply_mutation<S: BoardSource>(
    State(state): State<AppState<S>>,
    payload: Result<Json<BoardMutation>, JsonRejection>,
) -> Result<Json<BoardResponse>, ApiError> {
    let Json(mutation) =
        payload.map_err(|rejection| ApiError::MalformedPayload(rejection.body_text()))?;
    let board = state
        .store
        .apply(mutation)
        .await
        .map_err(ApiError::SaveFailed)?;
    Ok(Json(BoardResponse {
        columns: state.store.columns().clone(),
        board,
    }))
}

async fn get_config<S: BoardSource>(State(state): State<AppState<S>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        columns: state.store.columns().clone(),
        file: state.board_file.clone(),
    })
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
