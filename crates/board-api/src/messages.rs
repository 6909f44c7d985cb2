use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info};

use board_types::Message;

use crate::AppState;
use crate::error::ApiError;

pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    // Run blocking store access off the async runtime
    let messages = tokio::task::spawn_blocking(move || state.store.find_all()).await??;

    Ok(Json(messages))
}

/// Any `id` in the request body is discarded; the store assigns one.
pub async fn create_message(
    State(state): State<AppState>,
    Json(mut req): Json<Message>,
) -> Result<impl IntoResponse, ApiError> {
    req.id = None;

    let saved = tokio::task::spawn_blocking(move || state.store.save(req)).await??;

    if let Some(id) = saved.id {
        info!("Message {} created", id);
    }

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Deleting an id that does not exist succeeds with the same status.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let removed = tokio::task::spawn_blocking(move || state.store.delete_by_id(id)).await??;

    if removed {
        info!("Message {} deleted", id);
    } else {
        debug!("Delete of unknown message {} ignored", id);
    }

    Ok(StatusCode::NO_CONTENT)
}
