//! Power ranger handlers: list, lookup by id or color, create.

use crate::error::AppError;
use crate::extractors::{JsonBody, PathParam};
use crate::model::NewPowerRanger;
use crate::response::{created, success_many};
use crate::state::AppState;
use axum::extract::State;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// GET /pr
pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let rangers = state.store.list_all().await?;
    Ok(success_many(rangers))
}

/// GET /pr/id/:id
pub async fn read_by_id(
    State(state): State<AppState>,
    PathParam(id_str): PathParam<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let rangers = state.store.find_by_id(id).await?;
    if rangers.is_empty() {
        return Err(AppError::NotFound(format!("no ranger with id {}", id)));
    }
    Ok(success_many(rangers))
}

/// GET /pr/color/:color
pub async fn read_by_color(
    State(state): State<AppState>,
    PathParam(color): PathParam<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rangers = state.store.find_by_color(&color).await?;
    if rangers.is_empty() {
        return Err(AppError::NotFound(format!("no ranger with color '{}'", color)));
    }
    Ok(success_many(rangers))
}

/// POST /pr — responds with the new id.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewPowerRanger>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = state.store.insert(&body).await?;
    tracing::info!(id, color = %body.color, "ranger created");
    Ok(created(id))
}
