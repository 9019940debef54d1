//! Power ranger routes.

use crate::handlers::ranger::{create, list, read_by_color, read_by_id};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn ranger_routes(state: AppState) -> Router {
    Router::new()
        .route("/pr", get(list).post(create))
        .route("/pr/id/:id", get(read_by_id))
        .route("/pr/color/:color", get(read_by_color))
        .with_state(state)
}
