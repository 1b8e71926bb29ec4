//! JSON endpoints for direct API access.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sheet_api;
use crate::state::AppState;

/// JSON routes.
///
/// ```text
/// POST   /api/atualizar_campo/{id}     -> patch_fields
/// POST   /personagem/                  -> create
/// GET    /api/personagem/              -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/atualizar_campo/{id}", post(sheet_api::patch_fields))
        .route("/personagem/", post(sheet_api::create))
        .route("/api/personagem/", get(sheet_api::list))
}
