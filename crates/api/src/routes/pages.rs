//! Server-rendered pages and the form posts behind them.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// HTML routes mounted at the root.
///
/// ```text
/// GET    /                             -> list
/// GET    /novo                         -> new_form
/// POST   /enviar_cadastro              -> create
/// GET    /ficha/{id}                   -> show
/// GET    /editar/{id}                  -> edit_form
/// POST   /atualizar_cadastro/{id}      -> update
/// POST   /deletar/{id}                 -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list))
        .route("/novo", get(pages::new_form))
        .route("/enviar_cadastro", post(pages::create))
        .route("/ficha/{id}", get(pages::show))
        .route("/editar/{id}", get(pages::edit_form))
        .route("/atualizar_cadastro/{id}", post(pages::update))
        .route("/deletar/{id}", post(pages::delete))
}
