//! Handlers for the server-rendered pages.
//!
//! A sheet that does not exist never produces an error page: every route
//! that needs one redirects back to the listing instead.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use giharad_core::form::{sheet_from_form, FormFields};
use giharad_core::sheet::CharacterSheet;
use giharad_core::types::DbId;
use giharad_db::repositories::CharacterSheetRepo;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// 303 back to the listing.
fn to_listing() -> Redirect {
    Redirect::to("/")
}

/// GET /
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let rows = CharacterSheetRepo::list(&state.pool).await?;
    Ok(Html(views::list::render(&rows)))
}

/// GET /novo
pub async fn new_form() -> Html<String> {
    Html(views::form::render(
        "Novo personagem",
        "/enviar_cadastro",
        &CharacterSheet::default(),
    ))
}

/// POST /enviar_cadastro
pub async fn create(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> AppResult<Redirect> {
    let sheet = sheet_from_form(&fields);
    let row = CharacterSheetRepo::create(&state.pool, &sheet).await?;
    tracing::info!(id = row.id, nome = %row.sheet.nome, "Character sheet created");
    Ok(to_listing())
}

/// GET /ficha/{id}
pub async fn show(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    match CharacterSheetRepo::find_by_id(&state.pool, id).await? {
        Some(row) => Ok(Html(views::sheet::render(&row)).into_response()),
        None => {
            tracing::debug!(id, "Sheet not found, redirecting to listing");
            Ok(to_listing().into_response())
        }
    }
}

/// GET /editar/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    match CharacterSheetRepo::find_by_id(&state.pool, id).await? {
        Some(row) => {
            let title = format!("Editar {}", row.sheet.nome);
            let action = format!("/atualizar_cadastro/{id}");
            Ok(Html(views::form::render(&title, &action, &row.sheet)).into_response())
        }
        None => {
            tracing::debug!(id, "Sheet not found, redirecting to listing");
            Ok(to_listing().into_response())
        }
    }
}

/// POST /atualizar_cadastro/{id}
///
/// Replaces every field from the submitted form.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(fields): Form<FormFields>,
) -> AppResult<Redirect> {
    let sheet = sheet_from_form(&fields);
    match CharacterSheetRepo::replace(&state.pool, id, &sheet).await? {
        Some(_) => tracing::info!(id, "Character sheet replaced"),
        None => tracing::debug!(id, "Sheet not found, nothing replaced"),
    }
    Ok(to_listing())
}

/// POST /deletar/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    if CharacterSheetRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Character sheet deleted");
    } else {
        tracing::debug!(id, "Sheet not found, nothing deleted");
    }
    Ok(to_listing())
}
