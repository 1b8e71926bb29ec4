//! JSON handlers for character sheets.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use giharad_core::error::CoreError;
use giharad_core::form::normalize_slots;
use giharad_core::patch::{apply_patch, patch_object};
use giharad_core::sheet::CharacterSheet;
use giharad_core::types::DbId;
use giharad_db::models::character_sheet::CharacterSheetRow;
use giharad_db::repositories::CharacterSheetRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// In-band result of a field patch. A missing sheet is reported here
/// rather than through the HTTP status.
#[derive(Debug, Serialize)]
#[serde(tag = "status")]
pub enum PatchResponse {
    #[serde(rename = "sucesso")]
    Applied { campos: Vec<String> },
    #[serde(rename = "erro")]
    Failed { mensagem: String },
}

impl PatchResponse {
    fn not_found(id: DbId) -> Self {
        let err = CoreError::NotFound {
            entity: "Personagem",
            id,
        };
        Self::Failed {
            mensagem: err.to_string(),
        }
    }
}

/// POST /api/atualizar_campo/{id}
///
/// Applies each `field: value` pair of the body to the stored sheet.
/// Numeric fields are coerced, unknown fields skipped.
pub async fn patch_fields(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<PatchResponse>> {
    let fields = patch_object(&body)?;

    let Some(row) = CharacterSheetRepo::find_by_id(&state.pool, id).await? else {
        tracing::debug!(id, "Patch target not found");
        return Ok(Json(PatchResponse::not_found(id)));
    };

    let mut sheet = row.sheet;
    let report = apply_patch(&mut sheet, fields);
    if !report.ignored.is_empty() {
        tracing::debug!(id, ignored = ?report.ignored, "Ignored patch fields");
    }

    if CharacterSheetRepo::replace(&state.pool, id, &sheet)
        .await?
        .is_none()
    {
        // Deleted between the read and the write.
        return Ok(Json(PatchResponse::not_found(id)));
    }

    tracing::info!(id, campos = ?report.applied, "Character sheet patched");
    Ok(Json(PatchResponse::Applied {
        campos: report.applied,
    }))
}

/// POST /personagem/
pub async fn create(
    State(state): State<AppState>,
    Json(mut sheet): Json<CharacterSheet>,
) -> AppResult<(StatusCode, Json<CharacterSheetRow>)> {
    normalize_slots(&mut sheet);
    let row = CharacterSheetRepo::create(&state.pool, &sheet).await?;
    tracing::info!(id = row.id, nome = %row.sheet.nome, "Character sheet created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/personagem/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CharacterSheetRow>>> {
    let rows = CharacterSheetRepo::list(&state.pool).await?;
    Ok(Json(rows))
}
