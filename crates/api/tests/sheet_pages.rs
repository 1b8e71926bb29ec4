//! HTTP-level integration tests for the server-rendered sheet pages.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{assert_redirects_to_listing, body_text, get, post_form};
use giharad_db::repositories::CharacterSheetRepo;
use sqlx::PgPool;

async fn only_sheet_id(pool: &PgPool) -> i64 {
    let rows = CharacterSheetRepo::list(pool).await.unwrap();
    assert_eq!(rows.len(), 1, "expected exactly one stored sheet");
    rows[0].id
}

// ---------------------------------------------------------------------------
// Listing and forms
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_listing_renders(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Nenhum personagem cadastrado"));
    assert!(html.contains("href=\"/novo\""));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_form_lists_skills(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/novo").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("action=\"/enviar_cadastro\""));
    assert!(html.contains("name=\"pericia_atletismo\""));
    assert!(html.contains("name=\"pericia_vontade\""));
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_initializes_current_vitality_to_max(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/enviar_cadastro",
        &[("nome", "Aria"), ("jogador", "Lia"), ("pv_max", "15")],
    )
    .await;
    assert_redirects_to_listing(&response);

    let id = only_sheet_id(&pool).await;
    let stored = CharacterSheetRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.sheet.nome, "Aria");
    assert_eq!(stored.sheet.pv_max, 15);
    assert_eq!(stored.sheet.pv_atual, 15);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_packs_sparse_attack_slot(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/enviar_cadastro",
        &[("nome", "Borin"), ("ataque_nome_7", "Espada")],
    )
    .await;
    assert_redirects_to_listing(&response);

    let id = only_sheet_id(&pool).await;
    let stored = CharacterSheetRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .unwrap();
    let attacks = &stored.sheet.ataques;
    assert_eq!(attacks.len(), 1);
    assert_eq!(attacks[0].nome, "Espada");
    assert_eq!(attacks[0].acerto, "+0");
    assert_eq!(attacks[0].margem, "20");
    assert_eq!(attacks[0].dano, "-");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_counts_markers_and_skills(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_form(
        app,
        "/enviar_cadastro",
        &[
            ("nome", "Cora"),
            ("morte_1", "on"),
            ("morte_4", "on"),
            ("cicatrizes_2", "on"),
            ("pericia_furtividade", "3"),
            ("pericia_desconhecida", "9"),
            ("forca", "abc"),
        ],
    )
    .await;

    let id = only_sheet_id(&pool).await;
    let sheet = CharacterSheetRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .unwrap()
        .sheet;
    assert_eq!(sheet.morte, 2);
    assert_eq!(sheet.cansaco, 0);
    assert_eq!(sheet.cicatrizes, 1);
    assert_eq!(sheet.pericias["furtividade"], 3);
    assert!(!sheet.pericias.contains_key("desconhecida"));
    assert_eq!(sheet.forca, 4);
}

// ---------------------------------------------------------------------------
// View / edit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_view_and_edit_render_stored_sheet(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_form(app, "/enviar_cadastro", &[("nome", "Dario <o Bravo>")]).await;
    let id = only_sheet_id(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/ficha/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Dario &lt;o Bravo&gt;"));

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/editar/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&format!("action=\"/atualizar_cadastro/{id}\"")));
    assert!(html.contains("value=\"Dario &lt;o Bravo&gt;\""));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_view_missing_redirects_to_listing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    assert_redirects_to_listing(&get(app, "/ficha/999999").await);

    let app = common::build_test_app(pool);
    assert_redirects_to_listing(&get(app, "/editar/999999").await);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_form(
        app,
        "/enviar_cadastro",
        &[("nome", "Eli"), ("jogador", "Ana"), ("item_nome_0", "Corda")],
    )
    .await;
    let id = only_sheet_id(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/atualizar_cadastro/{id}"),
        &[("nome", "Eli II"), ("nivel", "3")],
    )
    .await;
    assert_redirects_to_listing(&response);

    let sheet = CharacterSheetRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .unwrap()
        .sheet;
    assert_eq!(sheet.nome, "Eli II");
    assert_eq!(sheet.nivel, 3);
    assert_eq!(sheet.jogador, "");
    assert!(sheet.inventario.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_redirects_silently(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/atualizar_cadastro/999999", &[("nome", "Ninguém")]).await;

    assert_redirects_to_listing(&response);
    assert!(CharacterSheetRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_sheet(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_form(app, "/enviar_cadastro", &[("nome", "Fim")]).await;
    let id = only_sheet_id(&pool).await;

    let app = common::build_test_app(pool.clone());
    assert_redirects_to_listing(&post_form(app, &format!("/deletar/{id}"), &[]).await);
    assert!(CharacterSheetRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_is_noop(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_form(app, "/enviar_cadastro", &[("nome", "Fica")]).await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/deletar/999999", &[]).await;

    assert_redirects_to_listing(&response);
    assert_eq!(CharacterSheetRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_links_each_sheet(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_form(app, "/enviar_cadastro", &[("nome", "Gaia")]).await;
    let id = only_sheet_id(&pool).await;

    let app = common::build_test_app(pool);
    let html = body_text(get(app, "/").await).await;
    assert!(html.contains(&format!("href=\"/ficha/{id}\"")));
    assert!(html.contains(&format!("action=\"/deletar/{id}\"")));
    assert!(html.contains("Gaia"));
}
