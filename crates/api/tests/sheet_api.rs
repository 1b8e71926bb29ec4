//! HTTP-level integration tests for the JSON sheet endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use giharad_db::repositories::CharacterSheetRepo;
use serde_json::json;
use sqlx::PgPool;

async fn create_sheet(pool: &PgPool, body: serde_json::Value) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/personagem/", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Plain JSON create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_201_with_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/personagem/", json!({"nome": "Aria", "forca": 8})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["nome"], "Aria");
    assert_eq!(json["forca"], 8);
    assert_eq!(json["destreza"], 4);
    assert_eq!(json["pv_max"], 10);
    assert_eq!(json["atributo_chave"], "Inteligência");
    assert_eq!(json["pericias"]["atletismo"], 0);
    assert!(json["ataques"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_drops_unnamed_list_entries(pool: PgPool) {
    let id = create_sheet(
        &pool,
        json!({"nome": "Hana", "magias": [{"nome": ""}, {"nome": "Luz"}]}),
    )
    .await;

    let sheet = CharacterSheetRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .unwrap()
        .sheet;
    assert_eq!(sheet.magias.len(), 1);
    assert_eq!(sheet.magias[0].nome, "Luz");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_all_sheets(pool: PgPool) {
    create_sheet(&pool, json!({"nome": "Um"})).await;
    create_sheet(&pool, json!({"nome": "Dois"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/personagem/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["nome"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Um", "Dois"]);
}

// ---------------------------------------------------------------------------
// Partial patch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_bad_number_stores_zero_and_succeeds(pool: PgPool) {
    let id = create_sheet(&pool, json!({"nome": "Borin"})).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/atualizar_campo/{id}"),
        json!({"forca": "abc"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "sucesso");
    assert_eq!(json["campos"], json!(["forca"]));

    let stored = CharacterSheetRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.sheet.forca, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_mixed_fields(pool: PgPool) {
    let id = create_sheet(&pool, json!({"nome": "Cora"})).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/atualizar_campo/{id}"),
        json!({
            "pv_atual": 4,
            "anotacoes": "Perdeu o escudo",
            "pericias": {"atletismo": "2"},
            "ataques": [{"nome": "Lança", "dano": "1d8"}],
            "voar": true
        }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["status"], "sucesso");
    assert!(!json["campos"]
        .as_array()
        .unwrap()
        .contains(&json!("voar")));

    let sheet = CharacterSheetRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .unwrap()
        .sheet;
    assert_eq!(sheet.pv_atual, 4);
    assert_eq!(sheet.anotacoes, "Perdeu o escudo");
    assert_eq!(sheet.pericias.len(), 1);
    assert_eq!(sheet.pericias["atletismo"], 2);
    assert_eq!(sheet.ataques[0].nome, "Lança");
    assert_eq!(sheet.ataques[0].margem, "20");
    assert_eq!(sheet.nome, "Cora");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_missing_sheet_reports_error_in_band(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/atualizar_campo/999999", json!({"forca": 6})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "erro");
    assert_eq!(json["mensagem"], "Personagem não encontrado");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_non_object_body_is_rejected(pool: PgPool) {
    let id = create_sheet(&pool, json!({"nome": "Dario"})).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, &format!("/api/atualizar_campo/{id}"), json!([1, 2])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
