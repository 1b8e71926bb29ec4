//! Repository for the `personagens` table.

use giharad_core::sheet::CharacterSheet;
use giharad_core::types::DbId;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres};

use crate::models::character_sheet::CharacterSheetRow;

/// Writable sheet columns, in the order [`bind_sheet`] binds them.
const SHEET_COLUMNS: &[&str] = &[
    "nome",
    "jogador",
    "raca",
    "classe",
    "nivel",
    "antecedente",
    "historia",
    "forca",
    "destreza",
    "constituicao",
    "inteligencia",
    "sabedoria",
    "carisma",
    "defesa",
    "experiencia",
    "pv_max",
    "pv_atual",
    "ph_max",
    "ph_atual",
    "pa_max",
    "pa_atual",
    "pg_max",
    "pg_atual",
    "morte",
    "cansaco",
    "cicatrizes",
    "pericias",
    "ataques",
    "habilidades",
    "inventario",
    "magias",
    "anotacoes",
    "tradicao",
    "escolas",
    "atributo_chave",
    "cd_magia",
    "espacos_1",
    "espacos_2",
    "espacos_3",
    "espacos_4",
    "espacos_5",
    "espacos_6",
];

type SheetQuery<'q> = QueryAs<'q, Postgres, CharacterSheetRow, PgArguments>;

/// Bind every writable column of `sheet`, in [`SHEET_COLUMNS`] order.
fn bind_sheet<'q>(query: SheetQuery<'q>, sheet: &'q CharacterSheet) -> SheetQuery<'q> {
    let magic = &sheet.conjuracao;
    query
        .bind(&sheet.nome)
        .bind(&sheet.jogador)
        .bind(&sheet.raca)
        .bind(&sheet.classe)
        .bind(sheet.nivel)
        .bind(&sheet.antecedente)
        .bind(&sheet.historia)
        .bind(sheet.forca)
        .bind(sheet.destreza)
        .bind(sheet.constituicao)
        .bind(sheet.inteligencia)
        .bind(sheet.sabedoria)
        .bind(sheet.carisma)
        .bind(sheet.defesa)
        .bind(sheet.experiencia)
        .bind(sheet.pv_max)
        .bind(sheet.pv_atual)
        .bind(sheet.ph_max)
        .bind(sheet.ph_atual)
        .bind(sheet.pa_max)
        .bind(sheet.pa_atual)
        .bind(sheet.pg_max)
        .bind(sheet.pg_atual)
        .bind(sheet.morte)
        .bind(sheet.cansaco)
        .bind(sheet.cicatrizes)
        .bind(Json(&sheet.pericias))
        .bind(Json(&sheet.ataques))
        .bind(Json(&sheet.habilidades))
        .bind(Json(&sheet.inventario))
        .bind(Json(&sheet.magias))
        .bind(&sheet.anotacoes)
        .bind(&magic.tradicao)
        .bind(&magic.escolas)
        .bind(&magic.atributo_chave)
        .bind(magic.cd_magia)
        .bind(magic.espacos_1)
        .bind(magic.espacos_2)
        .bind(magic.espacos_3)
        .bind(magic.espacos_4)
        .bind(magic.espacos_5)
        .bind(magic.espacos_6)
}

/// Full column list for `RETURNING` / `SELECT` clauses.
fn returning_columns() -> String {
    format!("id, {}, created_at, updated_at", SHEET_COLUMNS.join(", "))
}

/// Provides CRUD operations for character sheets.
pub struct CharacterSheetRepo;

impl CharacterSheetRepo {
    /// Insert a new sheet, returning the stored row with its assigned id.
    pub async fn create(
        pool: &PgPool,
        sheet: &CharacterSheet,
    ) -> Result<CharacterSheetRow, sqlx::Error> {
        let placeholders = (1..=SHEET_COLUMNS.len())
            .map(|n| format!("${n}"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "INSERT INTO personagens ({}) VALUES ({placeholders}) RETURNING {}",
            SHEET_COLUMNS.join(", "),
            returning_columns(),
        );
        bind_sheet(sqlx::query_as::<_, CharacterSheetRow>(&query), sheet)
            .fetch_one(pool)
            .await
    }

    /// Find a sheet by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterSheetRow>, sqlx::Error> {
        let query = format!("SELECT {} FROM personagens WHERE id = $1", returning_columns());
        sqlx::query_as::<_, CharacterSheetRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every sheet, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<CharacterSheetRow>, sqlx::Error> {
        let query = format!("SELECT {} FROM personagens ORDER BY id ASC", returning_columns());
        sqlx::query_as::<_, CharacterSheetRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every writable column of a sheet.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        sheet: &CharacterSheet,
    ) -> Result<Option<CharacterSheetRow>, sqlx::Error> {
        let assignments = SHEET_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "UPDATE personagens SET {assignments} WHERE id = $1 RETURNING {}",
            returning_columns(),
        );
        bind_sheet(sqlx::query_as::<_, CharacterSheetRow>(&query).bind(id), sheet)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a sheet by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM personagens WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
