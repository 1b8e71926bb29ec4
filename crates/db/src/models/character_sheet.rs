//! Persisted character sheet model.

use std::collections::BTreeMap;

use giharad_core::sheet::{
    Ability, Attack, CharacterSheet, InventoryItem, Spell, Spellcasting,
};
use giharad_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{FromRow, Row};

/// A row from the `personagens` table.
///
/// Serializes flat: the sheet's fields sit next to `id` and the timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterSheetRow {
    pub id: DbId,
    #[serde(flatten)]
    pub sheet: CharacterSheet,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for CharacterSheetRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let Json(pericias): Json<BTreeMap<String, i32>> = row.try_get("pericias")?;
        let Json(ataques): Json<Vec<Attack>> = row.try_get("ataques")?;
        let Json(habilidades): Json<Vec<Ability>> = row.try_get("habilidades")?;
        let Json(inventario): Json<Vec<InventoryItem>> = row.try_get("inventario")?;
        let Json(magias): Json<Vec<Spell>> = row.try_get("magias")?;

        let sheet = CharacterSheet {
            nome: row.try_get("nome")?,
            jogador: row.try_get("jogador")?,
            raca: row.try_get("raca")?,
            classe: row.try_get("classe")?,
            nivel: row.try_get("nivel")?,
            antecedente: row.try_get("antecedente")?,
            historia: row.try_get("historia")?,
            forca: row.try_get("forca")?,
            destreza: row.try_get("destreza")?,
            constituicao: row.try_get("constituicao")?,
            inteligencia: row.try_get("inteligencia")?,
            sabedoria: row.try_get("sabedoria")?,
            carisma: row.try_get("carisma")?,
            defesa: row.try_get("defesa")?,
            experiencia: row.try_get("experiencia")?,
            pv_max: row.try_get("pv_max")?,
            pv_atual: row.try_get("pv_atual")?,
            ph_max: row.try_get("ph_max")?,
            ph_atual: row.try_get("ph_atual")?,
            pa_max: row.try_get("pa_max")?,
            pa_atual: row.try_get("pa_atual")?,
            pg_max: row.try_get("pg_max")?,
            pg_atual: row.try_get("pg_atual")?,
            morte: row.try_get("morte")?,
            cansaco: row.try_get("cansaco")?,
            cicatrizes: row.try_get("cicatrizes")?,
            pericias,
            ataques,
            habilidades,
            inventario,
            magias,
            anotacoes: row.try_get("anotacoes")?,
            conjuracao: Spellcasting {
                tradicao: row.try_get("tradicao")?,
                escolas: row.try_get("escolas")?,
                atributo_chave: row.try_get("atributo_chave")?,
                cd_magia: row.try_get("cd_magia")?,
                espacos_1: row.try_get("espacos_1")?,
                espacos_2: row.try_get("espacos_2")?,
                espacos_3: row.try_get("espacos_3")?,
                espacos_4: row.try_get("espacos_4")?,
                espacos_5: row.try_get("espacos_5")?,
                espacos_6: row.try_get("espacos_6")?,
            },
        };

        Ok(Self {
            id: row.try_get("id")?,
            sheet,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
