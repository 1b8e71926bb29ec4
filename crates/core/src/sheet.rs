//! Character sheet schema.
//!
//! Field names double as database column names, form keys and JSON keys,
//! so they keep the table-top vocabulary (`forca`, `pv_max`, `ataques`).
//! Every struct deserializes leniently: a missing field takes its default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default die size for the six ability scores.
pub const DEFAULT_ATTRIBUTE: i32 = 4;

/// Default level of a new character.
pub const DEFAULT_LEVEL: i32 = 1;

/// Default defense value.
pub const DEFAULT_DEFENSE: i32 = 10;

/// Default maximum (and current) vitality.
pub const DEFAULT_VITALITY: i32 = 10;

/// Default spell save DC.
pub const DEFAULT_SPELL_DC: i32 = 10;

/// Default key attribute for spellcasting.
pub const DEFAULT_KEY_ATTRIBUTE: &str = "Inteligência";

/// Placeholder used by list fields that carry no value.
pub const EMPTY_VALUE: &str = "-";

/// Number of checkbox slots behind each marker.
pub const MARKER_SLOTS: usize = 4;

/// Bounded counters derived from checkbox slots.
pub const MARKERS: &[&str] = &["morte", "cansaco", "cicatrizes"];

/// Resource pools as `(max, current)` field pairs.
pub const POOLS: &[(&str, &str)] = &[
    ("pv_max", "pv_atual"),
    ("ph_max", "ph_atual"),
    ("pa_max", "pa_atual"),
    ("pg_max", "pg_atual"),
];

/// The fixed skill list, in display order.
pub const SKILL_NAMES: &[&str] = &[
    "acrobacia",
    "adestramento",
    "arcanismo",
    "atletismo",
    "atuacao",
    "diplomacia",
    "enganacao",
    "fortitude",
    "furtividade",
    "historia",
    "intimidacao",
    "intuicao",
    "investigacao",
    "medicina",
    "natureza",
    "ocultismo",
    "oficio",
    "percepcao",
    "persuasao",
    "prestidigitacao",
    "reflexos",
    "religiao",
    "sobrevivencia",
    "tatica",
    "vontade",
];

/// Every integer field addressable by name.
pub const INT_FIELDS: &[&str] = &[
    "nivel",
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
    "cd_magia",
    "espacos_1",
    "espacos_2",
    "espacos_3",
    "espacos_4",
    "espacos_5",
    "espacos_6",
];

/// Every free-text field addressable by name.
pub const TEXT_FIELDS: &[&str] = &[
    "nome",
    "jogador",
    "raca",
    "classe",
    "antecedente",
    "historia",
    "anotacoes",
    "tradicao",
    "escolas",
    "atributo_chave",
];

/// A skill map with every known skill at 0.
pub fn default_skill_map() -> BTreeMap<String, i32> {
    SKILL_NAMES.iter().map(|name| (name.to_string(), 0)).collect()
}

fn empty_value() -> String {
    EMPTY_VALUE.to_string()
}

/// One attack slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attack {
    pub nome: String,
    pub atributo: String,
    pub acerto: String,
    pub dano: String,
    /// Whether the damage die explodes on a crit.
    pub explosivo: String,
    /// Lowest natural roll that counts as a critical hit.
    pub margem: String,
    pub alcance: String,
}

impl Default for Attack {
    fn default() -> Self {
        Self {
            nome: String::new(),
            atributo: empty_value(),
            acerto: "+0".to_string(),
            dano: empty_value(),
            explosivo: empty_value(),
            margem: "20".to_string(),
            alcance: empty_value(),
        }
    }
}

/// One ability slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ability {
    pub nome: String,
    pub custo: String,
    pub efeito: String,
}

impl Default for Ability {
    fn default() -> Self {
        Self {
            nome: String::new(),
            custo: empty_value(),
            efeito: empty_value(),
        }
    }
}

/// One inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    pub nome: String,
    pub quantidade: String,
    /// Carrying space the item occupies.
    pub espaco: String,
}

impl Default for InventoryItem {
    fn default() -> Self {
        Self {
            nome: String::new(),
            quantidade: "1".to_string(),
            espaco: "0".to_string(),
        }
    }
}

/// One spell slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spell {
    pub nome: String,
    /// Spell tier.
    pub circulo: String,
    pub alcance: String,
    pub efeito: String,
}

impl Default for Spell {
    fn default() -> Self {
        Self {
            nome: String::new(),
            circulo: "1".to_string(),
            alcance: empty_value(),
            efeito: empty_value(),
        }
    }
}

/// Spellcasting sub-profile. Flattened into the sheet on the wire and in
/// the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spellcasting {
    pub tradicao: String,
    pub escolas: String,
    pub atributo_chave: String,
    pub cd_magia: i32,
    /// Maximum spell slots per tier, 1 through 6.
    pub espacos_1: i32,
    pub espacos_2: i32,
    pub espacos_3: i32,
    pub espacos_4: i32,
    pub espacos_5: i32,
    pub espacos_6: i32,
}

impl Default for Spellcasting {
    fn default() -> Self {
        Self {
            tradicao: String::new(),
            escolas: String::new(),
            atributo_chave: DEFAULT_KEY_ATTRIBUTE.to_string(),
            cd_magia: DEFAULT_SPELL_DC,
            espacos_1: 0,
            espacos_2: 0,
            espacos_3: 0,
            espacos_4: 0,
            espacos_5: 0,
            espacos_6: 0,
        }
    }
}

/// A full character sheet, without its storage identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSheet {
    pub nome: String,
    pub jogador: String,
    pub raca: String,
    pub classe: String,
    pub nivel: i32,
    pub antecedente: String,
    pub historia: String,

    // Ability scores, as die sizes.
    pub forca: i32,
    pub destreza: i32,
    pub constituicao: i32,
    pub inteligencia: i32,
    pub sabedoria: i32,
    pub carisma: i32,

    pub defesa: i32,
    pub experiencia: i32,

    // Pools. current <= max is expected but never enforced.
    pub pv_max: i32,
    pub pv_atual: i32,
    pub ph_max: i32,
    pub ph_atual: i32,
    pub pa_max: i32,
    pub pa_atual: i32,
    pub pg_max: i32,
    pub pg_atual: i32,

    // Markers, each in [0, MARKER_SLOTS].
    pub morte: i32,
    pub cansaco: i32,
    pub cicatrizes: i32,

    pub pericias: BTreeMap<String, i32>,
    pub ataques: Vec<Attack>,
    pub habilidades: Vec<Ability>,
    pub inventario: Vec<InventoryItem>,
    pub magias: Vec<Spell>,
    pub anotacoes: String,

    #[serde(flatten)]
    pub conjuracao: Spellcasting,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            nome: String::new(),
            jogador: String::new(),
            raca: String::new(),
            classe: String::new(),
            nivel: DEFAULT_LEVEL,
            antecedente: String::new(),
            historia: String::new(),
            forca: DEFAULT_ATTRIBUTE,
            destreza: DEFAULT_ATTRIBUTE,
            constituicao: DEFAULT_ATTRIBUTE,
            inteligencia: DEFAULT_ATTRIBUTE,
            sabedoria: DEFAULT_ATTRIBUTE,
            carisma: DEFAULT_ATTRIBUTE,
            defesa: DEFAULT_DEFENSE,
            experiencia: 0,
            pv_max: DEFAULT_VITALITY,
            pv_atual: DEFAULT_VITALITY,
            ph_max: 0,
            ph_atual: 0,
            pa_max: 0,
            pa_atual: 0,
            pg_max: 0,
            pg_atual: 0,
            morte: 0,
            cansaco: 0,
            cicatrizes: 0,
            pericias: default_skill_map(),
            ataques: Vec::new(),
            habilidades: Vec::new(),
            inventario: Vec::new(),
            magias: Vec::new(),
            anotacoes: String::new(),
            conjuracao: Spellcasting::default(),
        }
    }
}

impl CharacterSheet {
    /// Look up an integer field by its column name.
    pub fn int_field_mut(&mut self, name: &str) -> Option<&mut i32> {
        let field = match name {
            "nivel" => &mut self.nivel,
            "forca" => &mut self.forca,
            "destreza" => &mut self.destreza,
            "constituicao" => &mut self.constituicao,
            "inteligencia" => &mut self.inteligencia,
            "sabedoria" => &mut self.sabedoria,
            "carisma" => &mut self.carisma,
            "defesa" => &mut self.defesa,
            "experiencia" => &mut self.experiencia,
            "pv_max" => &mut self.pv_max,
            "pv_atual" => &mut self.pv_atual,
            "ph_max" => &mut self.ph_max,
            "ph_atual" => &mut self.ph_atual,
            "pa_max" => &mut self.pa_max,
            "pa_atual" => &mut self.pa_atual,
            "pg_max" => &mut self.pg_max,
            "pg_atual" => &mut self.pg_atual,
            "morte" => &mut self.morte,
            "cansaco" => &mut self.cansaco,
            "cicatrizes" => &mut self.cicatrizes,
            "cd_magia" => &mut self.conjuracao.cd_magia,
            "espacos_1" => &mut self.conjuracao.espacos_1,
            "espacos_2" => &mut self.conjuracao.espacos_2,
            "espacos_3" => &mut self.conjuracao.espacos_3,
            "espacos_4" => &mut self.conjuracao.espacos_4,
            "espacos_5" => &mut self.conjuracao.espacos_5,
            "espacos_6" => &mut self.conjuracao.espacos_6,
            _ => return None,
        };
        Some(field)
    }

    /// Look up a free-text field by its column name.
    pub fn text_field_mut(&mut self, name: &str) -> Option<&mut String> {
        let field = match name {
            "nome" => &mut self.nome,
            "jogador" => &mut self.jogador,
            "raca" => &mut self.raca,
            "classe" => &mut self.classe,
            "antecedente" => &mut self.antecedente,
            "historia" => &mut self.historia,
            "anotacoes" => &mut self.anotacoes,
            "tradicao" => &mut self.conjuracao.tradicao,
            "escolas" => &mut self.conjuracao.escolas,
            "atributo_chave" => &mut self.conjuracao.atributo_chave,
            _ => return None,
        };
        Some(field)
    }

    /// Spell slot maxima for tiers 1 through 6.
    pub fn spell_slots(&self) -> [i32; 6] {
        let c = &self.conjuracao;
        [
            c.espacos_1,
            c.espacos_2,
            c.espacos_3,
            c.espacos_4,
            c.espacos_5,
            c.espacos_6,
        ]
    }
}
