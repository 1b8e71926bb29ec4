//! Form reconciler: builds a [`CharacterSheet`] from a flat form submission.
//!
//! Scalar fields are read by column name. List entries arrive as indexed
//! slots (`ataque_nome_3`, `ataque_dano_3`, ...), markers as four checkbox
//! keys each (`morte_1` .. `morte_4`) and skills as `pericia_{name}`.

use std::collections::{BTreeMap, HashMap};

use crate::coerce::{coerce_int, is_checked};
use crate::sheet::{
    Ability, Attack, CharacterSheet, InventoryItem, Spell, Spellcasting, DEFAULT_ATTRIBUTE,
    DEFAULT_DEFENSE, DEFAULT_KEY_ATTRIBUTE, DEFAULT_LEVEL, DEFAULT_SPELL_DC, DEFAULT_VITALITY,
    EMPTY_VALUE, MARKER_SLOTS, SKILL_NAMES,
};

/// A decoded `application/x-www-form-urlencoded` body.
pub type FormFields = HashMap<String, String>;

/// Slot indices scanned per list: `0..SLOT_LIMIT`.
pub const SLOT_LIMIT: usize = 100;

/// Form key prefix for attack slots.
pub const ATTACK_PREFIX: &str = "ataque";
/// Form key prefix for ability slots.
pub const ABILITY_PREFIX: &str = "habilidade";
/// Form key prefix for inventory slots.
pub const ITEM_PREFIX: &str = "item";
/// Form key prefix for spell slots.
pub const SPELL_PREFIX: &str = "magia";
/// Form key prefix for skill values.
pub const SKILL_PREFIX: &str = "pericia";

/// Form key of one slot field, e.g. `slot_key("ataque", "nome", 7)` is
/// `ataque_nome_7`.
pub fn slot_key(prefix: &str, field: &str, index: usize) -> String {
    format!("{prefix}_{field}_{index}")
}

/// Form key of one marker checkbox, `slot` in `1..=MARKER_SLOTS`.
pub fn marker_key(marker: &str, slot: usize) -> String {
    format!("{marker}_{slot}")
}

/// Form key of one skill value.
pub fn skill_key(skill: &str) -> String {
    format!("{SKILL_PREFIX}_{skill}")
}

/// Value of `key` as submitted, or `None` when absent or whitespace-only.
fn non_empty<'a>(form: &'a FormFields, key: &str) -> Option<&'a str> {
    form.get(key)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

fn text_or(form: &FormFields, key: &str, default: &str) -> String {
    non_empty(form, key).unwrap_or(default).to_string()
}

fn int_or(form: &FormFields, key: &str, default: i32) -> i32 {
    coerce_int(form.get(key).map(String::as_str), default)
}

/// One populated slot of an indexed list.
struct Slot<'a> {
    form: &'a FormFields,
    prefix: &'static str,
    index: usize,
}

impl Slot<'_> {
    fn field(&self, name: &str, default: &str) -> String {
        text_or(self.form, &slot_key(self.prefix, name, self.index), default)
    }
}

/// Collect every slot whose `nome` key is non-empty, in ascending index
/// order. Empty slots are skipped, so the output is densely packed.
fn extract_slots<T>(
    form: &FormFields,
    prefix: &'static str,
    build: impl Fn(&Slot<'_>, String) -> T,
) -> Vec<T> {
    (0..SLOT_LIMIT)
        .filter_map(|index| {
            let nome = non_empty(form, &slot_key(prefix, "nome", index))?.to_string();
            Some(build(&Slot { form, prefix, index }, nome))
        })
        .collect()
}

pub fn extract_attacks(form: &FormFields) -> Vec<Attack> {
    extract_slots(form, ATTACK_PREFIX, |slot, nome| Attack {
        nome,
        atributo: slot.field("atributo", EMPTY_VALUE),
        acerto: slot.field("acerto", "+0"),
        dano: slot.field("dano", EMPTY_VALUE),
        explosivo: slot.field("explosivo", EMPTY_VALUE),
        margem: slot.field("margem", "20"),
        alcance: slot.field("alcance", EMPTY_VALUE),
    })
}

pub fn extract_abilities(form: &FormFields) -> Vec<Ability> {
    extract_slots(form, ABILITY_PREFIX, |slot, nome| Ability {
        nome,
        custo: slot.field("custo", EMPTY_VALUE),
        efeito: slot.field("efeito", EMPTY_VALUE),
    })
}

pub fn extract_inventory(form: &FormFields) -> Vec<InventoryItem> {
    extract_slots(form, ITEM_PREFIX, |slot, nome| InventoryItem {
        nome,
        quantidade: slot.field("quantidade", "1"),
        espaco: slot.field("espaco", "0"),
    })
}

pub fn extract_spells(form: &FormFields) -> Vec<Spell> {
    extract_slots(form, SPELL_PREFIX, |slot, nome| Spell {
        nome,
        circulo: slot.field("circulo", "1"),
        alcance: slot.field("alcance", EMPTY_VALUE),
        efeito: slot.field("efeito", EMPTY_VALUE),
    })
}

fn prune_slots<T>(items: &mut Vec<T>, nome: impl Fn(&T) -> &str) {
    items.retain(|item| !nome(item).trim().is_empty());
    items.truncate(SLOT_LIMIT);
}

/// Drop list entries the edit form cannot carry: entries with a blank
/// `nome` and anything past [`SLOT_LIMIT`]. Applied to sheets written as
/// JSON so an edit round-trip keeps every stored entry.
pub fn normalize_slots(sheet: &mut CharacterSheet) {
    prune_slots(&mut sheet.ataques, |a| a.nome.as_str());
    prune_slots(&mut sheet.habilidades, |h| h.nome.as_str());
    prune_slots(&mut sheet.inventario, |i| i.nome.as_str());
    prune_slots(&mut sheet.magias, |m| m.nome.as_str());
}

/// Number of set checkboxes among `{marker}_1` .. `{marker}_4`.
pub fn count_markers(form: &FormFields, marker: &str) -> i32 {
    let set = (1..=MARKER_SLOTS)
        .filter(|slot| is_checked(form.get(&marker_key(marker, *slot)).map(String::as_str)))
        .count();
    // At most MARKER_SLOTS, which always fits.
    set as i32
}

/// Skill values for the fixed skill list. Unknown skill keys are ignored and
/// missing or malformed values become 0.
pub fn reconcile_skills(form: &FormFields) -> BTreeMap<String, i32> {
    SKILL_NAMES
        .iter()
        .map(|skill| (skill.to_string(), int_or(form, &skill_key(skill), 0)))
        .collect()
}

/// Build a complete sheet from a form submission, defaulting every field
/// the form leaves out.
///
/// A pool's current value defaults to its submitted maximum, so a new
/// character starts at full resources.
pub fn sheet_from_form(form: &FormFields) -> CharacterSheet {
    let pv_max = int_or(form, "pv_max", DEFAULT_VITALITY);
    let ph_max = int_or(form, "ph_max", 0);
    let pa_max = int_or(form, "pa_max", 0);
    let pg_max = int_or(form, "pg_max", 0);

    CharacterSheet {
        nome: text_or(form, "nome", ""),
        jogador: text_or(form, "jogador", ""),
        raca: text_or(form, "raca", ""),
        classe: text_or(form, "classe", ""),
        nivel: int_or(form, "nivel", DEFAULT_LEVEL),
        antecedente: text_or(form, "antecedente", ""),
        historia: text_or(form, "historia", ""),

        forca: int_or(form, "forca", DEFAULT_ATTRIBUTE),
        destreza: int_or(form, "destreza", DEFAULT_ATTRIBUTE),
        constituicao: int_or(form, "constituicao", DEFAULT_ATTRIBUTE),
        inteligencia: int_or(form, "inteligencia", DEFAULT_ATTRIBUTE),
        sabedoria: int_or(form, "sabedoria", DEFAULT_ATTRIBUTE),
        carisma: int_or(form, "carisma", DEFAULT_ATTRIBUTE),

        defesa: int_or(form, "defesa", DEFAULT_DEFENSE),
        experiencia: int_or(form, "experiencia", 0),

        pv_max,
        pv_atual: int_or(form, "pv_atual", pv_max),
        ph_max,
        ph_atual: int_or(form, "ph_atual", ph_max),
        pa_max,
        pa_atual: int_or(form, "pa_atual", pa_max),
        pg_max,
        pg_atual: int_or(form, "pg_atual", pg_max),

        morte: count_markers(form, "morte"),
        cansaco: count_markers(form, "cansaco"),
        cicatrizes: count_markers(form, "cicatrizes"),

        pericias: reconcile_skills(form),
        ataques: extract_attacks(form),
        habilidades: extract_abilities(form),
        inventario: extract_inventory(form),
        magias: extract_spells(form),
        anotacoes: text_or(form, "anotacoes", ""),

        conjuracao: Spellcasting {
            tradicao: text_or(form, "tradicao", ""),
            escolas: text_or(form, "escolas", ""),
            atributo_chave: text_or(form, "atributo_chave", DEFAULT_KEY_ATTRIBUTE),
            cd_magia: int_or(form, "cd_magia", DEFAULT_SPELL_DC),
            espacos_1: int_or(form, "espacos_1", 0),
            espacos_2: int_or(form, "espacos_2", 0),
            espacos_3: int_or(form, "espacos_3", 0),
            espacos_4: int_or(form, "espacos_4", 0),
            espacos_5: int_or(form, "espacos_5", 0),
            espacos_6: int_or(form, "espacos_6", 0),
        },
    }
}
