//! Creation and edit form.
//!
//! Input names are exactly the keys the form reconciler reads, so a
//! submitted page round-trips through `sheet_from_form` unchanged.

use giharad_core::form::{
    marker_key, skill_key, slot_key, ABILITY_PREFIX, ATTACK_PREFIX, ITEM_PREFIX, SLOT_LIMIT,
    SPELL_PREFIX,
};
use giharad_core::sheet::{CharacterSheet, MARKERS, MARKER_SLOTS, POOLS, SKILL_NAMES};

use super::{escape, label, layout};

/// Blank slots offered after the filled ones in each list.
const EXTRA_SLOTS: usize = 3;

fn text_input(name: &str, value: &str) -> String {
    format!(
        "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{value}\"></label>\n",
        label = escape(&label(name)),
        value = escape(value),
    )
}

fn number_input(name: &str, value: i32) -> String {
    format!(
        "<label>{label} <input type=\"number\" name=\"{name}\" value=\"{value}\"></label>\n",
        label = escape(&label(name)),
    )
}

fn textarea(name: &str, value: &str) -> String {
    format!(
        "<label>{label}<br><textarea name=\"{name}\" rows=\"4\">{value}</textarea></label>\n",
        label = escape(&label(name)),
        value = escape(value),
    )
}

/// Four checkboxes, the first `count` of them ticked.
fn marker_boxes(marker: &str, count: i32) -> String {
    let mut out = format!("<fieldset><legend>{}</legend>", escape(marker));
    for slot in 1..=MARKER_SLOTS {
        let checked = i32::try_from(slot).is_ok_and(|s| s <= count);
        out.push_str(&format!(
            "<input type=\"checkbox\" name=\"{name}\"{checked}>",
            name = marker_key(marker, slot),
            checked = if checked { " checked" } else { "" },
        ));
    }
    out.push_str("</fieldset>\n");
    out
}

/// Indexed slot inputs for one list: the filled entries first, then a few
/// blank ones.
fn slot_rows(legend: &str, prefix: &str, fields: &[&str], rows: Vec<Vec<&str>>) -> String {
    let total = (rows.len() + EXTRA_SLOTS).min(SLOT_LIMIT);
    let mut out = format!("<fieldset><legend>{}</legend>\n", escape(legend));
    for index in 0..total {
        out.push_str("<div>");
        for (column, field) in fields.iter().enumerate() {
            let value = rows
                .get(index)
                .and_then(|row| row.get(column))
                .copied()
                .unwrap_or("");
            out.push_str(&format!(
                "<input type=\"text\" name=\"{name}\" placeholder=\"{field}\" value=\"{value}\">",
                name = slot_key(prefix, field, index),
                value = escape(value),
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</fieldset>\n");
    out
}

fn list_fields(sheet: &CharacterSheet) -> String {
    let mut out = slot_rows(
        "Ataques",
        ATTACK_PREFIX,
        &["nome", "atributo", "acerto", "dano", "explosivo", "margem", "alcance"],
        sheet
            .ataques
            .iter()
            .map(|a| {
                vec![
                    a.nome.as_str(),
                    a.atributo.as_str(),
                    a.acerto.as_str(),
                    a.dano.as_str(),
                    a.explosivo.as_str(),
                    a.margem.as_str(),
                    a.alcance.as_str(),
                ]
            })
            .collect(),
    );
    out.push_str(&slot_rows(
        "Habilidades",
        ABILITY_PREFIX,
        &["nome", "custo", "efeito"],
        sheet
            .habilidades
            .iter()
            .map(|h| vec![h.nome.as_str(), h.custo.as_str(), h.efeito.as_str()])
            .collect(),
    ));
    out.push_str(&slot_rows(
        "Inventário",
        ITEM_PREFIX,
        &["nome", "quantidade", "espaco"],
        sheet
            .inventario
            .iter()
            .map(|i| vec![i.nome.as_str(), i.quantidade.as_str(), i.espaco.as_str()])
            .collect(),
    ));
    out.push_str(&slot_rows(
        "Magias",
        SPELL_PREFIX,
        &["nome", "circulo", "alcance", "efeito"],
        sheet
            .magias
            .iter()
            .map(|m| {
                vec![
                    m.nome.as_str(),
                    m.circulo.as_str(),
                    m.alcance.as_str(),
                    m.efeito.as_str(),
                ]
            })
            .collect(),
    ));
    out
}

/// Render the sheet form posting to `action`, pre-filled from `sheet`.
pub fn render(title: &str, action: &str, sheet: &CharacterSheet) -> String {
    let mut body = format!("<form method=\"post\" action=\"{}\">\n", escape(action));

    body.push_str("<fieldset><legend>Personagem</legend>\n");
    for (name, value) in [
        ("nome", &sheet.nome),
        ("jogador", &sheet.jogador),
        ("raca", &sheet.raca),
        ("classe", &sheet.classe),
    ] {
        body.push_str(&text_input(name, value));
    }
    body.push_str(&number_input("nivel", sheet.nivel));
    body.push_str(&number_input("experiencia", sheet.experiencia));
    body.push_str(&number_input("defesa", sheet.defesa));
    body.push_str(&textarea("antecedente", &sheet.antecedente));
    body.push_str(&textarea("historia", &sheet.historia));
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset><legend>Atributos</legend>\n");
    for (name, die) in [
        ("forca", sheet.forca),
        ("destreza", sheet.destreza),
        ("constituicao", sheet.constituicao),
        ("inteligencia", sheet.inteligencia),
        ("sabedoria", sheet.sabedoria),
        ("carisma", sheet.carisma),
    ] {
        body.push_str(&number_input(name, die));
    }
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset><legend>Recursos</legend>\n");
    let pool_values = [
        (sheet.pv_max, sheet.pv_atual),
        (sheet.ph_max, sheet.ph_atual),
        (sheet.pa_max, sheet.pa_atual),
        (sheet.pg_max, sheet.pg_atual),
    ];
    for ((max_name, current_name), (max, current)) in POOLS.iter().zip(pool_values) {
        body.push_str(&number_input(max_name, max));
        body.push_str(&number_input(current_name, current));
    }
    let marker_values = [sheet.morte, sheet.cansaco, sheet.cicatrizes];
    for (marker, count) in MARKERS.iter().zip(marker_values) {
        body.push_str(&marker_boxes(marker, count));
    }
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset><legend>Perícias</legend>\n");
    for skill in SKILL_NAMES {
        let value = sheet.pericias.get(*skill).copied().unwrap_or(0);
        body.push_str(&format!(
            "<label>{label} <input type=\"number\" name=\"{name}\" value=\"{value}\"></label>\n",
            label = escape(&label(skill)),
            name = skill_key(skill),
        ));
    }
    body.push_str("</fieldset>\n");

    body.push_str(&list_fields(sheet));

    let magic = &sheet.conjuracao;
    body.push_str("<fieldset><legend>Magia</legend>\n");
    body.push_str(&text_input("tradicao", &magic.tradicao));
    body.push_str(&text_input("escolas", &magic.escolas));
    body.push_str(&text_input("atributo_chave", &magic.atributo_chave));
    body.push_str(&number_input("cd_magia", magic.cd_magia));
    for (tier, slots) in sheet.spell_slots().iter().enumerate() {
        body.push_str(&number_input(&format!("espacos_{}", tier + 1), *slots));
    }
    body.push_str("</fieldset>\n");

    body.push_str(&textarea("anotacoes", &sheet.anotacoes));
    body.push_str("<button type=\"submit\">Salvar</button>\n</form>\n");

    layout(title, &body)
}
