use giharad_core::sheet::{CharacterSheet, MARKER_SLOTS};
use giharad_db::models::character_sheet::CharacterSheetRow;

use super::{escape, label, layout};

fn definition(term: &str, value: &str) -> String {
    format!("<dt>{}</dt><dd>{}</dd>\n", escape(term), escape(value))
}

/// A marker drawn as filled/empty pips, e.g. `●●○○`.
fn pips(count: i32) -> String {
    let filled = usize::try_from(count).unwrap_or(0).min(MARKER_SLOTS);
    format!("{}{}", "●".repeat(filled), "○".repeat(MARKER_SLOTS - filled))
}

/// A table with one header row and one row per entry.
fn table(headers: &[&str], rows: Vec<Vec<&str>>) -> String {
    if rows.is_empty() {
        return "<p>-</p>\n".to_string();
    }
    let mut out = String::from("<table>\n<tr>");
    for header in headers {
        out.push_str(&format!("<th>{}</th>", escape(header)));
    }
    out.push_str("</tr>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
    out
}

fn header_section(sheet: &CharacterSheet) -> String {
    let mut out = String::from("<section><dl>\n");
    out.push_str(&definition("Jogador", &sheet.jogador));
    out.push_str(&definition("Raça", &sheet.raca));
    out.push_str(&definition("Classe", &sheet.classe));
    out.push_str(&definition("Nível", &sheet.nivel.to_string()));
    out.push_str(&definition("Experiência", &sheet.experiencia.to_string()));
    out.push_str(&definition("Defesa", &sheet.defesa.to_string()));
    out.push_str(&definition("Antecedente", &sheet.antecedente));
    out.push_str(&definition("História", &sheet.historia));
    out.push_str("</dl></section>\n");
    out
}

fn attributes_section(sheet: &CharacterSheet) -> String {
    let scores = [
        ("Força", sheet.forca),
        ("Destreza", sheet.destreza),
        ("Constituição", sheet.constituicao),
        ("Inteligência", sheet.inteligencia),
        ("Sabedoria", sheet.sabedoria),
        ("Carisma", sheet.carisma),
    ];
    let mut out = String::from("<section><h2>Atributos</h2><dl>\n");
    for (name, die) in scores {
        out.push_str(&definition(name, &format!("d{die}")));
    }
    out.push_str("</dl></section>\n");
    out
}

fn resources_section(sheet: &CharacterSheet) -> String {
    let pools = [
        ("Vida", sheet.pv_atual, sheet.pv_max),
        ("Hafa", sheet.ph_atual, sheet.ph_max),
        ("Ações", sheet.pa_atual, sheet.pa_max),
        ("Grima", sheet.pg_atual, sheet.pg_max),
    ];
    let markers = [
        ("Morte", sheet.morte),
        ("Cansaço", sheet.cansaco),
        ("Cicatrizes", sheet.cicatrizes),
    ];
    let mut out = String::from("<section><h2>Recursos</h2><dl>\n");
    for (name, current, max) in pools {
        out.push_str(&definition(name, &format!("{current} / {max}")));
    }
    for (name, count) in markers {
        out.push_str(&definition(name, &pips(count)));
    }
    out.push_str("</dl></section>\n");
    out
}

fn skills_section(sheet: &CharacterSheet) -> String {
    let mut out = String::from("<section><h2>Perícias</h2><dl>\n");
    for (skill, value) in &sheet.pericias {
        out.push_str(&definition(&label(skill), &format!("{value:+}")));
    }
    out.push_str("</dl></section>\n");
    out
}

fn lists_section(sheet: &CharacterSheet) -> String {
    let mut out = String::from("<section><h2>Ataques</h2>\n");
    out.push_str(&table(
        &["Nome", "Atributo", "Acerto", "Dano", "Explosivo", "Margem", "Alcance"],
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
    ));
    out.push_str("</section>\n<section><h2>Habilidades</h2>\n");
    out.push_str(&table(
        &["Nome", "Custo", "Efeito"],
        sheet
            .habilidades
            .iter()
            .map(|h| vec![h.nome.as_str(), h.custo.as_str(), h.efeito.as_str()])
            .collect(),
    ));
    out.push_str("</section>\n<section><h2>Inventário</h2>\n");
    out.push_str(&table(
        &["Nome", "Quantidade", "Espaço"],
        sheet
            .inventario
            .iter()
            .map(|i| vec![i.nome.as_str(), i.quantidade.as_str(), i.espaco.as_str()])
            .collect(),
    ));
    out.push_str("</section>\n");
    out
}

fn magic_section(sheet: &CharacterSheet) -> String {
    let magic = &sheet.conjuracao;
    let mut out = String::from("<section><h2>Magia</h2><dl>\n");
    out.push_str(&definition("Tradição", &magic.tradicao));
    out.push_str(&definition("Escolas", &magic.escolas));
    out.push_str(&definition("Atributo-chave", &magic.atributo_chave));
    out.push_str(&definition("CD", &magic.cd_magia.to_string()));
    for (tier, slots) in sheet.spell_slots().iter().enumerate() {
        out.push_str(&definition(
            &format!("Espaços {}º círculo", tier + 1),
            &slots.to_string(),
        ));
    }
    out.push_str("</dl>\n");
    out.push_str(&table(
        &["Nome", "Círculo", "Alcance", "Efeito"],
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
    out.push_str("</section>\n");
    out
}

/// The read-only sheet page.
pub fn render(row: &CharacterSheetRow) -> String {
    let sheet = &row.sheet;
    let mut body = format!(
        "<p><a href=\"/editar/{id}\">Editar</a></p>\n",
        id = row.id
    );
    body.push_str(&header_section(sheet));
    body.push_str(&attributes_section(sheet));
    body.push_str(&resources_section(sheet));
    body.push_str(&skills_section(sheet));
    body.push_str(&lists_section(sheet));
    body.push_str(&magic_section(sheet));
    body.push_str(&format!(
        "<section><h2>Anotações</h2><pre>{}</pre></section>\n",
        escape(&sheet.anotacoes)
    ));

    layout(&sheet.nome, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pips_show_marker_count() {
        assert_eq!(pips(0), "○○○○");
        assert_eq!(pips(2), "●●○○");
        assert_eq!(pips(4), "●●●●");
        assert_eq!(pips(9), "●●●●");
        assert_eq!(pips(-1), "○○○○");
    }

    #[test]
    fn empty_table_renders_placeholder() {
        assert_eq!(table(&["Nome"], Vec::new()), "<p>-</p>\n");
    }
}
