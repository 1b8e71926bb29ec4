use giharad_db::models::character_sheet::CharacterSheetRow;

use super::{escape, layout};

/// The listing page: one row per sheet with view, edit and delete actions.
pub fn render(rows: &[CharacterSheetRow]) -> String {
    let mut body = String::from("<p><a href=\"/novo\">Novo personagem</a></p>\n");

    if rows.is_empty() {
        body.push_str("<p>Nenhum personagem cadastrado.</p>\n");
        return layout("Personagens", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>Nome</th><th>Jogador</th><th>Raça</th>\
         <th>Classe</th><th>Nível</th><th></th></tr></thead>\n<tbody>\n",
    );
    for row in rows {
        let sheet = &row.sheet;
        body.push_str(&format!(
            "<tr><td><a href=\"/ficha/{id}\">{nome}</a></td><td>{jogador}</td>\
             <td>{raca}</td><td>{classe}</td><td>{nivel}</td>\
             <td><a href=\"/editar/{id}\">Editar</a> \
             <form method=\"post\" action=\"/deletar/{id}\" style=\"display:inline\">\
             <button type=\"submit\">Excluir</button></form></td></tr>\n",
            id = row.id,
            nome = escape(&sheet.nome),
            jogador = escape(&sheet.jogador),
            raca = escape(&sheet.raca),
            classe = escape(&sheet.classe),
            nivel = sheet.nivel,
        ));
    }
    body.push_str("</tbody>\n</table>\n");

    layout("Personagens", &body)
}
