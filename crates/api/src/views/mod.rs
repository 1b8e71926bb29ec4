//! Server-side HTML rendering.
//!
//! Pages are plain strings assembled from small helpers. Every value taken
//! from a sheet goes through [`escape`] before it reaches the markup.

pub mod form;
pub mod list;
pub mod sheet;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap `body` in the shared page skeleton.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} | Giharad RPG</title>\n\
         </head>\n\
         <body>\n\
         <header><a href=\"/\">Giharad RPG</a></header>\n\
         <main>\n\
         <h1>{title}</h1>\n\
         {body}\n\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// Human label for a column name: `pv_max` becomes `pv max`.
pub(crate) fn label(name: &str) -> String {
    name.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">O'Neil & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#39;Neil &amp; co&lt;/a&gt;"
        );
    }

    #[test]
    fn layout_escapes_title() {
        let page = layout("<script>", "<p>ok</p>");
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("<p>ok</p>"));
    }
}
