// ============================================================================
// MARKDOWN -> HTML para los consejos del chatbot
// ============================================================================
// El HTML crudo del Markdown se escapa y los enlaces con esquemas
// ejecutables se neutralizan: el resultado va directo a innerHTML.
// ============================================================================

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Renderizar Markdown a HTML apto para mostrar
pub fn render_markdown_safe(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        // push_html escapa el texto, así que el HTML crudo se muestra literal
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_lowercase();

    if BLOCKED_SCHEMES.iter().any(|scheme| normalized.starts_with(scheme)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}
