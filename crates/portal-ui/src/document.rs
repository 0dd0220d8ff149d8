use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Already-rendered region markup assembled into one page.
pub struct DocumentParts<'a> {
    pub lang: &'a str,
    pub screen: &'a str,
    pub shell: &'a str,
    pub page: &'a str,
    pub chat_widget: &'a str,
    pub modal: &'a str,
}

/// Wraps region markup in a standalone HTML document.
pub fn render_document(parts: &DocumentParts<'_>) -> String {
    let body = view! {
        <main id="portal-app">
            <div id="portal-screen-region" inner_html=parts.screen.to_string()></div>
            <div id="portal-shell-region" inner_html=parts.shell.to_string()></div>
            <div id="portal-page-region" inner_html=parts.page.to_string()></div>
            <div id="portal-chat-region" inner_html=parts.chat_widget.to_string()></div>
            <div id="portal-modal-region" inner_html=parts.modal.to_string()></div>
        </main>
    }
    .to_html();
    format!(
        "<!DOCTYPE html><html lang=\"{}\"><head><meta charset=\"utf-8\" /><title>Student Portal</title><link rel=\"stylesheet\" href=\"assets/portal.css\" /></head><body>{body}</body></html>",
        parts.lang
    )
}
