//! Leptos SSR renderers for the two-role portal.
//!
//! Every renderer is a pure function from core view models to an HTML
//! fragment plus the handler bindings for the nodes in that fragment.

use leptos::prelude::*;
use portal_core::mock_data::icon_file;
use portal_core::UiBinding;

mod document;
mod pages;
mod screens;
mod shell;
mod widgets;


pub use document::{render_document, DocumentParts};
pub use pages::{render_page, resolve_page, PageContext, PageRenderer};
pub use screens::render_screen;
pub use shell::render_shell;
pub use widgets::{render_chat_widget, render_modal};

const ICON_BASE_PATH: &str = "assets/icons";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Markup for one document region and the handlers bound inside it.
pub struct RenderedRegion {
    pub html: String,
    pub bindings: Vec<UiBinding>,
}

impl RenderedRegion {
    pub fn new(html: String, bindings: Vec<UiBinding>) -> Self {
        Self { html, bindings }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Icon by asset key; keys without artwork render an empty placeholder span.
pub fn render_icon(key: &str) -> AnyView {
    match icon_file(key) {
        Some(file) => {
            let src = format!("{ICON_BASE_PATH}/{file}");
            view! { <img class="icon" data-icon=key.to_string() src=src alt="" /> }.into_any()
        }
        None => view! { <span class="icon icon-placeholder" data-icon=key.to_string()></span> }
            .into_any(),
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
