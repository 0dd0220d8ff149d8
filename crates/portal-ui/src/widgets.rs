use leptos::prelude::*;
use portal_core::{ChatWidgetViewModel, ModalViewModel, PortalEvent, UiBinding, UiIntent};

use crate::{flag, RenderedRegion};

/// Student support widget. Renders nothing when `model` is `None`.
pub fn render_chat_widget(model: Option<&ChatWidgetViewModel>) -> RenderedRegion {
    let Some(model) = model else {
        return RenderedRegion::default();
    };
    let panel_class = if model.open {
        "chat-panel open"
    } else {
        "chat-panel"
    };
    let messages = model
        .messages
        .iter()
        .map(|message| {
            let class = format!("chat-message {}", message.sender_class);
            view! {
                <div class=class>
                    <p class="chat-text">{message.text.clone()}</p>
                    <span class="chat-time">{message.timestamp.clone()}</span>
                </div>
            }
        })
        .collect_view();
    let message_count = model.messages.len().to_string();

    let html = view! {
        <div id="chat-widget" data-open=flag(model.open)>
            <button id="chat-toggle" class="chat-toggle" type="button" aria-expanded=flag(model.open)>
                "Chat"
            </button>
            <div id="chat-panel" class=panel_class aria-hidden=flag(!model.open)>
                <header class="chat-header">
                    <span>{model.title}</span>
                    <button id="chat-close" type="button">"Close"</button>
                </header>
                <div id="chat-messages" data-message-count=message_count>{messages}</div>
                <div class="chat-compose">
                    <input
                        id="chat-input"
                        type="text"
                        placeholder=model.placeholder
                        value=model.draft.clone()
                    />
                    <button id="chat-send" type="button">"Send"</button>
                </div>
            </div>
        </div>
    }
    .to_html();

    let bindings = vec![
        UiBinding::click("chat-toggle", PortalEvent::ToggleChat),
        UiBinding::click("chat-close", PortalEvent::CloseChat),
        UiBinding::input("chat-input", UiIntent::ChatDraft),
        UiBinding::key_down("chat-input", UiIntent::ChatKey),
        UiBinding::click("chat-send", PortalEvent::SendChat),
    ];
    RenderedRegion::new(html, bindings)
}

/// Confirmation dialog; both buttons dismiss it.
pub fn render_modal(model: Option<&ModalViewModel>) -> RenderedRegion {
    let Some(model) = model else {
        return RenderedRegion::default();
    };
    let html = view! {
        <div id="portal-modal" class="modal-backdrop" role="dialog" aria-modal="true">
            <div class="modal">
                <h3 id="portal-modal-title">{model.title.clone()}</h3>
                <p id="portal-modal-body">{model.body.clone()}</p>
                <div class="modal-actions">
                    <button id="portal-modal-cancel" type="button">"Cancel"</button>
                    <button id="portal-modal-ok" type="button">"OK"</button>
                </div>
            </div>
        </div>
    }
    .to_html();
    let bindings = vec![
        UiBinding::click("portal-modal-cancel", PortalEvent::DismissModal),
        UiBinding::click("portal-modal-ok", PortalEvent::DismissModal),
    ];
    RenderedRegion::new(html, bindings)
}
