//! Page Content Resolver: a lookup table from `(role, page)` to a body
//! renderer. Combinations missing from the table render nothing.

use leptos::prelude::*;
use portal_core::mock_data::{
    placeholder_heading, student_dashboard, StatusCard, STAFF_PAGE_PENDING_NOTE,
    STUDENT_PAGE_PENDING_NOTE,
};
use portal_core::{
    staff_chat_view_model, PageKey, PortalEvent, PortalRole, StaffLiveChat, UiBinding, UiIntent,
};

use crate::{flag, render_icon, RenderedRegion};

/// Inputs a page renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub role: PortalRole,
    pub page: PageKey,
    pub staff_chat: &'a StaffLiveChat,
}

pub type PageRenderer = fn(&PageContext<'_>) -> RenderedRegion;

const PAGE_TABLE: &[(PortalRole, PageKey, PageRenderer)] = &[
    (
        PortalRole::Student,
        PageKey::Dashboard,
        render_student_dashboard,
    ),
    (PortalRole::Student, PageKey::Visa, render_placeholder),
    (PortalRole::Student, PageKey::Documents, render_placeholder),
    (
        PortalRole::Student,
        PageKey::Appointments,
        render_placeholder,
    ),
    (PortalRole::Staff, PageKey::Dashboard, render_placeholder),
    (PortalRole::Staff, PageKey::Students, render_placeholder),
    (PortalRole::Staff, PageKey::Visa, render_placeholder),
    (PortalRole::Staff, PageKey::Documents, render_placeholder),
    (PortalRole::Staff, PageKey::Appointments, render_placeholder),
    (PortalRole::Staff, PageKey::Chat, render_staff_live_chat),
    (PortalRole::Staff, PageKey::Reports, render_placeholder),
];

pub fn resolve_page(role: PortalRole, page: PageKey) -> Option<PageRenderer> {
    PAGE_TABLE
        .iter()
        .find(|(entry_role, entry_page, _)| *entry_role == role && *entry_page == page)
        .map(|(_, _, renderer)| *renderer)
}

/// Renders the body for `context`, or `None` when the combination has no
/// renderer and the caller should keep its prior body.
pub fn render_page(context: &PageContext<'_>) -> Option<RenderedRegion> {
    resolve_page(context.role, context.page).map(|renderer| renderer(context))
}

fn action_button_id(action: &str) -> String {
    format!("portal-action-{action}")
}

fn action_binding(action: &str) -> UiBinding {
    UiBinding::click(
        action_button_id(action),
        PortalEvent::DemoAction(action.to_string()),
    )
}

fn render_status_card(
    card: &StatusCard,
    detail: String,
    action: &'static str,
    button_label: &'static str,
) -> impl IntoView {
    let pill_class = format!("status-pill pill-{}", card.pill_tone);
    view! {
        <article class="status-card" data-card=card.icon>
            <header>
                {render_icon(card.icon)}
                <h3>{card.title}</h3>
            </header>
            <p class="status-label">{card.label}</p>
            <span class=pill_class>{card.pill}</span>
            <p class="status-detail">{detail}</p>
            <button id=action_button_id(action) class="card-action" data-action=action type="button">
                {button_label}
            </button>
        </article>
    }
}

fn render_student_dashboard(_context: &PageContext<'_>) -> RenderedRegion {
    const VISA_ACTION: &str = "view-visa-status";
    const MEDICAL_ACTION: &str = "view-medical-report";
    const APPOINTMENT_ACTION: &str = "view-appointment-details";
    const UPDATES_ACTION: &str = "view-all-updates";

    let dashboard = student_dashboard();
    let progress = dashboard.visa_progress_percent.to_string();
    let progress_style = format!("width: {progress}%");
    let visa_detail = format!("{progress}% Complete");
    let medical_detail = format!("Completed on {}", dashboard.medical_completed_on);
    let timeline = dashboard
        .timeline
        .iter()
        .map(|step| {
            let class = format!("timeline-step {}", step.state.as_class());
            view! {
                <li class=class>
                    <span class="timeline-marker">{step.marker}</span>
                    <span class="timeline-label">{step.label}</span>
                </li>
            }
        })
        .collect_view();
    let updates = dashboard
        .recent_updates
        .iter()
        .map(|update| {
            view! {
                <li class="recent-update">
                    <span class="update-title">{update.title}</span>
                    <span class="update-age">{update.age}</span>
                </li>
            }
        })
        .collect_view();

    let html = view! {
        <section id="portal-page" data-role="student" data-page="dashboard">
            <h2 id="student-welcome">{dashboard.welcome.clone()}</h2>
            <div class="status-grid">
                {render_status_card(&dashboard.visa, visa_detail, VISA_ACTION, "View Details")}
                {render_status_card(&dashboard.medical, medical_detail, MEDICAL_ACTION, "View Report")}
                <article class="status-card" data-card="appointments">
                    <header>
                        {render_icon("appointments")}
                        <h3>"Next Appointment"</h3>
                    </header>
                    <p class="status-label">{dashboard.next_appointment_title}</p>
                    <p class="status-detail">{dashboard.next_appointment_when}</p>
                    <button
                        id=action_button_id(APPOINTMENT_ACTION)
                        class="card-action"
                        data-action=APPOINTMENT_ACTION
                        type="button"
                    >
                        "View Details"
                    </button>
                </article>
            </div>
            <section class="visa-progress" data-progress=progress.clone()>
                <h3>"Visa Process Timeline"</h3>
                <p class="section-note">"Track your visa application progress"</p>
                <div class="progress-bar">
                    <div class="progress-fill" style=progress_style></div>
                </div>
                <ol class="timeline">{timeline}</ol>
            </section>
            <section class="recent-updates">
                <h3>"Recent Updates"</h3>
                <p class="section-note">"Latest notifications and updates"</p>
                <ul>{updates}</ul>
                <a
                    id=action_button_id(UPDATES_ACTION)
                    class="card-action"
                    data-action=UPDATES_ACTION
                    href="#updates"
                >
                    "View all"
                </a>
            </section>
        </section>
    }
    .to_html();

    let bindings = [VISA_ACTION, MEDICAL_ACTION, APPOINTMENT_ACTION, UPDATES_ACTION]
        .into_iter()
        .map(action_binding)
        .collect();
    RenderedRegion::new(html, bindings)
}

fn render_placeholder(context: &PageContext<'_>) -> RenderedRegion {
    let heading = placeholder_heading(context.role, context.page).unwrap_or_default();
    let note = match context.role {
        PortalRole::Staff => STAFF_PAGE_PENDING_NOTE,
        PortalRole::Student => STUDENT_PAGE_PENDING_NOTE,
    };
    let html = view! {
        <section
            id="portal-page"
            class="placeholder-page"
            data-role=context.role.as_str()
            data-page=context.page.as_str()
        >
            <h2>{heading}</h2>
            <p class="placeholder-note">{note}</p>
        </section>
    }
    .to_html();
    RenderedRegion::new(html, Vec::new())
}

fn conversation_id(index: usize) -> String {
    format!("staff-chat-conversation-{index}")
}

fn render_staff_live_chat(context: &PageContext<'_>) -> RenderedRegion {
    let model = staff_chat_view_model(context.staff_chat);
    let heading = placeholder_heading(context.role, context.page).unwrap_or_default();
    let conversations = model
        .conversations
        .iter()
        .enumerate()
        .map(|(index, conversation)| {
            let class = if conversation.active {
                "conversation active"
            } else {
                "conversation"
            };
            view! {
                <li>
                    <button
                        id=conversation_id(index)
                        class=class
                        data-conversation=conversation.name.clone()
                        aria-selected=flag(conversation.active)
                        type="button"
                    >
                        <span class="conversation-name">{conversation.name.clone()}</span>
                        <span class="conversation-preview">{conversation.preview.clone()}</span>
                    </button>
                </li>
            }
        })
        .collect_view();
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
        <section id="portal-page" data-role="staff" data-page="chat">
            <h2>{heading}</h2>
            <div class="staff-chat">
                <ul id="staff-chat-conversations">{conversations}</ul>
                <div class="staff-chat-thread">
                    <h3 id="staff-chat-active-name">{model.active_name.clone()}</h3>
                    <div id="staff-chat-messages" data-message-count=message_count>
                        {messages}
                    </div>
                    <div class="staff-chat-compose">
                        <input
                            id="staff-chat-input"
                            type="text"
                            placeholder="Type a reply..."
                            value=model.draft.clone()
                        />
                        <button id="staff-chat-send" type="button">"Send"</button>
                    </div>
                </div>
            </div>
        </section>
    }
    .to_html();

    let mut bindings: Vec<UiBinding> = model
        .conversations
        .iter()
        .enumerate()
        .map(|(index, conversation)| {
            UiBinding::click(
                conversation_id(index),
                PortalEvent::SelectConversation(conversation.name.clone()),
            )
        })
        .collect();
    bindings.push(UiBinding::input(
        "staff-chat-input",
        UiIntent::StaffChatDraft,
    ));
    bindings.push(UiBinding::key_down(
        "staff-chat-input",
        UiIntent::StaffChatKey,
    ));
    bindings.push(UiBinding::click("staff-chat-send", PortalEvent::SendStaffChat));
    RenderedRegion::new(html, bindings)
}
