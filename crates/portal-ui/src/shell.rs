use leptos::prelude::*;
use portal_core::{AvatarGlyph, PortalEvent, ShellViewModel, UiBinding};

use crate::{flag, render_icon, RenderedRegion};

fn menu_item_id(page: &str) -> String {
    format!("portal-menu-{page}")
}

fn render_avatar(avatar: AvatarGlyph) -> AnyView {
    match avatar {
        AvatarGlyph::Letter(letter) => {
            view! { <span class="avatar avatar-letter">{letter.to_string()}</span> }.into_any()
        }
        AvatarGlyph::Icon(key) => view! { <span class="avatar">{render_icon(key)}</span> }.into_any(),
    }
}

/// Renders the portal chrome for one `(role, current_page)` pair.
///
/// Every menu entry is bound to a page-change event; the logout button is
/// bound to [`PortalEvent::Logout`].
pub fn render_shell(model: &ShellViewModel) -> RenderedRegion {
    let mode_class = format!("portal-shell {}", model.mode_class);
    let chip_class = format!("portal-chip {}", model.chip_class);
    let current_page = model.current_page.as_str();
    let notification_count = model.notification_count.to_string();
    let menu = model
        .menu
        .iter()
        .map(|item| {
            let page = item.page.as_str();
            let class = if item.active {
                "menu-item active"
            } else {
                "menu-item"
            };
            view! {
                <li>
                    <button
                        id=menu_item_id(page)
                        class=class
                        data-page=page
                        aria-current=flag(item.active)
                        type="button"
                    >
                        {render_icon(item.icon)}
                        <span class="menu-label">{item.label}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    let html = view! {
        <div
            id="portal-shell"
            class=mode_class
            data-role=model.role.as_str()
            data-current-page=current_page
        >
            <header id="portal-header">
                <div class="portal-titles">
                    <span id="portal-type" class=chip_class>{model.portal_type}</span>
                    <h1 id="portal-title">{model.portal_title}</h1>
                    <p id="portal-subtitle">{model.portal_subtitle}</p>
                </div>
                <div class="portal-user">
                    <span id="portal-notifications" class="notification-bell">
                        {render_icon("bell")}
                        <span class="notification-count">{notification_count}</span>
                    </span>
                    {render_avatar(model.avatar)}
                    <div class="portal-user-text">
                        <span id="portal-user-name">{model.user_name}</span>
                        <span id="portal-user-role">{model.user_role}</span>
                    </div>
                    <button id="portal-logout" type="button">"Logout"</button>
                </div>
            </header>
            <nav id="portal-menu" aria-label="Portal navigation">
                <ul>{menu}</ul>
            </nav>
        </div>
    }
    .to_html();

    let mut bindings: Vec<UiBinding> = model
        .menu
        .iter()
        .map(|item| {
            UiBinding::click(
                menu_item_id(item.page.as_str()),
                PortalEvent::SelectPage(item.page),
            )
        })
        .collect();
    bindings.push(UiBinding::click("portal-logout", PortalEvent::Logout));
    RenderedRegion::new(html, bindings)
}
