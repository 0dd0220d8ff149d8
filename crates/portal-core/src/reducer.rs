//! Pure state transitions: `PortalState × PortalEvent → Vec<PortalEffect>`.

use crate::session::{Completion, Submission};
use crate::{
    ModalDialog, PageKey, PortalEffect, PortalEvent, PortalRole, PortalScreen, PortalSession,
    PortalState,
};

const ENTER_KEY: &str = "Enter";

/// Applies `event` to `state` and returns the effects the controller must run.
///
/// Never fails: validation, precondition and remote errors become inline
/// error text on the owning screen.
pub fn reduce(state: &mut PortalState, event: PortalEvent) -> Vec<PortalEffect> {
    let mut effects = Vec::new();
    let messages = state.locale.messages();
    tracing::debug!(
        event = event.name(),
        screen = state.screen().as_str(),
        role = state.role().as_str(),
        "portal event"
    );

    match event {
        PortalEvent::ChooseRole(role) => {
            select_role(state, role, &mut effects);
            navigate(state, PortalScreen::Login, &mut effects);
        }
        PortalEvent::SelectRoleTab(role) => select_role(state, role, &mut effects),
        PortalEvent::GoToLogin => navigate(state, PortalScreen::Login, &mut effects),
        PortalEvent::BackToLanding => navigate(state, PortalScreen::Landing, &mut effects),
        PortalEvent::IdentityInput(value) => state.session.set_identity_input(value),
        PortalEvent::PasswordInput(value) => state.session.set_password_input(value),
        PortalEvent::SubmitLogin => {
            if state.portal.is_some() {
                return effects;
            }
            match state.session.submit_login(messages) {
                Submission::Ready(request) => {
                    tracing::info!(identity = %request.identity, "login request issued");
                    effects.push(PortalEffect::Login(request));
                    push_render(&mut effects, PortalEffect::RenderScreen);
                }
                Submission::Invalid => push_render(&mut effects, PortalEffect::RenderScreen),
                Submission::Busy | Submission::LoginRequired => log_ignored("submit_login"),
            }
        }
        PortalEvent::LoginCompleted(result) => {
            match state.session.complete_login(result, messages) {
                Completion::Succeeded(identity) => {
                    tracing::info!(identity = %identity, "login accepted, awaiting otp");
                    navigate(state, PortalScreen::OtpVerify, &mut effects);
                    push_render(&mut effects, PortalEffect::RenderScreen);
                }
                Completion::Failed => push_render(&mut effects, PortalEffect::RenderScreen),
                Completion::Stale => log_ignored("login_completed"),
            }
        }
        PortalEvent::OtpCellInput { index, value } => {
            if !state.session.set_otp_cell(index, value) {
                log_ignored("otp_cell_input");
            }
        }
        PortalEvent::VerifyOtp => {
            if state.portal.is_some() {
                return effects;
            }
            match state.session.submit_otp(messages) {
                Submission::Ready(request) => {
                    effects.push(PortalEffect::VerifyOtp(request));
                    push_render(&mut effects, PortalEffect::RenderScreen);
                }
                Submission::Invalid => push_render(&mut effects, PortalEffect::RenderScreen),
                Submission::LoginRequired => require_login(state, &mut effects),
                Submission::Busy => log_ignored("verify_otp"),
            }
        }
        PortalEvent::VerifyCompleted(result) => {
            match state.session.complete_otp(result, messages) {
                Completion::Succeeded(credentials) => {
                    tracing::info!(identity = %credentials.identity, "otp verified");
                    effects.push(PortalEffect::PersistTokens(credentials));
                    open_portal(state, &mut effects);
                }
                Completion::Failed => push_render(&mut effects, PortalEffect::RenderScreen),
                Completion::Stale => log_ignored("verify_completed"),
            }
        }
        PortalEvent::ResendOtp => {
            effects.push(PortalEffect::SuppressDefault);
            if state.portal.is_some() {
                return effects;
            }
            match state.session.submit_resend() {
                Submission::Ready(request) => effects.push(PortalEffect::ResendOtp(request)),
                Submission::LoginRequired => require_login(state, &mut effects),
                Submission::Busy | Submission::Invalid => log_ignored("resend_otp"),
            }
        }
        PortalEvent::ResendCompleted(result) => {
            match state.session.complete_resend(result, messages) {
                Completion::Succeeded(body) => {
                    open_modal(state, messages.resend_otp_title, body, &mut effects)
                }
                Completion::Failed => push_render(&mut effects, PortalEffect::RenderScreen),
                Completion::Stale => log_ignored("resend_completed"),
            }
        }
        PortalEvent::SelectPage(page) => {
            let accepted = state.portal_role().is_some()
                && state
                    .portal
                    .as_mut()
                    .is_some_and(|session| session.select_page(page));
            if accepted {
                push_render(&mut effects, PortalEffect::RenderShell);
                push_render(&mut effects, PortalEffect::RenderPage);
            } else {
                log_ignored("select_page");
            }
        }
        PortalEvent::ToggleChat => {
            if student_widget_active(state) {
                state.chat.toggle();
                push_render(&mut effects, PortalEffect::RenderChatWidget);
            }
        }
        PortalEvent::CloseChat => {
            if student_widget_active(state) {
                state.chat.close();
                push_render(&mut effects, PortalEffect::RenderChatWidget);
            }
        }
        PortalEvent::ChatInput(value) => {
            if student_widget_active(state) {
                state.chat.set_draft(value);
            }
        }
        PortalEvent::SendChat => send_student_chat(state, &mut effects),
        PortalEvent::ChatKeyDown(key) => {
            if key == ENTER_KEY && student_widget_active(state) {
                effects.push(PortalEffect::SuppressDefault);
                send_student_chat(state, &mut effects);
            }
        }
        PortalEvent::SelectConversation(name) => {
            if staff_chat_active(state) && state.staff_chat.select(&name) {
                push_render(&mut effects, PortalEffect::RenderPage);
            }
        }
        PortalEvent::StaffChatInput(value) => {
            if staff_chat_active(state) {
                state.staff_chat.set_draft(value);
            }
        }
        PortalEvent::SendStaffChat => send_staff_chat(state, &mut effects),
        PortalEvent::StaffChatKeyDown(key) => {
            if key == ENTER_KEY && staff_chat_active(state) {
                effects.push(PortalEffect::SuppressDefault);
                send_staff_chat(state, &mut effects);
            }
        }
        PortalEvent::DemoAction(action) => {
            effects.push(PortalEffect::SuppressDefault);
            let body = messages.demo_action_body(&action);
            open_modal(state, messages.demo_action_title, body, &mut effects);
        }
        PortalEvent::DismissModal => {
            if state.modal.take().is_some() {
                push_render(&mut effects, PortalEffect::RenderModal);
            }
        }
        PortalEvent::Logout => {
            tracing::info!(role = state.role().as_str(), "portal logout");
            end_session(state, &mut effects);
            navigate(state, PortalScreen::Landing, &mut effects);
        }
    }

    effects
}

fn select_role(state: &mut PortalState, role: PortalRole, effects: &mut Vec<PortalEffect>) {
    cancel_auth(state, effects);
    if state.portal.is_some() {
        end_session(state, effects);
        navigate(state, PortalScreen::Login, effects);
    }
    state.session.set_role(role);
    push_render(effects, PortalEffect::RenderScreen);
}

fn end_session(state: &mut PortalState, effects: &mut Vec<PortalEffect>) {
    cancel_auth(state, effects);
    state.session.logout();
    if state.portal.take().is_some() {
        push_render(effects, PortalEffect::RenderShell);
        push_render(effects, PortalEffect::RenderPage);
        push_render(effects, PortalEffect::RenderChatWidget);
    }
    effects.push(PortalEffect::ClearTokens);
}

fn cancel_auth(state: &mut PortalState, effects: &mut Vec<PortalEffect>) {
    if let Some(kind) = state.session.cancel_in_flight() {
        tracing::debug!(request = kind.as_str(), "auth request cancelled");
        effects.push(PortalEffect::CancelAuth);
    }
}

fn navigate(state: &mut PortalState, screen: PortalScreen, effects: &mut Vec<PortalEffect>) {
    let Some(previous) = state.router.show(screen) else {
        return;
    };
    state.session.clear_error_for(previous);
    tracing::debug!(
        from = previous.as_str(),
        to = screen.as_str(),
        "screen change"
    );
    push_render(effects, PortalEffect::RenderScreen);
}

fn require_login(state: &mut PortalState, effects: &mut Vec<PortalEffect>) {
    navigate(state, PortalScreen::Login, effects);
    let message = state.locale.messages().login_first;
    state.session.set_login_error(message);
    push_render(effects, PortalEffect::RenderScreen);
}

fn open_portal(state: &mut PortalState, effects: &mut Vec<PortalEffect>) {
    let session = PortalSession::new(state.session.role());
    tracing::info!(
        role = session.role().as_str(),
        page = session.current_page().as_str(),
        "portal opened"
    );
    state.portal = Some(session);
    navigate(state, PortalScreen::Portal, effects);
    push_render(effects, PortalEffect::RenderShell);
    push_render(effects, PortalEffect::RenderPage);
    push_render(effects, PortalEffect::RenderChatWidget);
}

fn open_modal(
    state: &mut PortalState,
    title: &str,
    body: String,
    effects: &mut Vec<PortalEffect>,
) {
    state.modal = Some(ModalDialog {
        title: title.to_string(),
        body,
    });
    push_render(effects, PortalEffect::RenderModal);
}

fn student_widget_active(state: &PortalState) -> bool {
    state.portal_role() == Some(PortalRole::Student)
}

fn staff_chat_active(state: &PortalState) -> bool {
    state.portal_role() == Some(PortalRole::Staff)
        && state.current_page() == Some(PageKey::Chat)
}

fn send_student_chat(state: &mut PortalState, effects: &mut Vec<PortalEffect>) {
    if student_widget_active(state) && state.chat.send() {
        push_render(effects, PortalEffect::RenderChatWidget);
    }
}

fn send_staff_chat(state: &mut PortalState, effects: &mut Vec<PortalEffect>) {
    if staff_chat_active(state) && state.staff_chat.send() {
        push_render(effects, PortalEffect::RenderPage);
    }
}

fn push_render(effects: &mut Vec<PortalEffect>, effect: PortalEffect) {
    if !effects.contains(&effect) {
        effects.push(effect);
    }
}

fn log_ignored(event: &'static str) {
    tracing::debug!(event, "portal event ignored");
}
