//! Owns the single `PortalState` and executes reducer effects.
//!
//! Synchronous effects (token storage, region renders) run inside
//! [`PortalController::dispatch`]. Auth requests are queued and only
//! awaited by [`PortalController::settle`], so events that arrive while a
//! request is outstanding still reach the reducer and hit its in-flight
//! guard. A role switch or logout cancels queued requests before any new
//! submission can be queued behind them.

use std::collections::VecDeque;

use portal_auth::{AuthGateway, TokenStore};
use portal_core::{
    chat_widget_view_model, modal_view_model, reduce, shell_view_model, LoginRequest,
    PortalEffect, PortalEvent, PortalLocale, PortalState, ResendOtpRequest, UiTrigger,
    VerifyOtpRequest,
};
use portal_ui::{
    render_chat_widget, render_modal, render_page, render_screen, render_shell, PageContext,
};

use crate::document::{PortalDocument, Region};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AuthCall {
    Login(LoginRequest),
    VerifyOtp(VerifyOtpRequest),
    ResendOtp(ResendOtpRequest),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What the host must do with the DOM event that triggered a dispatch.
pub struct DispatchOutcome {
    pub suppress_default: bool,
}

pub struct PortalController<G, S> {
    state: PortalState,
    gateway: G,
    token_store: S,
    document: PortalDocument,
    pending: VecDeque<AuthCall>,
}

impl<G, S> PortalController<G, S>
where
    G: AuthGateway,
    S: TokenStore,
{
    /// Builds the controller and renders the initial landing screen.
    pub fn new(locale: PortalLocale, gateway: G, token_store: S) -> Self {
        let mut controller = Self {
            state: PortalState::new(locale),
            gateway,
            token_store,
            document: PortalDocument::new(),
            pending: VecDeque::new(),
        };
        controller.render(&PortalEffect::RenderScreen);
        controller
    }

    pub fn state(&self) -> &PortalState {
        &self.state
    }

    pub fn document(&self) -> &PortalDocument {
        &self.document
    }

    pub fn token_store(&self) -> &S {
        &self.token_store
    }

    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    pub fn render_html(&self) -> String {
        self.document.render_html(self.state.locale)
    }

    /// Runs one event through the reducer and executes every synchronous
    /// effect. Auth requests are queued for [`Self::settle`].
    pub fn dispatch(&mut self, event: PortalEvent) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        for effect in reduce(&mut self.state, event) {
            match effect {
                PortalEffect::Login(request) => self.pending.push_back(AuthCall::Login(request)),
                PortalEffect::VerifyOtp(request) => {
                    self.pending.push_back(AuthCall::VerifyOtp(request))
                }
                PortalEffect::ResendOtp(request) => {
                    self.pending.push_back(AuthCall::ResendOtp(request))
                }
                PortalEffect::CancelAuth => {
                    if !self.pending.is_empty() {
                        tracing::debug!(
                            dropped = self.pending.len(),
                            "queued auth requests cancelled"
                        );
                    }
                    self.pending.clear();
                }
                PortalEffect::PersistTokens(credentials) => {
                    if let Err(error) = self.token_store.persist(&credentials) {
                        tracing::warn!(%error, "failed to persist tokens");
                    }
                }
                PortalEffect::ClearTokens => {
                    if let Err(error) = self.token_store.clear() {
                        tracing::warn!(%error, "failed to clear tokens");
                    }
                }
                PortalEffect::SuppressDefault => outcome.suppress_default = true,
                render => self.render(&render),
            }
        }
        outcome
    }

    /// Fires the binding registered for `(element_id, trigger)`, if the
    /// current document has one.
    pub fn dispatch_binding(
        &mut self,
        element_id: &str,
        trigger: UiTrigger,
        payload: Option<&str>,
    ) -> Option<DispatchOutcome> {
        let event = self
            .document
            .find_binding(element_id, trigger)?
            .to_event(payload)?;
        Some(self.dispatch(event))
    }

    /// Awaits every queued auth request and feeds its completion back
    /// through the reducer.
    pub async fn settle(&mut self) {
        while let Some(call) = self.pending.pop_front() {
            let completion = match call {
                AuthCall::Login(request) => PortalEvent::LoginCompleted(
                    self.gateway
                        .login(&request)
                        .await
                        .map_err(|error| error.user_message()),
                ),
                AuthCall::VerifyOtp(request) => PortalEvent::VerifyCompleted(
                    self.gateway
                        .verify_otp(&request)
                        .await
                        .map_err(|error| error.user_message()),
                ),
                AuthCall::ResendOtp(request) => PortalEvent::ResendCompleted(
                    self.gateway
                        .resend_otp(&request)
                        .await
                        .map_err(|error| error.user_message()),
                ),
            };
            self.dispatch(completion);
        }
    }

    pub async fn send(&mut self, event: PortalEvent) -> DispatchOutcome {
        let outcome = self.dispatch(event);
        self.settle().await;
        outcome
    }

    fn render(&mut self, effect: &PortalEffect) {
        let portal_role = self.state.portal_role();
        match effect {
            PortalEffect::RenderScreen => {
                self.document
                    .replace(Region::Screen, render_screen(&self.state));
            }
            PortalEffect::RenderShell => match (portal_role, self.state.current_page()) {
                (Some(role), Some(page)) => self
                    .document
                    .replace(Region::Shell, render_shell(&shell_view_model(role, page))),
                _ => self.document.clear(Region::Shell),
            },
            PortalEffect::RenderPage => match (portal_role, self.state.current_page()) {
                (Some(role), Some(page)) => {
                    let context = PageContext {
                        role,
                        page,
                        staff_chat: &self.state.staff_chat,
                    };
                    match render_page(&context) {
                        Some(rendered) => self.document.replace(Region::Page, rendered),
                        None => tracing::warn!(
                            role = role.as_str(),
                            page = page.as_str(),
                            "no renderer for page; keeping previous content"
                        ),
                    }
                }
                _ => self.document.clear(Region::Page),
            },
            PortalEffect::RenderChatWidget => {
                let model = chat_widget_view_model(&self.state);
                self.document
                    .replace(Region::ChatWidget, render_chat_widget(model.as_ref()));
            }
            PortalEffect::RenderModal => {
                let model = modal_view_model(&self.state);
                self.document
                    .replace(Region::Modal, render_modal(model.as_ref()));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PortalController;
    use crate::document::Region;
    use portal_auth::{MemoryTokenStore, MockAuthGateway, TokenStore};
    use portal_core::{PageKey, PortalEvent, PortalLocale, PortalRole, PortalScreen, UiTrigger};

    fn controller() -> PortalController<MockAuthGateway, MemoryTokenStore> {
        PortalController::new(
            PortalLocale::English,
            MockAuthGateway::default(),
            MemoryTokenStore::new(),
        )
    }

    async fn log_in(
        controller: &mut PortalController<MockAuthGateway, MemoryTokenStore>,
        role: PortalRole,
    ) {
        controller.dispatch(PortalEvent::ChooseRole(role));
        controller.dispatch(PortalEvent::IdentityInput("ST123456".to_string()));
        controller.dispatch(PortalEvent::PasswordInput("secret1".to_string()));
        controller.send(PortalEvent::SubmitLogin).await;
        for (index, digit) in "123456".chars().enumerate() {
            controller.dispatch(PortalEvent::OtpCellInput {
                index,
                value: digit.to_string(),
            });
        }
        controller.send(PortalEvent::VerifyOtp).await;
    }

    #[test]
    fn unit_new_controller_renders_landing_screen() {
        let controller = controller();
        assert_eq!(controller.state().screen(), PortalScreen::Landing);
        assert!(controller
            .document()
            .find_binding("landing-go-login", UiTrigger::Click)
            .is_some());
        assert!(controller.document().region(Region::Shell).is_empty());
    }

    #[tokio::test]
    async fn functional_login_flow_persists_tokens_and_renders_portal() {
        let mut controller = controller();
        log_in(&mut controller, PortalRole::Student).await;

        assert_eq!(controller.state().screen(), PortalScreen::Portal);
        assert_eq!(
            controller
                .token_store()
                .get("accessToken")
                .expect("store")
                .as_deref(),
            Some("mock-access-ST123456")
        );
        let page = controller.document().region(Region::Page);
        assert!(page.html.contains("portal-action-view-visa-status"));
        assert!(!controller.document().region(Region::ChatWidget).is_empty());
    }

    #[tokio::test]
    async fn functional_auth_request_waits_for_settle() {
        let mut controller = controller();
        controller.dispatch(PortalEvent::ChooseRole(PortalRole::Student));
        controller.dispatch(PortalEvent::IdentityInput("ST123456".to_string()));
        controller.dispatch(PortalEvent::PasswordInput("secret1".to_string()));
        controller.dispatch(PortalEvent::SubmitLogin);
        controller.dispatch(PortalEvent::SubmitLogin);
        assert_eq!(controller.pending_requests(), 1);
        assert_eq!(controller.state().screen(), PortalScreen::Login);

        controller.settle().await;
        assert_eq!(controller.pending_requests(), 0);
        assert_eq!(controller.state().screen(), PortalScreen::OtpVerify);
    }

    #[tokio::test]
    async fn regression_repeated_renders_do_not_accumulate_bindings() {
        let mut controller = controller();
        log_in(&mut controller, PortalRole::Student).await;
        let baseline = controller.document().binding_count();
        for _ in 0..3 {
            controller.dispatch(PortalEvent::ToggleChat);
            controller.dispatch(PortalEvent::SelectPage(PageKey::Visa));
            controller.dispatch(PortalEvent::SelectPage(PageKey::Dashboard));
        }
        controller.dispatch(PortalEvent::CloseChat);
        assert_eq!(controller.document().binding_count(), baseline);
    }

    #[tokio::test]
    async fn functional_logout_clears_portal_regions_and_tokens() {
        let mut controller = controller();
        log_in(&mut controller, PortalRole::Staff).await;
        assert!(controller.document().region(Region::ChatWidget).is_empty());

        let outcome = controller
            .dispatch_binding("portal-logout", UiTrigger::Click, None)
            .expect("logout binding");
        assert!(!outcome.suppress_default);
        assert_eq!(controller.state().screen(), PortalScreen::Landing);
        assert!(controller.document().region(Region::Shell).is_empty());
        assert!(controller.document().region(Region::Page).is_empty());
        assert!(controller
            .token_store()
            .load()
            .expect("store")
            .is_empty());
    }

    #[tokio::test]
    async fn functional_demo_action_binding_suppresses_default() {
        let mut controller = controller();
        log_in(&mut controller, PortalRole::Student).await;
        let outcome = controller
            .dispatch_binding("portal-action-view-visa-status", UiTrigger::Click, None)
            .expect("action binding");
        assert!(outcome.suppress_default);
        assert!(controller
            .document()
            .region(Region::Modal)
            .html
            .contains("view-visa-status"));

        controller
            .dispatch_binding("portal-modal-ok", UiTrigger::Click, None)
            .expect("dismiss binding");
        assert!(controller.document().region(Region::Modal).is_empty());
    }

    #[tokio::test]
    async fn regression_wrong_code_keeps_otp_screen_with_error() {
        let mut controller = controller();
        controller.dispatch(PortalEvent::ChooseRole(PortalRole::Student));
        controller.dispatch(PortalEvent::IdentityInput("ST123456".to_string()));
        controller.dispatch(PortalEvent::PasswordInput("secret1".to_string()));
        controller.send(PortalEvent::SubmitLogin).await;
        for index in 0..6 {
            controller.dispatch(PortalEvent::OtpCellInput {
                index,
                value: "9".to_string(),
            });
        }
        controller.send(PortalEvent::VerifyOtp).await;

        assert_eq!(controller.state().screen(), PortalScreen::OtpVerify);
        assert_eq!(
            controller.state().session.otp_error(),
            "Invalid or expired OTP code"
        );
        assert!(controller.token_store().load().expect("store").is_empty());
    }

    #[tokio::test]
    async fn regression_role_switch_drops_queued_login_response() {
        let mut controller = controller();
        controller.dispatch(PortalEvent::ChooseRole(PortalRole::Student));
        controller.dispatch(PortalEvent::IdentityInput("ST111111".to_string()));
        controller.dispatch(PortalEvent::PasswordInput("secret1".to_string()));
        controller.dispatch(PortalEvent::SubmitLogin);
        assert_eq!(controller.pending_requests(), 1);

        controller
            .dispatch_binding("login-tab-staff", UiTrigger::Click, None)
            .expect("staff tab binding");
        assert_eq!(controller.pending_requests(), 0);
        controller.dispatch(PortalEvent::IdentityInput("SF999999".to_string()));
        controller.dispatch(PortalEvent::PasswordInput("secret1".to_string()));
        controller.dispatch(PortalEvent::SubmitLogin);
        assert_eq!(controller.pending_requests(), 1);

        controller.settle().await;
        let state = controller.state();
        assert_eq!(state.role(), PortalRole::Staff);
        assert_eq!(state.screen(), PortalScreen::OtpVerify);
        assert_eq!(state.session.pending_login(), Some("SF999999"));
    }

    #[test]
    fn regression_unknown_binding_is_not_dispatched() {
        let mut controller = controller();
        assert!(controller
            .dispatch_binding("portal-logout", UiTrigger::Click, None)
            .is_none());
    }
}
