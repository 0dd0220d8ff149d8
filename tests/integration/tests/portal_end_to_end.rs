use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use portal_auth::{AuthGateway, AuthGatewayError, FileTokenStore, MemoryTokenStore, TokenStore};
use portal_core::{
    LoginGrant, LoginRequest, PageKey, PortalEvent, PortalLocale, PortalRole, PortalScreen,
    ResendOtpRequest, TokenGrant, UiTrigger, VerifyOtpRequest,
};
use portal_shell::{PortalController, Region};
use tempfile::tempdir;
use tokio::sync::Mutex as AsyncMutex;

#[derive(Debug, Clone, PartialEq, Eq)]
enum RecordedCall {
    Login(LoginRequest),
    VerifyOtp(VerifyOtpRequest),
    ResendOtp(ResendOtpRequest),
}

#[derive(Default)]
struct ScriptedGateway {
    logins: AsyncMutex<VecDeque<Result<LoginGrant, AuthGatewayError>>>,
    verifications: AsyncMutex<VecDeque<Result<TokenGrant, AuthGatewayError>>>,
    resends: AsyncMutex<VecDeque<Result<Option<String>, AuthGatewayError>>>,
    calls: AsyncMutex<Vec<RecordedCall>>,
}

impl ScriptedGateway {
    async fn push_login(&self, result: Result<LoginGrant, AuthGatewayError>) {
        self.logins.lock().await.push_back(result);
    }

    async fn push_verify(&self, result: Result<TokenGrant, AuthGatewayError>) {
        self.verifications.lock().await.push_back(result);
    }

    async fn push_resend(&self, result: Result<Option<String>, AuthGatewayError>) {
        self.resends.lock().await.push_back(result);
    }

    async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }
}

fn exhausted() -> AuthGatewayError {
    AuthGatewayError::Denied("scripted response queue exhausted".to_string())
}

#[async_trait]
impl AuthGateway for ScriptedGateway {
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, AuthGatewayError> {
        self.calls
            .lock()
            .await
            .push(RecordedCall::Login(request.clone()));
        self.logins.lock().await.pop_front().unwrap_or_else(|| Err(exhausted()))
    }

    async fn verify_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<TokenGrant, AuthGatewayError> {
        self.calls
            .lock()
            .await
            .push(RecordedCall::VerifyOtp(request.clone()));
        self.verifications
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(exhausted()))
    }

    async fn resend_otp(
        &self,
        request: &ResendOtpRequest,
    ) -> Result<Option<String>, AuthGatewayError> {
        self.calls
            .lock()
            .await
            .push(RecordedCall::ResendOtp(request.clone()));
        self.resends.lock().await.pop_front().unwrap_or_else(|| Err(exhausted()))
    }
}

type Controller<S> = PortalController<Arc<ScriptedGateway>, S>;

fn identity_grant(identity: &str) -> LoginGrant {
    LoginGrant {
        identity: Some(identity.to_string()),
        message: Some("OTP sent to your email".to_string()),
    }
}

fn token_grant() -> TokenGrant {
    TokenGrant {
        access_token: Some("access-e2e".to_string()),
        refresh_token: Some("refresh-e2e".to_string()),
    }
}

fn fire<S: TokenStore>(controller: &mut Controller<S>, element_id: &str) {
    controller
        .dispatch_binding(element_id, UiTrigger::Click, None)
        .unwrap_or_else(|| panic!("no click binding for {element_id}"));
}

fn type_into<S: TokenStore>(controller: &mut Controller<S>, element_id: &str, text: &str) {
    controller
        .dispatch_binding(element_id, UiTrigger::Input, Some(text))
        .unwrap_or_else(|| panic!("no input binding for {element_id}"));
}

fn type_code<S: TokenStore>(controller: &mut Controller<S>, code: &str) {
    for (index, digit) in code.chars().enumerate() {
        type_into(controller, &format!("otp-cell-{index}"), &digit.to_string());
    }
}

async fn submit_credentials<S: TokenStore>(
    controller: &mut Controller<S>,
    role: PortalRole,
    identity: &str,
    password: &str,
) {
    fire(controller, &format!("landing-role-{}", role.as_str()));
    type_into(controller, "login-identity", identity);
    type_into(controller, "login-password", password);
    fire(controller, "login-submit");
    controller.settle().await;
}

#[tokio::test]
async fn integration_student_login_otp_and_portal_entry() {
    let temp = tempdir().expect("tempdir");
    let token_path = temp.path().join("tokens.json");
    let gateway = Arc::new(ScriptedGateway::default());
    gateway.push_login(Ok(identity_grant("ST123456"))).await;
    gateway.push_verify(Ok(token_grant())).await;
    let mut controller = PortalController::new(
        PortalLocale::English,
        Arc::clone(&gateway),
        FileTokenStore::new(&token_path),
    );

    submit_credentials(&mut controller, PortalRole::Student, "ST123456", "secret1").await;
    assert_eq!(controller.state().screen(), PortalScreen::OtpVerify);
    assert_eq!(controller.state().session.pending_login(), Some("ST123456"));

    type_code(&mut controller, "12345");
    fire(&mut controller, "otp-verify");
    assert_eq!(controller.state().screen(), PortalScreen::OtpVerify);
    assert_eq!(
        controller.state().session.otp_error(),
        "Please enter complete 6-digit OTP"
    );
    assert_eq!(controller.pending_requests(), 0);

    type_code(&mut controller, "123456");
    fire(&mut controller, "otp-verify");
    controller.settle().await;

    assert_eq!(controller.state().screen(), PortalScreen::Portal);
    assert_eq!(controller.state().current_page(), Some(PageKey::Dashboard));
    let stored = FileTokenStore::new(&token_path).load().expect("tokens");
    assert_eq!(stored.get("accessToken").map(String::as_str), Some("access-e2e"));
    assert_eq!(stored.get("refreshToken").map(String::as_str), Some("refresh-e2e"));
    assert_eq!(stored.get("studentId").map(String::as_str), Some("ST123456"));

    assert_eq!(
        gateway.calls().await,
        vec![
            RecordedCall::Login(LoginRequest {
                identity: "ST123456".to_string(),
                password: "secret1".to_string(),
            }),
            RecordedCall::VerifyOtp(VerifyOtpRequest {
                identity: "ST123456".to_string(),
                code: "123456".to_string(),
            }),
        ]
    );
}

#[tokio::test]
async fn integration_rejected_login_shows_server_text_and_allows_retry() {
    let gateway = Arc::new(ScriptedGateway::default());
    gateway
        .push_login(Err(AuthGatewayError::Rejected {
            status: 401,
            message: "Invalid student ID or password".to_string(),
        }))
        .await;
    gateway.push_login(Ok(LoginGrant::default())).await;
    let mut controller =
        PortalController::new(PortalLocale::English, Arc::clone(&gateway), MemoryTokenStore::new());

    submit_credentials(&mut controller, PortalRole::Student, "ST123456", "wrongpass").await;
    assert_eq!(controller.state().screen(), PortalScreen::Login);
    assert_eq!(
        controller.state().session.login_error(),
        "Invalid student ID or password"
    );

    type_into(&mut controller, "login-password", "secret1");
    fire(&mut controller, "login-submit");
    controller.settle().await;
    assert_eq!(controller.state().screen(), PortalScreen::OtpVerify);
    assert_eq!(controller.state().session.pending_login(), Some("ST123456"));
}

#[tokio::test]
async fn integration_duplicate_verify_while_in_flight_sends_one_request() {
    let gateway = Arc::new(ScriptedGateway::default());
    gateway.push_login(Ok(identity_grant("ST123456"))).await;
    gateway.push_verify(Ok(token_grant())).await;
    let mut controller =
        PortalController::new(PortalLocale::English, Arc::clone(&gateway), MemoryTokenStore::new());

    submit_credentials(&mut controller, PortalRole::Student, "ST123456", "secret1").await;
    type_code(&mut controller, "123456");
    fire(&mut controller, "otp-verify");
    fire(&mut controller, "otp-verify");
    controller.dispatch(PortalEvent::ResendOtp);
    assert_eq!(controller.pending_requests(), 1);

    controller.settle().await;
    assert_eq!(controller.state().screen(), PortalScreen::Portal);
    assert_eq!(gateway.calls().await.len(), 2);
}

#[tokio::test]
async fn integration_resend_opens_modal_and_ok_dismisses_it() {
    let gateway = Arc::new(ScriptedGateway::default());
    gateway.push_login(Ok(identity_grant("ST123456"))).await;
    gateway.push_resend(Ok(None)).await;
    let mut controller =
        PortalController::new(PortalLocale::English, Arc::clone(&gateway), MemoryTokenStore::new());

    submit_credentials(&mut controller, PortalRole::Student, "ST123456", "secret1").await;
    let outcome = controller
        .dispatch_binding("otp-resend", UiTrigger::Click, None)
        .expect("resend binding");
    assert!(outcome.suppress_default);
    controller.settle().await;

    let modal = &controller.document().region(Region::Modal).html;
    assert!(modal.contains("Resend OTP"));
    assert!(modal.contains("OTP has been resent."));

    fire(&mut controller, "portal-modal-ok");
    assert!(controller.document().region(Region::Modal).is_empty());
    assert_eq!(controller.state().screen(), PortalScreen::OtpVerify);
}

#[tokio::test]
async fn integration_role_switch_from_staff_portal_never_keeps_staff_page() {
    let gateway = Arc::new(ScriptedGateway::default());
    gateway.push_login(Ok(identity_grant("STAFF01"))).await;
    gateway.push_verify(Ok(token_grant())).await;
    gateway.push_login(Ok(identity_grant("ST123456"))).await;
    gateway.push_verify(Ok(token_grant())).await;
    let mut controller =
        PortalController::new(PortalLocale::English, Arc::clone(&gateway), MemoryTokenStore::new());

    submit_credentials(&mut controller, PortalRole::Staff, "STAFF01", "secret1").await;
    type_code(&mut controller, "123456");
    fire(&mut controller, "otp-verify");
    controller.settle().await;
    fire(&mut controller, "portal-menu-students");
    assert_eq!(controller.state().current_page(), Some(PageKey::Students));

    controller.dispatch(PortalEvent::SelectRoleTab(PortalRole::Student));
    assert_eq!(controller.state().screen(), PortalScreen::Login);
    assert!(controller.state().portal.is_none());
    assert!(controller.document().region(Region::Shell).is_empty());
    assert!(controller.token_store().load().expect("tokens").is_empty());

    type_into(&mut controller, "login-identity", "ST123456");
    type_into(&mut controller, "login-password", "secret1");
    fire(&mut controller, "login-submit");
    controller.settle().await;
    type_code(&mut controller, "123456");
    fire(&mut controller, "otp-verify");
    controller.settle().await;

    assert_eq!(controller.state().portal_role(), Some(PortalRole::Student));
    assert_eq!(controller.state().current_page(), Some(PageKey::Dashboard));
    assert!(controller
        .document()
        .find_binding("portal-menu-students", UiTrigger::Click)
        .is_none());
}

#[tokio::test]
async fn integration_verify_without_login_routes_back_to_login() {
    let gateway = Arc::new(ScriptedGateway::default());
    let mut controller =
        PortalController::new(PortalLocale::English, Arc::clone(&gateway), MemoryTokenStore::new());

    controller.dispatch(PortalEvent::VerifyOtp);
    controller.settle().await;

    assert_eq!(controller.state().screen(), PortalScreen::Login);
    assert_eq!(controller.state().session.login_error(), "Please login first");
    assert!(gateway.calls().await.is_empty());
}
