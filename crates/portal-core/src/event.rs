use serde::{Deserialize, Serialize};

use crate::{PageKey, PortalRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Public enum `AuthRequestKind` in `portal-core`.
pub enum AuthRequestKind {
    Login,
    VerifyOtp,
    ResendOtp,
}

impl AuthRequestKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::VerifyOtp => "verify_otp",
            Self::ResendOtp => "resend_otp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub identity: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOtpRequest {
    pub identity: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendOtpRequest {
    pub identity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Successful password check. `identity` is the server-confirmed id, if sent.
pub struct LoginGrant {
    pub identity: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenGrant {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Credentials written to client-local storage after OTP verification.
pub struct StoredCredentials {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub identity: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Every UI event the portal reacts to, plus async request completions.
///
/// Completion payloads carry the display-ready failure text on `Err`.
pub enum PortalEvent {
    /// Landing role button: select the role, then open the login screen.
    ChooseRole(PortalRole),
    SelectRoleTab(PortalRole),
    GoToLogin,
    BackToLanding,
    IdentityInput(String),
    PasswordInput(String),
    SubmitLogin,
    LoginCompleted(Result<LoginGrant, String>),
    OtpCellInput { index: usize, value: String },
    VerifyOtp,
    VerifyCompleted(Result<TokenGrant, String>),
    ResendOtp,
    ResendCompleted(Result<Option<String>, String>),
    SelectPage(PageKey),
    ToggleChat,
    CloseChat,
    ChatInput(String),
    SendChat,
    ChatKeyDown(String),
    SelectConversation(String),
    StaffChatInput(String),
    SendStaffChat,
    StaffChatKeyDown(String),
    DemoAction(String),
    DismissModal,
    Logout,
}

impl PortalEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChooseRole(_) => "choose_role",
            Self::SelectRoleTab(_) => "select_role_tab",
            Self::GoToLogin => "go_to_login",
            Self::BackToLanding => "back_to_landing",
            Self::IdentityInput(_) => "identity_input",
            Self::PasswordInput(_) => "password_input",
            Self::SubmitLogin => "submit_login",
            Self::LoginCompleted(_) => "login_completed",
            Self::OtpCellInput { .. } => "otp_cell_input",
            Self::VerifyOtp => "verify_otp",
            Self::VerifyCompleted(_) => "verify_completed",
            Self::ResendOtp => "resend_otp",
            Self::ResendCompleted(_) => "resend_completed",
            Self::SelectPage(_) => "select_page",
            Self::ToggleChat => "toggle_chat",
            Self::CloseChat => "close_chat",
            Self::ChatInput(_) => "chat_input",
            Self::SendChat => "send_chat",
            Self::ChatKeyDown(_) => "chat_key_down",
            Self::SelectConversation(_) => "select_conversation",
            Self::StaffChatInput(_) => "staff_chat_input",
            Self::SendStaffChat => "send_staff_chat",
            Self::StaffChatKeyDown(_) => "staff_chat_key_down",
            Self::DemoAction(_) => "demo_action",
            Self::DismissModal => "dismiss_modal",
            Self::Logout => "logout",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects requested by the reducer, executed by the controller.
pub enum PortalEffect {
    Login(LoginRequest),
    VerifyOtp(VerifyOtpRequest),
    ResendOtp(ResendOtpRequest),
    /// Drop every auth request not yet answered; its response must never be
    /// applied to a later submission.
    CancelAuth,
    PersistTokens(StoredCredentials),
    ClearTokens,
    RenderScreen,
    RenderShell,
    RenderPage,
    RenderChatWidget,
    RenderModal,
    /// The triggering DOM event must not run its default action.
    SuppressDefault,
}

impl PortalEffect {
    pub fn is_render(&self) -> bool {
        matches!(
            self,
            Self::RenderScreen
                | Self::RenderShell
                | Self::RenderPage
                | Self::RenderChatWidget
                | Self::RenderModal
        )
    }

    pub fn auth_request_kind(&self) -> Option<AuthRequestKind> {
        match self {
            Self::Login(_) => Some(AuthRequestKind::Login),
            Self::VerifyOtp(_) => Some(AuthRequestKind::VerifyOtp),
            Self::ResendOtp(_) => Some(AuthRequestKind::ResendOtp),
            _ => None,
        }
    }
}
