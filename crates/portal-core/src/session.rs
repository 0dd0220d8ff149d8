//! Session/role store: selected role, login form buffers, pending login
//! identity, issued credentials and the single in-flight auth request.

use crate::{
    AuthRequestKind, LoginGrant, LoginRequest, MessageTable, PortalRole, PortalScreen,
    ResendOtpRequest, StoredCredentials, TokenGrant, VerifyOtpRequest,
};

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const OTP_CODE_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Auth request currently awaiting a response.
pub enum PendingRequest {
    Login { identity: String },
    VerifyOtp,
    ResendOtp,
}

impl PendingRequest {
    pub fn kind(&self) -> AuthRequestKind {
        match self {
            Self::Login { .. } => AuthRequestKind::Login,
            Self::VerifyOtp => AuthRequestKind::VerifyOtp,
            Self::ResendOtp => AuthRequestKind::ResendOtp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of asking the store to start an auth request.
pub enum Submission<T> {
    Ready(T),
    /// Another auth request is still in flight; nothing was changed.
    Busy,
    /// Local validation failed; the inline error has been recorded.
    Invalid,
    /// No pending login exists; the caller must route back to Login.
    LoginRequired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of applying an auth response to the store.
pub enum Completion<T> {
    /// The response does not match the in-flight request and was dropped.
    Stale,
    Failed,
    Succeeded(T),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionStore {
    role: PortalRole,
    identity_input: String,
    password_input: String,
    login_error: String,
    pending_login: Option<String>,
    otp_cells: [String; OTP_CODE_LENGTH],
    otp_hint: String,
    otp_error: String,
    credentials: Option<StoredCredentials>,
    in_flight: Option<PendingRequest>,
}

impl SessionStore {
    pub fn role(&self) -> PortalRole {
        self.role
    }

    pub fn identity_input(&self) -> &str {
        &self.identity_input
    }

    pub fn password_input(&self) -> &str {
        &self.password_input
    }

    pub fn login_error(&self) -> &str {
        &self.login_error
    }

    pub fn pending_login(&self) -> Option<&str> {
        self.pending_login.as_deref()
    }

    pub fn otp_cells(&self) -> &[String; OTP_CODE_LENGTH] {
        &self.otp_cells
    }

    pub fn otp_hint(&self) -> &str {
        &self.otp_hint
    }

    pub fn otp_error(&self) -> &str {
        &self.otp_error
    }

    pub fn credentials(&self) -> Option<&StoredCredentials> {
        self.credentials.as_ref()
    }

    pub fn in_flight(&self) -> Option<AuthRequestKind> {
        self.in_flight.as_ref().map(PendingRequest::kind)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Forgets the in-flight request, returning its kind if there was one.
    pub fn cancel_in_flight(&mut self) -> Option<AuthRequestKind> {
        self.in_flight.take().map(|request| request.kind())
    }

    /// Selects `role` and discards every in-progress login field.
    pub fn set_role(&mut self, role: PortalRole) {
        self.role = role;
        self.identity_input.clear();
        self.password_input.clear();
        self.login_error.clear();
        self.pending_login = None;
        self.cancel_in_flight();
    }

    pub fn set_identity_input(&mut self, value: impl Into<String>) {
        self.identity_input = value.into();
    }

    pub fn set_password_input(&mut self, value: impl Into<String>) {
        self.password_input = value.into();
    }

    /// Stores one OTP cell. Out-of-range indices are ignored.
    pub fn set_otp_cell(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.otp_cells.get_mut(index) {
            Some(cell) => {
                *cell = value.into();
                true
            }
            None => false,
        }
    }

    pub fn otp_code(&self) -> String {
        self.otp_cells.iter().map(|cell| cell.trim()).collect()
    }

    pub fn set_login_error(&mut self, message: impl Into<String>) {
        self.login_error = message.into();
    }

    /// Drops transient error text owned by `screen`.
    pub fn clear_error_for(&mut self, screen: PortalScreen) {
        match screen {
            PortalScreen::Login => self.login_error.clear(),
            PortalScreen::OtpVerify => self.otp_error.clear(),
            PortalScreen::Landing | PortalScreen::Portal => {}
        }
    }

    pub fn submit_login(&mut self, messages: &MessageTable) -> Submission<LoginRequest> {
        if self.is_busy() {
            return Submission::Busy;
        }
        let identity = self.identity_input.trim();
        let password = self.password_input.trim();
        if identity.is_empty() || password.is_empty() {
            self.login_error = messages.missing_credentials.to_string();
            return Submission::Invalid;
        }
        if password.chars().count() < PASSWORD_MIN_LENGTH {
            self.login_error = messages.password_too_short.to_string();
            return Submission::Invalid;
        }

        let request = LoginRequest {
            identity: identity.to_string(),
            password: password.to_string(),
        };
        self.login_error.clear();
        self.in_flight = Some(PendingRequest::Login {
            identity: request.identity.clone(),
        });
        Submission::Ready(request)
    }

    /// Applies the login response. On success the pending login identity is
    /// set and the OTP form is reset.
    pub fn complete_login(
        &mut self,
        result: Result<LoginGrant, String>,
        messages: &MessageTable,
    ) -> Completion<String> {
        let Some(PendingRequest::Login { identity }) = self.in_flight.take() else {
            return Completion::Stale;
        };
        match result {
            Ok(grant) => {
                let confirmed = grant
                    .identity
                    .filter(|value| !value.trim().is_empty())
                    .unwrap_or(identity);
                self.pending_login = Some(confirmed.clone());
                self.otp_hint = messages.otp_sent_hint.to_string();
                self.otp_cells = Default::default();
                self.otp_error.clear();
                Completion::Succeeded(confirmed)
            }
            Err(message) => {
                self.login_error = failure_text(message, messages);
                Completion::Failed
            }
        }
    }

    pub fn submit_otp(&mut self, messages: &MessageTable) -> Submission<VerifyOtpRequest> {
        if self.is_busy() {
            return Submission::Busy;
        }
        let Some(identity) = self.pending_login.clone() else {
            return Submission::LoginRequired;
        };
        let code = self.otp_code();
        if code.chars().count() != OTP_CODE_LENGTH {
            self.otp_error = messages.incomplete_otp.to_string();
            return Submission::Invalid;
        }
        self.otp_error.clear();
        self.in_flight = Some(PendingRequest::VerifyOtp);
        Submission::Ready(VerifyOtpRequest { identity, code })
    }

    /// Applies the OTP verification response. Success consumes the pending
    /// login and records the issued credentials.
    pub fn complete_otp(
        &mut self,
        result: Result<TokenGrant, String>,
        messages: &MessageTable,
    ) -> Completion<StoredCredentials> {
        if self.in_flight != Some(PendingRequest::VerifyOtp) {
            return Completion::Stale;
        }
        self.in_flight = None;
        let Some(identity) = self.pending_login.clone() else {
            return Completion::Stale;
        };
        match result {
            Ok(tokens) => {
                let credentials = StoredCredentials {
                    access_token: tokens.access_token,
                    refresh_token: tokens.refresh_token,
                    identity,
                };
                self.pending_login = None;
                self.credentials = Some(credentials.clone());
                self.identity_input.clear();
                self.password_input.clear();
                self.otp_cells = Default::default();
                Completion::Succeeded(credentials)
            }
            Err(message) => {
                self.otp_error = failure_text(message, messages);
                Completion::Failed
            }
        }
    }

    pub fn submit_resend(&mut self) -> Submission<ResendOtpRequest> {
        if self.is_busy() {
            return Submission::Busy;
        }
        let Some(identity) = self.pending_login.clone() else {
            return Submission::LoginRequired;
        };
        self.in_flight = Some(PendingRequest::ResendOtp);
        Submission::Ready(ResendOtpRequest { identity })
    }

    /// Applies the resend response; success yields the dialog body text.
    pub fn complete_resend(
        &mut self,
        result: Result<Option<String>, String>,
        messages: &MessageTable,
    ) -> Completion<String> {
        if self.in_flight != Some(PendingRequest::ResendOtp) {
            return Completion::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(message) => Completion::Succeeded(
                message
                    .filter(|value| !value.trim().is_empty())
                    .unwrap_or_else(|| messages.otp_resent_fallback.to_string()),
            ),
            Err(message) => {
                self.otp_error = failure_text(message, messages);
                Completion::Failed
            }
        }
    }

    /// Ends the authenticated session and any login in progress.
    pub fn logout(&mut self) {
        self.identity_input.clear();
        self.password_input.clear();
        self.login_error.clear();
        self.pending_login = None;
        self.otp_cells = Default::default();
        self.otp_hint.clear();
        self.otp_error.clear();
        self.credentials = None;
        self.cancel_in_flight();
    }
}

fn failure_text(message: String, messages: &MessageTable) -> String {
    if message.trim().is_empty() {
        messages.request_failed.to_string()
    } else {
        message
    }
}
