use std::sync::Arc;

use async_trait::async_trait;
use portal_core::{LoginGrant, LoginRequest, ResendOtpRequest, TokenGrant, VerifyOtpRequest};
use thiserror::Error;

const GENERIC_FAILURE: &str = "Request failed";

#[derive(Debug, Error)]
/// Failures surfaced by an [`AuthGateway`].
pub enum AuthGatewayError {
    #[error("invalid auth gateway configuration: {0}")]
    InvalidConfig(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("auth endpoint returned status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("auth request denied: {0}")]
    Denied(String),
}

impl AuthGatewayError {
    /// Text shown inline on the screen that issued the request.
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::Rejected { message, .. } | Self::Denied(message) => message.trim().to_string(),
            Self::Http(error) => error.to_string(),
            Self::InvalidConfig(_) => String::new(),
        };
        if message.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }
}

#[async_trait]
/// The three remote calls behind the login flow.
pub trait AuthGateway: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, AuthGatewayError>;

    async fn verify_otp(&self, request: &VerifyOtpRequest)
        -> Result<TokenGrant, AuthGatewayError>;

    /// Returns the server's confirmation text, if it sent one.
    async fn resend_otp(
        &self,
        request: &ResendOtpRequest,
    ) -> Result<Option<String>, AuthGatewayError>;
}

#[async_trait]
impl<G> AuthGateway for Arc<G>
where
    G: AuthGateway + ?Sized,
{
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, AuthGatewayError> {
        self.as_ref().login(request).await
    }

    async fn verify_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<TokenGrant, AuthGatewayError> {
        self.as_ref().verify_otp(request).await
    }

    async fn resend_otp(
        &self,
        request: &ResendOtpRequest,
    ) -> Result<Option<String>, AuthGatewayError> {
        self.as_ref().resend_otp(request).await
    }
}
