use async_trait::async_trait;
use portal_core::{LoginGrant, LoginRequest, ResendOtpRequest, TokenGrant, VerifyOtpRequest};

use crate::{AuthGateway, AuthGatewayError};

pub const DEFAULT_MOCK_OTP: &str = "123456";

const OTP_SENT: &str = "OTP sent to your email";
const OTP_RESENT: &str = "New OTP sent to your email";
const OTP_REJECTED: &str = "Invalid or expired OTP code";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Offline gateway: any credentials pass, and only the configured code
/// verifies.
pub struct MockAuthGateway {
    otp: String,
}

impl Default for MockAuthGateway {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_OTP)
    }
}

impl MockAuthGateway {
    pub fn new(otp: impl Into<String>) -> Self {
        Self { otp: otp.into() }
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, AuthGatewayError> {
        tracing::debug!(identity = %request.identity, "mock login accepted");
        Ok(LoginGrant {
            identity: Some(request.identity.clone()),
            message: Some(OTP_SENT.to_string()),
        })
    }

    async fn verify_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<TokenGrant, AuthGatewayError> {
        if request.code.trim() != self.otp {
            return Err(AuthGatewayError::Denied(OTP_REJECTED.to_string()));
        }
        Ok(TokenGrant {
            access_token: Some(format!("mock-access-{}", request.identity)),
            refresh_token: Some(format!("mock-refresh-{}", request.identity)),
        })
    }

    async fn resend_otp(
        &self,
        _request: &ResendOtpRequest,
    ) -> Result<Option<String>, AuthGatewayError> {
        Ok(Some(OTP_RESENT.to_string()))
    }
}
