use async_trait::async_trait;
use portal_core::{LoginGrant, LoginRequest, ResendOtpRequest, TokenGrant, VerifyOtpRequest};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::wire::{AuthResponseBody, LoginBody, ResendOtpBody, VerifyOtpBody};
use crate::{AuthGateway, AuthGatewayError};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const VERIFY_OTP_PATH: &str = "/api/auth/login/verify-otp";
pub const RESEND_OTP_PATH: &str = "/api/auth/resend-otp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAuthGatewayConfig {
    pub api_base: String,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone)]
/// JSON-over-HTTP client for the portal auth endpoints.
pub struct HttpAuthGateway {
    client: reqwest::Client,
    api_base: String,
}

impl HttpAuthGateway {
    pub fn new(config: HttpAuthGatewayConfig) -> Result<Self, AuthGatewayError> {
        let api_base = config.api_base.trim().trim_end_matches('/').to_string();
        if api_base.is_empty() {
            return Err(AuthGatewayError::InvalidConfig(
                "api base url cannot be empty".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_millis(
                config.request_timeout_ms.max(1),
            ))
            .build()?;

        Ok(Self { client, api_base })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<AuthResponseBody, AuthGatewayError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, "auth request");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let raw = response.text().await?;
        let parsed = AuthResponseBody::parse_lossy(&raw);
        if !status.is_success() {
            let message = parsed.failure_message().unwrap_or_default();
            tracing::warn!(url = %url, status = status.as_u16(), "auth request rejected");
            return Err(AuthGatewayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(parsed)
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, AuthGatewayError> {
        let body = LoginBody {
            student_id: &request.identity,
            password: &request.password,
        };
        let response = self.post(LOGIN_PATH, &body).await?;
        Ok(LoginGrant {
            identity: response.student_id,
            message: response.message,
        })
    }

    async fn verify_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<TokenGrant, AuthGatewayError> {
        let body = VerifyOtpBody {
            student_id: &request.identity,
            otp: &request.code,
        };
        let response = self.post(VERIFY_OTP_PATH, &body).await?;
        Ok(TokenGrant {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        })
    }

    async fn resend_otp(
        &self,
        request: &ResendOtpRequest,
    ) -> Result<Option<String>, AuthGatewayError> {
        let body = ResendOtpBody {
            student_id: &request.identity,
        };
        let response = self.post(RESEND_OTP_PATH, &body).await?;
        Ok(response.message)
    }
}
