//! JSON bodies exchanged with the auth endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody<'a> {
    pub student_id: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpBody<'a> {
    pub student_id: &'a str,
    pub otp: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpBody<'a> {
    pub student_id: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Union of every field the auth endpoints may send back.
pub struct AuthResponseBody {
    pub student_id: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl AuthResponseBody {
    /// Parses a response body; unreadable bodies become an empty response.
    pub fn parse_lossy(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Failure text for a non-success response: `error`, then `message`.
    pub fn failure_message(&self) -> Option<String> {
        non_blank(self.error.as_deref()).or_else(|| non_blank(self.message.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
