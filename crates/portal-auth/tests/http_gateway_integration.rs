use httpmock::prelude::*;
use portal_auth::{AuthGateway, AuthGatewayError, HttpAuthGateway, HttpAuthGatewayConfig};
use portal_core::{LoginRequest, ResendOtpRequest, VerifyOtpRequest};
use serde_json::json;

fn gateway_for(server: &MockServer) -> HttpAuthGateway {
    HttpAuthGateway::new(HttpAuthGatewayConfig {
        api_base: server.base_url(),
        request_timeout_ms: 5_000,
    })
    .expect("gateway should be created")
}

#[tokio::test]
async fn integration_login_posts_credentials_and_reads_confirmed_identity() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .header("content-type", "application/json")
            .json_body(json!({"studentId": "ST123456", "password": "secret1"}));
        then.status(200).json_body(json!({
            "message": "OTP sent to your email",
            "studentId": "ST123456"
        }));
    });

    let grant = gateway_for(&server)
        .login(&LoginRequest {
            identity: "ST123456".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .expect("login should succeed");

    mock.assert();
    assert_eq!(grant.identity.as_deref(), Some("ST123456"));
    assert_eq!(grant.message.as_deref(), Some("OTP sent to your email"));
}

#[tokio::test]
async fn integration_login_rejection_surfaces_error_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401)
            .json_body(json!({"error": "Invalid student ID or password"}));
    });

    let error = gateway_for(&server)
        .login(&LoginRequest {
            identity: "ST123456".to_string(),
            password: "wrong-pass".to_string(),
        })
        .await
        .expect_err("login should be rejected");

    assert!(matches!(error, AuthGatewayError::Rejected { status: 401, .. }));
    assert_eq!(error.user_message(), "Invalid student ID or password");
}

#[tokio::test]
async fn integration_verify_otp_returns_tokens() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login/verify-otp")
            .json_body(json!({"studentId": "ST123456", "otp": "123456"}));
        then.status(200).json_body(json!({
            "accessToken": "access-abc",
            "refreshToken": "refresh-abc",
            "studentId": "ST123456",
            "message": "Login successful"
        }));
    });

    let tokens = gateway_for(&server)
        .verify_otp(&VerifyOtpRequest {
            identity: "ST123456".to_string(),
            code: "123456".to_string(),
        })
        .await
        .expect("verify should succeed");

    mock.assert();
    assert_eq!(tokens.access_token.as_deref(), Some("access-abc"));
    assert_eq!(tokens.refresh_token.as_deref(), Some("refresh-abc"));
}

#[tokio::test]
async fn regression_non_json_failure_body_uses_generic_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login/verify-otp");
        then.status(502).body("<html>bad gateway</html>");
    });

    let error = gateway_for(&server)
        .verify_otp(&VerifyOtpRequest {
            identity: "ST123456".to_string(),
            code: "123456".to_string(),
        })
        .await
        .expect_err("verify should fail");

    assert_eq!(error.user_message(), "Request failed");
}

#[tokio::test]
async fn integration_resend_returns_optional_message() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/resend-otp")
            .json_body(json!({"studentId": "ST123456"}));
        then.status(200).json_body(json!({}));
    });

    let message = gateway_for(&server)
        .resend_otp(&ResendOtpRequest {
            identity: "ST123456".to_string(),
        })
        .await
        .expect("resend should succeed");

    mock.assert();
    assert_eq!(message, None);
}

#[tokio::test]
async fn regression_success_with_empty_body_is_tolerated() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200).body("");
    });

    let grant = gateway_for(&server)
        .login(&LoginRequest {
            identity: "ST123456".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .expect("login should succeed");

    assert_eq!(grant.identity, None);
}
