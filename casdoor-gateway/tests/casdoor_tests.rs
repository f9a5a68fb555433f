/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! End-to-end tests: real router, real `CasdoorClient`, a mocked Casdoor
//! token endpoint, and tokens signed with the fixture certificate's key.


use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::StatusCode;
use axum::Router;
use casdoor_gateway::config::Config;
use casdoor_gateway::provider::CasdoorClient;
use casdoor_gateway_types::{APIError, APIResponse};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Map, Value};
use test_helpers::*;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(endpoint: &str) -> Config {
    let mut yaml = format!(
        "server:\n  endpoint: {endpoint}/\n  client_id: gateway-client\n  client_secret: gateway-secret\n  organization: built-in\n  application: app-gateway\ncertificate: |\n"
    );
    for line in RSA_CERT.lines() {
        yaml.push_str("  ");
        yaml.push_str(line);
        yaml.push('\n');
    }
    Config::from_yaml_str(&yaml).expect("generated config should parse")
}

fn casdoor_app(endpoint: &str) -> Router {
    build_app(Arc::new(CasdoorClient::new(&config_for(endpoint))))
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

fn signed_token(exp: u64) -> String {
    let payload = json!({
        "owner": "built-in",
        "name": "alice",
        "displayName": "Alice",
        "email": "alice@example.com",
        "isAdmin": false,
        "tokenType": "access-token",
        "iss": "https://door.example.com",
        "sub": "a1b2c3",
        "aud": ["gateway-client"],
        "iat": now(),
        "nbf": now(),
        "exp": exp,
    });
    let key = EncodingKey::from_rsa_pem(RSA_KEY.as_bytes()).unwrap();
    encode(&Header::new(Algorithm::RS256), &payload, &key).unwrap()
}

#[tokio::test]
async fn client_exposes_config_identity() {
    let client = CasdoorClient::new(&config_for("https://door.example.com"));
    assert_eq!(client.organization(), "built-in");
    assert_eq!(client.application(), "app-gateway");
    assert_eq!(
        client.token_url(),
        "https://door.example.com/api/login/oauth/access_token"
    );
}

#[tokio::test]
async fn signin_exchanges_code_with_casdoor() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login/oauth/access_token"))
        .and(body_string_contains("code=auth-code-1"))
        .and(body_string_contains("client_id=gateway-client"))
        .and(body_string_contains("client_secret=gateway-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "casdoor-access-token",
            "token_type": "Bearer",
            "expires_in": 168
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = casdoor_app(&server.uri())
        .oneshot(signin_request("?code=auth-code-1&state=app-built-in"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: APIResponse<String> = response_json(resp).await;
    assert_eq!(body.data, "casdoor-access-token");
}

#[tokio::test]
async fn signin_hides_casdoor_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "authorization code is invalid"
        })))
        .mount(&server)
        .await;

    let resp = casdoor_app(&server.uri())
        .oneshot(signin_request("?code=nope&state=s"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: APIError = response_json(resp).await;
    assert_eq!(body.message, "GetOAuthToken() error");
}

#[tokio::test]
async fn userinfo_returns_user_from_signed_token() {
    let token = signed_token(now() + 3600);

    let resp = casdoor_app("https://door.example.com")
        .oneshot(userinfo_request(Some(&format!("Bearer {token}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: APIResponse<Map<String, Value>> = response_json(resp).await;
    assert_eq!(
        Value::Object(body.data),
        json!({
            "owner": "built-in",
            "name": "alice",
            "displayName": "Alice",
            "email": "alice@example.com",
            "isAdmin": false
        })
    );
}

#[tokio::test]
async fn userinfo_rejects_expired_token_with_reason() {
    let token = signed_token(now() - 60);

    let resp = casdoor_app("https://door.example.com")
        .oneshot(userinfo_request(Some(&format!("Bearer {token}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: APIError = response_json(resp).await;
    assert_eq!(body.code, 401);
    assert_eq!(body.message, "ExpiredSignature");
}

#[tokio::test]
async fn userinfo_rejects_garbage_token() {
    let resp = casdoor_app("https://door.example.com")
        .oneshot(userinfo_request(Some("Bearer not.a.jwt")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: APIError = response_json(resp).await;
    assert!(!body.message.is_empty());
}

fn app_with_certificate(endpoint: &str, certificate: &str) -> Router {
    let mut config = config_for(endpoint);
    config.certificate = certificate.to_string();
    build_app(Arc::new(CasdoorClient::new(&config)))
}

const BROKEN_CERTIFICATE: &str = "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n";

#[tokio::test]
async fn unusable_certificate_fails_userinfo_with_reason() {
    let token = signed_token(now() + 3600);

    let resp = app_with_certificate("https://door.example.com", BROKEN_CERTIFICATE)
        .oneshot(userinfo_request(Some(&format!("Bearer {token}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: APIError = response_json(resp).await;
    assert_eq!(body.code, 401);
    assert!(
        body.message.starts_with("invalid certificate: "),
        "{}",
        body.message
    );
    assert!(!body.message.contains("invalid certificate: invalid certificate"));
}

#[tokio::test]
async fn unusable_certificate_still_allows_signin() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "casdoor-access-token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = app_with_certificate(&server.uri(), "placeholder")
        .oneshot(signin_request("?code=auth-code-1&state=s"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: APIResponse<String> = response_json(resp).await;
    assert_eq!(body.data, "casdoor-access-token");
}
