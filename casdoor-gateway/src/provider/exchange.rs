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

//! Authorization code → token exchange against the Casdoor token endpoint.

use serde::{Deserialize, Serialize};

use super::ProviderError;

/// Token returned by a successful code exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Raw body of the token endpoint. Casdoor reports a bad code with HTTP 200
/// and an `error` field, so both shapes share one struct.
#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// POST the authorization code to `token_url` with the client credentials in
/// the form body.
pub async fn exchange_code(
    http: &reqwest::Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    code: &str,
) -> Result<OAuthToken, ProviderError> {
    let params = [
        ("grant_type", "authorization_code"),
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("code", code),
    ];

    let response = http
        .post(token_url)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(&params)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: TokenEndpointResponse = serde_json::from_str(&body)?;

    if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
        return Err(ProviderError::Rejected {
            error,
            description: parsed.error_description.unwrap_or_default(),
        });
    }
    if parsed.access_token.is_empty() {
        return Err(ProviderError::MissingAccessToken);
    }

    Ok(OAuthToken {
        access_token: parsed.access_token,
        token_type: parsed.token_type,
        refresh_token: parsed.refresh_token,
        id_token: parsed.id_token,
        expires_in: parsed.expires_in,
        scope: parsed.scope,
    })
}
