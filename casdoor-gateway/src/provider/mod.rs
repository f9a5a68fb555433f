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

//! Casdoor identity provider client.
//!
//! The HTTP layer only sees the [`IdentityProvider`] trait: one call to turn
//! an authorization code into an access token, one call to verify a bearer
//! token and hand back its claims. [`CasdoorClient`] is the production
//! implementation, built once at startup from [`Config`].

pub mod certificate;
pub mod claims;
pub mod exchange;
pub mod verify;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;

pub use certificate::{KeyFamily, VerifyingKey};
pub use claims::Claims;
pub use exchange::OAuthToken;

/// Errors surfaced by the identity provider. The display text of a
/// verification error is returned to API callers as-is.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("token endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("token endpoint rejected the code: {error}: {description}")]
    Rejected { error: String, description: String },
    #[error("server response missing access_token")]
    MissingAccessToken,
    #[error("failed to parse token response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("unexpected signing method: {0:?}")]
    UnexpectedAlgorithm(jsonwebtoken::Algorithm),
    #[error("invalid certificate: {0}")]
    Certificate(String),
}

/// The two operations the HTTP layer needs from the identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange an OAuth2 authorization code (and its `state`) for a token.
    async fn exchange_code(&self, code: &str, state: &str) -> Result<OAuthToken, ProviderError>;

    /// Verify a JWT's signature and time claims, returning its claims.
    async fn verify_token(&self, token: &str) -> Result<Claims, ProviderError>;
}

/// Casdoor-backed [`IdentityProvider`].
///
/// A certificate that fails to parse does not stop the client from being
/// built: code exchange keeps working and every `verify_token` call reports
/// the parse error.
pub struct CasdoorClient {
    http: reqwest::Client,
    endpoint: String,
    client_id: String,
    client_secret: String,
    organization: String,
    application: String,
    key: Result<VerifyingKey, String>,
}

impl CasdoorClient {
    /// Build the client and parse the signing certificate once.
    pub fn new(config: &Config) -> Self {
        let key = VerifyingKey::from_pem(&config.certificate).map_err(|e| {
            tracing::warn!("Token verification will fail: {e}");
            match e {
                ProviderError::Certificate(detail) => detail,
                other => other.to_string(),
            }
        });
        let server = &config.server;
        Self {
            http: reqwest::Client::new(),
            endpoint: server.endpoint.trim_end_matches('/').to_string(),
            client_id: server.client_id.clone(),
            client_secret: server.client_secret.clone(),
            organization: server.organization.clone(),
            application: server.application.clone(),
            key,
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn application(&self) -> &str {
        &self.application
    }

    /// `{endpoint}/api/login/oauth/access_token`
    pub fn token_url(&self) -> String {
        format!("{}/api/login/oauth/access_token", self.endpoint)
    }
}

#[async_trait]
impl IdentityProvider for CasdoorClient {
    async fn exchange_code(&self, code: &str, state: &str) -> Result<OAuthToken, ProviderError> {
        tracing::debug!(state, "exchanging authorization code");
        exchange::exchange_code(
            &self.http,
            &self.token_url(),
            &self.client_id,
            &self.client_secret,
            code,
        )
        .await
    }

    async fn verify_token(&self, token: &str) -> Result<Claims, ProviderError> {
        match &self.key {
            Ok(key) => verify::verify_token(key, token),
            Err(e) => Err(ProviderError::Certificate(e.clone())),
        }
    }
}
