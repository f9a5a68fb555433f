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

//! API error body.
//!
//! Every failed request is answered with `{ "code": <status>, "message": "..." }`,
//! where `code` repeats the HTTP status of the response.

use serde::{Deserialize, Serialize};

/// Message returned when the `Authorization` header is absent.
pub const AUTHORIZATION_HEADER_MISSING: &str = "authorization header is missing";

/// Message returned when the `Authorization` header is not `Bearer <token>`.
pub const INVALID_BEARER_TOKEN: &str = "token is not valid Bearer token";

/// Message returned when the authorization code exchange fails. The
/// provider's own error is logged server-side and never sent to the client.
pub const TOKEN_EXCHANGE_FAILED: &str = "GetOAuthToken() error";

const UNAUTHORIZED: u16 = 401;
const INTERNAL_SERVER_ERROR: u16 = 500;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct APIError {
    /// Numeric HTTP status, duplicated in the body for clients that only see JSON.
    pub code: u16,

    /// Human-readable reason.
    pub message: String,
}

impl APIError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn authorization_header_missing() -> Self {
        Self::new(UNAUTHORIZED, AUTHORIZATION_HEADER_MISSING)
    }

    pub fn invalid_bearer_token() -> Self {
        Self::new(UNAUTHORIZED, INVALID_BEARER_TOKEN)
    }

    /// 401 carrying the verifier's error text verbatim.
    pub fn unauthorized(detail: &str) -> Self {
        Self::new(UNAUTHORIZED, detail)
    }

    pub fn token_exchange_failed() -> Self {
        Self::new(INTERNAL_SERVER_ERROR, TOKEN_EXCHANGE_FAILED)
    }

    /// Generic 500 used when a handler fails unexpectedly.
    pub fn internal_error() -> Self {
        Self::new(INTERNAL_SERVER_ERROR, "internal server error")
    }
}
