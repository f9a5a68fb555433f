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

//! Axum extractor that pulls the bearer token out of the `Authorization` header.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::AppError;

const BEARER_SEPARATOR: &str = "Bearer ";

/// Raw bearer token from `Authorization: Bearer <token>`.
///
/// The header is split on the literal `"Bearer "` and must yield exactly two
/// parts; the second part is the token. A token that itself contains
/// `"Bearer "` therefore fails, and so does an empty header value.
///
/// Usage in a handler:
/// ```ignore
/// async fn my_handler(BearerToken(token): BearerToken) { ... }
/// ```
#[derive(Debug)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// Parse an `Authorization` header value.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let parts: Vec<&str> = value.split(BEARER_SEPARATOR).collect();
        match parts.as_slice() {
            [_, token] => Ok(BearerToken((*token).to_string())),
            _ => Err(AppError::invalid_bearer_token()),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(AppError::missing_authorization_header)?;

        // Opaque bytes are decoded lossily and left for the verifier to reject.
        let value = String::from_utf8_lossy(value.as_bytes());
        Self::parse(&value)
    }
}
