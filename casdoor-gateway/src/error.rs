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

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as an [`APIError`] body `{ "code", "message" }`
//! paired with the matching HTTP status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use casdoor_gateway_types::APIError;

/// Application-level error that pairs an HTTP status code with an [`APIError`].
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: APIError,
}

impl AppError {
    pub fn new(status: StatusCode, body: APIError) -> Self {
        Self { status, body }
    }

    pub fn missing_authorization_header() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            APIError::authorization_header_missing(),
        )
    }

    pub fn invalid_bearer_token() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, APIError::invalid_bearer_token())
    }

    pub fn unauthorized(detail: &str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, APIError::unauthorized(detail))
    }

    pub fn token_exchange_failed() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            APIError::token_exchange_failed(),
        )
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, APIError::internal_error())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
