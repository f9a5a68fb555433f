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

//! GET /api/userinfo: verify the bearer token and return its user claims.

use axum::{extract::State, Json};
use casdoor_gateway_types::APIResponse;
use serde_json::{Map, Value};

use crate::auth::BearerToken;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/userinfo
///
/// Requires `Authorization: Bearer <jwt>`. Header problems are rejected by
/// the [`BearerToken`] extractor before this runs; a verification failure is
/// a 401 carrying the verifier's error text.
pub async fn userinfo(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<APIResponse<Map<String, Value>>>, AppError> {
    let claims = state.provider.verify_token(&token).await.map_err(|e| {
        tracing::warn!("Token verification failed: {e}");
        AppError::unauthorized(&e.to_string())
    })?;

    Ok(Json(APIResponse::ok(claims.user)))
}
