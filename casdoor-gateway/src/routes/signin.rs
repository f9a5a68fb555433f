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

//! POST /api/signin: authorization code → access token.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use casdoor_gateway_types::APIResponse;

use crate::error::AppError;
use crate::state::AppState;

/// `code` and `state` from the sign-in query string. A key that appears
/// more than once keeps its first value; an absent key is an empty string.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SigninQuery {
    pub code: String,
    pub state: String,
}

impl SigninQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut code = None;
        let mut state = None;
        for (key, value) in pairs {
            match key.as_str() {
                "code" if code.is_none() => code = Some(value),
                "state" if state.is_none() => state = Some(value),
                _ => {}
            }
        }
        Self {
            code: code.unwrap_or_default(),
            state: state.unwrap_or_default(),
        }
    }
}

/// POST /api/signin?code=...&state=...
///
/// Exchanges the authorization code with the identity provider and returns
/// the access token. Any failure is a 500 with a fixed message; the provider
/// error is only logged.
pub async fn signin(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<APIResponse<String>>, AppError> {
    let query = match query {
        Ok(Query(pairs)) => SigninQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!("Unparsable sign-in query: {rejection}");
            SigninQuery::default()
        }
    };

    let token = state
        .provider
        .exchange_code(&query.code, &query.state)
        .await
        .map_err(|e| {
            tracing::error!("GetOAuthToken() error: {e}");
            AppError::token_exchange_failed()
        })?;

    Ok(Json(APIResponse::ok(token.access_token)))
}
