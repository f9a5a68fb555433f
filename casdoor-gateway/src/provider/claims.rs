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

//! Claims carried by a Casdoor access token.
//!
//! Casdoor flattens the signed-in user into the JWT payload next to the
//! registered claims. Everything that is not a registered claim or token
//! metadata is kept verbatim as the `user` object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded JWT payload.
///
/// # Example payload
///
/// ```json
/// {
///   "owner": "built-in",
///   "name": "admin",
///   "displayName": "Admin",
///   "email": "admin@example.com",
///   "tokenType": "access-token",
///   "iss": "http://localhost:8000",
///   "sub": "9a6b...",
///   "aud": ["294b09fbc17f95daf2fe"],
///   "exp": 1707004800,
///   "iat": 1706400000
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Every claim not captured by a named field: the user object.
    #[serde(flatten)]
    pub user: Map<String, Value>,

    #[serde(rename = "accessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(rename = "tokenType", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(
        rename = "refreshTokenType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub refresh_token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Single string or array, kept raw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Build claims for a user object with no token metadata.
    pub fn for_user(user: Map<String, Value>) -> Self {
        Self {
            user,
            ..Default::default()
        }
    }
}
