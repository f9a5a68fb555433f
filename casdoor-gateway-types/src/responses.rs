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

//! Success envelope for the gateway REST API.
//!
//! Every successful endpoint returns `{ "status": "ok", "data": <T> }`.

use serde::{Deserialize, Serialize};

/// Value of the `status` field on every successful response.
pub const STATUS_OK: &str = "ok";

/// Top-level success envelope.
///
/// ```json
/// { "status": "ok", "data": "eyJhbGciOiJSUzI1NiIs..." }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct APIResponse<T> {
    pub status: String,
    pub data: T,
}

impl<T: Serialize> APIResponse<T> {
    /// Wrap a successful result.
    pub fn ok(data: T) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_shape() {
        let body = serde_json::to_value(APIResponse::ok("access-token")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "status": "ok", "data": "access-token" })
        );
    }
}
