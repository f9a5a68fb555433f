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

//! JWT signature and time-claim verification.

use jsonwebtoken::{decode, decode_header, Validation};

use super::certificate::VerifyingKey;
use super::claims::Claims;
use super::ProviderError;

/// Verify `token` against the certificate key and decode its claims.
///
/// The algorithm comes from the token header but must belong to the key's
/// family. `exp` is required; `exp` and `nbf` are checked with no leeway.
/// Audience and issuer are not checked.
pub fn verify_token(key: &VerifyingKey, token: &str) -> Result<Claims, ProviderError> {
    let header = decode_header(token)?;
    if !key.family.allows(header.alg) {
        return Err(ProviderError::UnexpectedAlgorithm(header.alg));
    }

    let mut validation = Validation::new(header.alg);
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.validate_aud = false;

    let data = decode::<Claims>(token, &key.key, &validation)?;
    Ok(data.claims)
}
