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

//! Verification key taken from the configured Casdoor certificate.
//!
//! Casdoor publishes its token-signing key as an X.509 certificate. A bare
//! SubjectPublicKeyInfo (`PUBLIC KEY`) PEM is accepted as well.

use jsonwebtoken::{Algorithm, DecodingKey};
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::FromDer;
use x509_parser::public_key::PublicKey;
use x509_parser::x509::SubjectPublicKeyInfo;

use super::ProviderError;

/// Key type of the signing certificate. Decides which JWT algorithms are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFamily {
    Rsa,
    Ec,
}

impl KeyFamily {
    pub fn allows(self, alg: Algorithm) -> bool {
        match self {
            KeyFamily::Rsa => matches!(
                alg,
                Algorithm::RS256
                    | Algorithm::RS384
                    | Algorithm::RS512
                    | Algorithm::PS256
                    | Algorithm::PS384
                    | Algorithm::PS512
            ),
            KeyFamily::Ec => matches!(alg, Algorithm::ES256 | Algorithm::ES384),
        }
    }
}

/// Decoding key plus the family it belongs to.
#[derive(Clone)]
pub struct VerifyingKey {
    pub family: KeyFamily,
    pub key: DecodingKey,
}

impl VerifyingKey {
    /// Parse a `CERTIFICATE` or `PUBLIC KEY` PEM block.
    pub fn from_pem(pem: &str) -> Result<Self, ProviderError> {
        let (_, pem) = parse_x509_pem(pem.trim().as_bytes())
            .map_err(|e| ProviderError::Certificate(format!("bad PEM: {e}")))?;

        match pem.label.as_str() {
            "CERTIFICATE" => {
                let cert = pem
                    .parse_x509()
                    .map_err(|e| ProviderError::Certificate(e.to_string()))?;
                Self::from_spki(cert.public_key())
            }
            "PUBLIC KEY" => {
                let (_, spki) = SubjectPublicKeyInfo::from_der(&pem.contents)
                    .map_err(|e| ProviderError::Certificate(e.to_string()))?;
                Self::from_spki(&spki)
            }
            other => Err(ProviderError::Certificate(format!(
                "unsupported PEM block: {other}"
            ))),
        }
    }

    fn from_spki(spki: &SubjectPublicKeyInfo<'_>) -> Result<Self, ProviderError> {
        // The BIT STRING holds a PKCS#1 RSAPublicKey or an uncompressed EC point.
        let raw = &spki.subject_public_key.data;
        match spki.parsed() {
            Ok(PublicKey::RSA(_)) => Ok(Self {
                family: KeyFamily::Rsa,
                key: DecodingKey::from_rsa_der(raw),
            }),
            Ok(PublicKey::EC(_)) => Ok(Self {
                family: KeyFamily::Ec,
                key: DecodingKey::from_ec_der(raw),
            }),
            Ok(_) => Err(ProviderError::Certificate(
                "unsupported public key type".to_string(),
            )),
            Err(e) => Err(ProviderError::Certificate(e.to_string())),
        }
    }
}

impl std::fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}
