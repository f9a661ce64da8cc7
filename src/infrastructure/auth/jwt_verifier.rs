use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::application::ports::{AuthClaims, TokenVerifier, TokenVerifierError};

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

/// HS256 verifier keyed by the process-wide shared secret. `exp` is
/// required and validated; everything else rides along in the claims.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<AuthClaims, TokenVerifierError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenVerifierError::Expired,
                    _ => TokenVerifierError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(AuthClaims {
            sub: token_data.claims.sub,
        })
    }
}
