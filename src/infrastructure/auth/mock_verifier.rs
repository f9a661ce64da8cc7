use std::collections::HashMap;

use crate::application::ports::{AuthClaims, TokenVerifier, TokenVerifierError};

/// Test verifier mapping known tokens to subjects; anything else is
/// rejected.
pub struct MockTokenVerifier {
    tokens: HashMap<String, String>,
}

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self {
            tokens: HashMap::new(),
        }
    }

    pub fn with_token(token: impl Into<String>, sub: impl Into<String>) -> Self {
        let mut verifier = Self::new();
        verifier.insert(token, sub);
        verifier
    }

    pub fn insert(&mut self, token: impl Into<String>, sub: impl Into<String>) {
        self.tokens.insert(token.into(), sub.into());
    }
}

impl Default for MockTokenVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenVerifier for MockTokenVerifier {
    fn verify(&self, token: &str) -> Result<AuthClaims, TokenVerifierError> {
        self.tokens
            .get(token)
            .map(|sub| AuthClaims { sub: sub.clone() })
            .ok_or_else(|| TokenVerifierError::InvalidToken("unknown token".to_string()))
    }
}
