/// Claims surfaced to the application after a credential verifies.
#[derive(Debug, Clone)]
pub struct AuthClaims {
    pub sub: String,
}

/// Verification is a pure function of the token plus process-wide trust
/// configuration; implementations hold no per-request state.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<AuthClaims, TokenVerifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenVerifierError {
    #[error("token expired")]
    Expired,
    #[error("invalid token: {0}")]
    InvalidToken(String),
}
