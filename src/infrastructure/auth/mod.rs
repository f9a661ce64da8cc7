mod jwt_verifier;
mod mock_verifier;

pub use jwt_verifier::JwtTokenVerifier;
pub use mock_verifier::MockTokenVerifier;
