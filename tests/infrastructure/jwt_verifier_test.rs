use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

use semporna::application::ports::{TokenVerifier, TokenVerifierError};
use semporna::infrastructure::auth::{JwtTokenVerifier, MockTokenVerifier};

const SECRET: &str = "test-secret";

#[derive(Serialize)]
struct TestClaims {
    sub: String,
    exp: i64,
}

fn mint(secret: &str, sub: &str, exp: i64) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &TestClaims {
            sub: sub.to_string(),
            exp,
        },
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn in_one_hour() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

#[test]
fn given_valid_token_when_verifying_then_sub_round_trips() {
    let verifier = JwtTokenVerifier::new(SECRET);
    let token = mint(SECRET, "user-42", in_one_hour());

    let claims = verifier.verify(&token).unwrap();

    assert_eq!(claims.sub, "user-42");
}

#[test]
fn given_token_signed_with_other_secret_when_verifying_then_rejected() {
    let verifier = JwtTokenVerifier::new(SECRET);
    let token = mint("other-secret", "user-42", in_one_hour());

    assert!(matches!(
        verifier.verify(&token),
        Err(TokenVerifierError::InvalidToken(_))
    ));
}

#[test]
fn given_expired_token_when_verifying_then_expired_error() {
    let verifier = JwtTokenVerifier::new(SECRET);
    let token = mint(SECRET, "user-42", chrono::Utc::now().timestamp() - 3600);

    assert!(matches!(
        verifier.verify(&token),
        Err(TokenVerifierError::Expired)
    ));
}

#[test]
fn given_garbage_when_verifying_then_rejected() {
    let verifier = JwtTokenVerifier::new(SECRET);

    assert!(verifier.verify("not-a-jwt").is_err());
    assert!(verifier.verify("").is_err());
}

#[test]
fn given_known_token_when_mock_verifying_then_maps_to_subject() {
    let verifier = MockTokenVerifier::with_token("alice-token", "alice");

    assert_eq!(verifier.verify("alice-token").unwrap().sub, "alice");
    assert!(verifier.verify("bob-token").is_err());
}
