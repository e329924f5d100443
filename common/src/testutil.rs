//! Token helpers for tests.
//!
//! Feature-gated behind `testutil` so the service crates can mint tokens in
//! their own tests:
//!
//! ```toml
//! [dev-dependencies]
//! common = { workspace = true, features = ["testutil"] }
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Value, json};

/// Signs an arbitrary payload with HS256.
pub fn sign_claims(secret: &str, claims: &Value) -> String {
    sign_token_with_alg(Algorithm::HS256, secret, claims)
}

pub fn sign_token_with_alg(alg: Algorithm, secret: &str, claims: &Value) -> String {
    let mut header = Header::new(alg);
    header.typ = Some("JWT".to_string());
    jsonwebtoken::encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes()))
        .expect("failed to sign test token")
}

/// `{sub, exp}` payload expiring `ttl` from now (negative = already expired).
pub fn claims_for(sub: &str, ttl: Duration) -> Value {
    json!({
        "sub": sub,
        "exp": (Utc::now() + ttl).timestamp(),
    })
}

pub fn token_for(secret: &str, sub: &str, ttl: Duration) -> String {
    sign_claims(secret, &claims_for(sub, ttl))
}
