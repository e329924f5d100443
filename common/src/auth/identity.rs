/*
 * Responsibility
 * - Handler から見える「認証済み主体」の型
 * - gate が request extensions に格納し、handler は AuthCtx 経由で受け取る
 */
use serde::Serialize;
use serde_json::{Map, Value};

/// Decoded JWT payload, kept verbatim.
pub type Claims = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentitySource {
    InternalService,
    BearerToken,
}

/// Who is calling.
///
/// - `InternalService`: the marker header was present; claims are synthetic
/// - `BearerToken`: claims are exactly what the verified token carried
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    claims: Claims,
    source: IdentitySource,
}

impl Identity {
    pub const INTERNAL_SUBJECT: &'static str = "internal_service";
    pub const INTERNAL_ROLE: &'static str = "service";

    pub fn internal() -> Self {
        let mut claims = Claims::new();
        claims.insert("sub".into(), Value::from(Self::INTERNAL_SUBJECT));
        claims.insert("role".into(), Value::from(Self::INTERNAL_ROLE));

        Self {
            claims,
            source: IdentitySource::InternalService,
        }
    }

    pub fn from_claims(claims: Claims) -> Self {
        Self {
            claims,
            source: IdentitySource::BearerToken,
        }
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn into_claims(self) -> Claims {
        self.claims
    }

    pub fn source(&self) -> IdentitySource {
        self.source
    }

    pub fn is_internal(&self) -> bool {
        self.source == IdentitySource::InternalService
    }

    /// `sub` claim, if it is a string.
    pub fn subject(&self) -> Option<&str> {
        self.claims.get("sub").and_then(Value::as_str)
    }

    pub fn role(&self) -> Option<&str> {
        self.claims.get("role").and_then(Value::as_str)
    }
}
