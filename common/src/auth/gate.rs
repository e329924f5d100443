use std::sync::Arc;

use axum::http::{HeaderMap, HeaderName, header};

use super::{AuthConfig, AuthError, Identity, TokenVerifier, extract_bearer};

/// The authentication decision shared by every service.
///
/// Cheap to clone (internally `Arc`).
#[derive(Clone, Debug)]
pub struct AuthGate {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    verifier: TokenVerifier,
    internal_header: Option<HeaderName>,
}

impl AuthGate {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                verifier: TokenVerifier::new(config.jwt_secret.as_bytes(), config.leeway_seconds),
                internal_header: config.internal_header.clone(),
            }),
        }
    }

    pub fn internal_header(&self) -> Option<&HeaderName> {
        self.inner.internal_header.as_ref()
    }

    /// Decides who is calling, or why the request must be rejected.
    ///
    /// 1. marker header present (any value) → internal identity
    /// 2. `Authorization` absent → `MissingToken`
    /// 3. token extracted and verified → identity from its claims
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        if let Some(name) = &self.inner.internal_header {
            if let Some(caller) = headers.get(name) {
                tracing::debug!(caller = ?caller, "internal service call, authentication bypassed");
                return Ok(Identity::internal());
            }
        }

        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;
        let token = extract_bearer(value)?;

        let claims = self.inner.verifier.verify(token)?;
        Ok(Identity::from_claims(claims))
    }
}
