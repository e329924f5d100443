use axum::http::HeaderValue;
use jsonwebtoken::errors::ErrorKind;

use super::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

/// Pulls the token out of an `Authorization` header value.
///
/// - `Bearer <token>` → the field right after the first space
/// - anything else → the whole value is taken as the token (no scheme check)
///
/// Bytes outside visible ASCII can never form a JWT, so such a value is an
/// `InvalidToken` rather than a malformed header.
pub fn extract_bearer(value: &HeaderValue) -> Result<&str, AuthError> {
    let raw = value
        .to_str()
        .map_err(|_| AuthError::InvalidToken(ErrorKind::InvalidToken.into()))?;

    let token = if raw.starts_with(BEARER_PREFIX) {
        raw.split(' ').nth(1).unwrap_or_default()
    } else {
        raw
    };

    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}
