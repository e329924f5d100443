use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::{AuthError, Identity};

/// Handler で Identity を受け取るための extractor
/// gate が Identity を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（gate 未設定のルート）
#[derive(Debug, Clone)]
pub struct AuthCtx(pub Identity);

impl<S> FromRequestParts<S> for AuthCtx
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthCtx)
            .ok_or(AuthError::MissingToken)
    }
}
