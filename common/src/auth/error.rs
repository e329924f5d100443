use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Rejections produced by the auth gate. All of them are terminal for the request.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication token not provided")]
    MissingToken,
    #[error("malformed Authorization header")]
    MalformedHeader,
    #[error("invalid token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
    #[error("token expired")]
    ExpiredToken,
}

/// Coarse classification of [`AuthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    Unauthenticated,
    InvalidToken,
    ExpiredToken,
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::MissingToken | AuthError::MalformedHeader => AuthErrorKind::Unauthenticated,
            AuthError::InvalidToken(_) => AuthErrorKind::InvalidToken,
            AuthError::ExpiredToken => AuthErrorKind::ExpiredToken,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}
