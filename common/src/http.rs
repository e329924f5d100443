//! HTTP-level middleware (cross-cutting concerns) shared by both services.
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging / request tracing (TraceLayer)
//! - Body size limits (`BODY_LIMIT_BYTES`)
//! - Global timeouts (`REQUEST_TIMEOUT_SECONDS`)

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::{StatusCode, header::HeaderName};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Limits applied to every inbound request of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    // whole-request budget; exceeding it answers 408
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl HttpConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS")),
            },
            None => defaults.request_timeout,
        };

        let body_limit_bytes = match lookup("BODY_LIMIT_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("BODY_LIMIT_BYTES"))?,
            None => defaults.body_limit_bytes,
        };

        Ok(Self {
            request_timeout,
            body_limit_bytes,
        })
    }
}

/// Apply HTTP-level middleware to the given Router.
///
/// - Request-Id header: `x-request-id` (generated when missing, echoed on the response)
/// - Body limit / timeout: from `HttpConfig` (timeout answers 408)
pub fn apply(router: Router, config: &HttpConfig) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        // Make the service error `Infallible` by converting errors into responses.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }))
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}
