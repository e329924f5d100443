//! Outbound call to the inventory service.
//!
//! The call is tagged with the internal marker header, so the inventory gate
//! bypasses authentication regardless of who called the order service.
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use common::http::REQUEST_ID_HEADER;
use serde_json::Value;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum InventoryError {
    // connect refused / DNS / timed out / connection dropped
    #[error("inventory service unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("inventory service answered with status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("inventory service returned an undecodable body: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

/// Answers "is the item in stock?" on behalf of the order handler.
#[async_trait]
pub trait InventoryGateway: Send + Sync + 'static {
    /// Returns the inventory payload of a `200` answer, verbatim.
    async fn check(&self, request_id: Option<&HeaderValue>) -> Result<Value, InventoryError>;
}

/// `reqwest`-backed gateway. No retries.
///
/// `timeout` bounds the whole call, so a stalled inventory surfaces as `Unreachable`.
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    client: reqwest::Client,
    url: Url,
    internal_header: HeaderName,
    caller: HeaderValue,
}

impl HttpInventoryClient {
    pub fn new(
        url: Url,
        internal_header: HeaderName,
        caller: HeaderValue,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url,
            internal_header,
            caller,
        })
    }
}

#[async_trait]
impl InventoryGateway for HttpInventoryClient {
    async fn check(&self, request_id: Option<&HeaderValue>) -> Result<Value, InventoryError> {
        let mut req = self
            .client
            .get(self.url.clone())
            .header(self.internal_header.clone(), self.caller.clone());

        if let Some(id) = request_id {
            req = req.header(REQUEST_ID_HEADER, id.clone());
        }

        let resp = req.send().await.map_err(InventoryError::Unreachable)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(InventoryError::UnexpectedStatus(status));
        }

        resp.json::<Value>().await.map_err(|err| {
            if err.is_decode() {
                InventoryError::InvalidBody(err)
            } else {
                InventoryError::Unreachable(err)
            }
        })
    }
}

/// `available` must be JSON `true`; anything else counts as out of stock.
pub fn reports_available(payload: &Value) -> bool {
    matches!(payload.get("available"), Some(Value::Bool(true)))
}
