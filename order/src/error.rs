/*
 * Responsibility
 * - order 側の失敗を HTTP status / JSON body に変換
 *   - 在庫サービスに到達できない → 503 (インフラ障害)
 *   - 到達できたが在庫なし・異常応答 → 400 (業務上の拒否)
 * - 認証失敗 (401) は common::auth::AuthError が担当
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::inventory_client::InventoryError;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot connect to Inventory Service. Service Discovery failed or service is down.")]
    UpstreamUnavailable,
    #[error("Inventory check failed or item unavailable.")]
    BusinessRejection,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, label) = match &self {
            AppError::UpstreamUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "Error"),
            AppError::BusinessRejection => (StatusCode::BAD_REQUEST, "Failed"),
        };

        let body = StatusResponse {
            status: label,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<InventoryError> for AppError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::Unreachable(_) => AppError::UpstreamUnavailable,
            InventoryError::UnexpectedStatus(_) | InventoryError::InvalidBody(_) => {
                AppError::BusinessRejection
            }
        }
    }
}
