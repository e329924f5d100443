/*
 * Responsibility
 * - POST /create: 在庫サービスに内部呼び出しで在庫確認 → 注文結果を返す
 * - 在庫サービスへの呼び出しは常に内部ヘッダ付き (呼び出し元の token は引き継がない)
 */
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use common::auth::AuthCtx;
use common::http::REQUEST_ID_HEADER;

use crate::api::dto::order::OrderCreatedResponse;
use crate::error::AppError;
use crate::services::inventory_client::reports_available;
use crate::state::AppState;

const UNKNOWN_USER: &str = "unknown";

pub async fn create_order(
    State(state): State<AppState>,
    AuthCtx(identity): AuthCtx,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<OrderCreatedResponse>), AppError> {
    let inventory = state
        .inventory
        .check(headers.get(REQUEST_ID_HEADER))
        .await
        .map_err(|err| {
            tracing::warn!(error = ?err, "inventory check failed");
            AppError::from(err)
        })?;

    if !reports_available(&inventory) {
        tracing::info!("inventory reports item unavailable");
        return Err(AppError::BusinessRejection);
    }

    let user = identity.subject().unwrap_or(UNKNOWN_USER).to_string();
    tracing::info!(user = %user, "order created");

    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse {
            status: "Order Created",
            inventory_check: inventory,
            message: "Order processed and inventory confirmed.",
            user,
        }),
    ))
}
