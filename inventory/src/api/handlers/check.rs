/*
 * Responsibility
 * - GET /check: 在庫の有無を返す (在庫データは固定)
 * - 呼び出し元の subject を user として返す
 */
use axum::Json;
use common::auth::AuthCtx;

use crate::api::dto::inventory::InventoryCheckResponse;

const ITEM_ID: &str = "Vinho-001";
const SERVICE_NAME: &str = "InventoryService";
const UNKNOWN_USER: &str = "unknown";

pub async fn check(AuthCtx(identity): AuthCtx) -> Json<InventoryCheckResponse> {
    tracing::debug!(source = ?identity.source(), "inventory check");

    Json(InventoryCheckResponse {
        item_id: ITEM_ID,
        available: true,
        service: SERVICE_NAME,
        message: "Item is available.",
        user: identity.subject().unwrap_or(UNKNOWN_USER).to_string(),
    })
}
