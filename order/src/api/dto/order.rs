use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct OrderCreatedResponse {
    pub status: &'static str,
    // inventory payload, echoed as received
    pub inventory_check: Value,
    pub message: &'static str,
    pub user: String,
}
