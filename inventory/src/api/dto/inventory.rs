use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InventoryCheckResponse {
    pub item_id: &'static str,
    pub available: bool,
    pub service: &'static str,
    pub message: &'static str,
    pub user: String,
}
