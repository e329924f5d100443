/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use common::auth::AuthGate;

use crate::services::inventory_client::InventoryGateway;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthGate,
    pub inventory: Arc<dyn InventoryGateway>,
}

impl AppState {
    pub fn new(auth: AuthGate, inventory: Arc<dyn InventoryGateway>) -> Self {
        Self { auth, inventory }
    }
}
