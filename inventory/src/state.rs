/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use common::auth::AuthGate;

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: AuthGate,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            auth: AuthGate::new(&config.auth),
        }
    }
}
