/*
 * Responsibility
 * - URL 構造を定義
 * - /health は認証なし、/check は Auth Gate の内側
 */
use axum::{Router, routing::get};
use common::auth;

use crate::api::handlers::{check::check, health::health};
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new().route("/check", get(check));

    Router::new()
        .route("/health", get(health))
        .merge(auth::apply(protected, state.auth.clone()))
}
