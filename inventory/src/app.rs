/*
 * Responsibility
 * - Config読み込み → 依存生成 → Router 組み立て
 * - HTTP 共通 middleware の適用
 * - axum::serve() で起動
 */
use anyhow::Result;
use axum::Router;
use common::http::{self, HttpConfig};
use common::{shutdown, telemetry};

use crate::{api, config::Config, state::AppState};

pub async fn run() -> Result<()> {
    telemetry::init_tracing();
    let config = Config::from_env()?;

    telemetry::init_panic_hook(!config.app_env.is_production());
    config.auth.log_warnings(config.app_env);

    tracing::info!(
        "starting inventory service in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = AppState::new(&config);
    let app = build_router(state, &config.http);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;
    Ok(())
}

pub fn build_router(state: AppState, http_config: &HttpConfig) -> Router {
    let router = api::routes(&state).with_state(state);
    http::apply(router, http_config)
}
