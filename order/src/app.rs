/*
 * Responsibility
 * - Config読み込み → 依存生成 (AuthGate, InventoryClient) → Router 組み立て
 * - HTTP 共通 middleware の適用
 * - axum::serve() で起動
 */
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use common::auth::AuthGate;
use common::http::{self, HttpConfig};
use common::{shutdown, telemetry};

use crate::services::inventory_client::HttpInventoryClient;
use crate::{api, config::Config, state::AppState};

pub async fn run() -> Result<()> {
    telemetry::init_tracing();
    let config = Config::from_env()?;

    telemetry::init_panic_hook(!config.app_env.is_production());
    config.auth.log_warnings(config.app_env);

    tracing::info!(
        inventory_url = %config.inventory_url,
        "starting order service in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config)?;
    let app = build_router(state, &config.http);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;
    Ok(())
}

fn build_state(config: &Config) -> Result<AppState> {
    let inventory = HttpInventoryClient::new(
        config.inventory_url.clone(),
        config.internal_header.clone(),
        config.service_name.clone(),
        config.inventory_timeout,
    )
    .context("failed to build inventory HTTP client")?;

    Ok(AppState::new(
        AuthGate::new(&config.auth),
        Arc::new(inventory),
    ))
}

pub fn build_router(state: AppState, http_config: &HttpConfig) -> Router {
    let router = api::routes(&state).with_state(state);
    http::apply(router, http_config)
}
