/*
 * Responsibility
 * - tokio runtime 起動
 * - app::run() の呼び出し（ロジックは置かない）
 */
use anyhow::Result;

mod api;
mod app;
mod config;
mod error;
mod services;
mod state;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
