/*
 * Responsibility
 * - inventory / order の両サービスが共有する部品
 *   - auth: JWT 検証 + 内部呼び出し bypass (Auth Gate)
 *   - config / http / telemetry / shutdown: 起動まわりの共通処理
 */
pub mod auth;
pub mod config;
pub mod http;
pub mod shutdown;
pub mod telemetry;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;
