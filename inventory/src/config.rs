/*
 * Responsibility
 * - 環境変数の読み込み (PORT, APP_ENV, JWT_SECRET など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::net::SocketAddr;

use common::auth::AuthConfig;
use common::config::{AppEnv, ConfigError, env_lookup, listen_addr, load_dotenv};
use common::http::HttpConfig;

const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub auth: AuthConfig,
    pub http: HttpConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            addr: listen_addr(&lookup, DEFAULT_PORT)?,
            app_env: AppEnv::from_lookup(&lookup),
            auth: AuthConfig::from_lookup(&lookup)?,
            http: HttpConfig::from_lookup(&lookup)?,
        })
    }
}
