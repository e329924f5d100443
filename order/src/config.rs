/*
 * Responsibility
 * - 環境変数の読み込み (PORT, APP_ENV, JWT_SECRET, INVENTORY_SERVICE_URL など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue};
use common::auth::{AuthConfig, internal_header_from_lookup};
use common::config::{AppEnv, ConfigError, env_lookup, listen_addr, load_dotenv};
use common::http::HttpConfig;
use url::Url;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_INVENTORY_SERVICE_URL: &str = "http://inventory_service:5001/check";
const DEFAULT_SERVICE_NAME: &str = "order-service";
const DEFAULT_INVENTORY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub auth: AuthConfig,
    pub http: HttpConfig,

    // GET target for the inventory check (full URL, path included)
    pub inventory_url: Url,
    // marker header sent on calls to other services, and its value
    pub internal_header: HeaderName,
    pub service_name: HeaderValue,
    // whole inventory call (connect + response); kept below http.request_timeout
    // so a stalled inventory answers 503 rather than the outer 408
    pub inventory_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let inventory_url = lookup("INVENTORY_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_INVENTORY_SERVICE_URL.to_string());
        let inventory_url = Url::parse(inventory_url.trim())
            .map_err(|_| ConfigError::Invalid("INVENTORY_SERVICE_URL"))?;
        if !matches!(inventory_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid("INVENTORY_SERVICE_URL"));
        }

        let service_name =
            lookup("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        let service_name = HeaderValue::from_str(service_name.trim())
            .map_err(|_| ConfigError::Invalid("SERVICE_NAME"))?;

        let http = HttpConfig::from_lookup(&lookup)?;
        let inventory_timeout = match lookup("INVENTORY_TIMEOUT_SECONDS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 && Duration::from_secs(secs) < http.request_timeout => {
                    Duration::from_secs(secs)
                }
                _ => return Err(ConfigError::Invalid("INVENTORY_TIMEOUT_SECONDS")),
            },
            None => DEFAULT_INVENTORY_TIMEOUT.min(http.request_timeout / 2),
        };

        Ok(Self {
            addr: listen_addr(&lookup, DEFAULT_PORT)?,
            app_env: AppEnv::from_lookup(&lookup),
            auth: AuthConfig::from_lookup(&lookup)?,
            http,
            inventory_url,
            internal_header: internal_header_from_lookup(&lookup)?,
            service_name,
            inventory_timeout,
        })
    }
}
