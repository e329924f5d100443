/*
 * Responsibility
 * - サービス共通の設定値の読み込み (APP_ENV, PORT)
 * - 設定値のバリデーション (不正なら起動失敗)
 *
 * Notes
 * - 読み込みは lookup 関数経由で行う。from_env() は std::env を渡すだけ
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup("APP_ENV")
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Reads `.env` into the process environment, if the file exists.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// `0.0.0.0:<PORT>`; falls back to `default_port` when `PORT` is unset.
pub fn listen_addr(
    lookup: &impl Fn(&str) -> Option<String>,
    default_port: u16,
) -> Result<SocketAddr, ConfigError> {
    let port: u16 = match lookup("PORT") {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
        None => default_port,
    };

    SocketAddr::from_str(&format!("0.0.0.0:{}", port)).map_err(|_| ConfigError::Invalid("PORT"))
}

/// Parses a boolean switch (`true/false`, `on/off`, `1/0`, `yes/no`).
pub fn parse_flag(raw: &str, key: &'static str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid(key)),
    }
}
