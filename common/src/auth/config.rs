use std::fmt;

use axum::http::HeaderName;

use crate::config::{AppEnv, ConfigError, env_lookup, load_dotenv, parse_flag};

/// Development-only fallback. Anyone who knows it can mint tokens.
pub const DEFAULT_JWT_SECRET: &str = "minha_chave_secreta_vinheria";

pub const DEFAULT_INTERNAL_HEADER: &str = "x-internal-service";

/// Settings for the auth gate, shared by every service.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    // true when JWT_SECRET was unset and DEFAULT_JWT_SECRET is in use
    pub secret_is_default: bool,
    // None disables the internal-service bypass entirely
    pub internal_header: Option<HeaderName>,
    pub leeway_seconds: u64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print the secret
        f.debug_struct("AuthConfig")
            .field("secret_is_default", &self.secret_is_default)
            .field("internal_header", &self.internal_header)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            secret_is_default: false,
            internal_header: Some(HeaderName::from_static(DEFAULT_INTERNAL_HEADER)),
            leeway_seconds: 0,
        }
    }

    pub fn without_internal_bypass(mut self) -> Self {
        self.internal_header = None;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let (jwt_secret, secret_is_default) = match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => (secret, false),
            Some(_) => return Err(ConfigError::Invalid("JWT_SECRET")),
            None => (DEFAULT_JWT_SECRET.to_string(), true),
        };

        let bypass_enabled = match lookup("INTERNAL_BYPASS") {
            Some(raw) => parse_flag(&raw, "INTERNAL_BYPASS")?,
            None => true,
        };

        let internal_header = if bypass_enabled {
            Some(internal_header_from_lookup(&lookup)?)
        } else {
            None
        };

        let leeway_seconds = match lookup("JWT_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("JWT_LEEWAY_SECONDS"))?,
            None => 0,
        };

        Ok(Self {
            jwt_secret,
            secret_is_default,
            internal_header,
            leeway_seconds,
        })
    }

    /// Surfaces the insecure parts of this configuration in the logs.
    pub fn log_warnings(&self, app_env: AppEnv) {
        if self.secret_is_default {
            if app_env.is_production() {
                tracing::error!(
                    "JWT_SECRET is not set; using the built-in development secret in production"
                );
            } else {
                tracing::warn!("JWT_SECRET is not set; using the built-in development secret");
            }
        }

        match &self.internal_header {
            Some(name) => tracing::warn!(
                header = %name,
                "internal-service bypass enabled: any caller sending this header skips authentication"
            ),
            None => tracing::info!("internal-service bypass disabled"),
        }
    }
}

/// Name of the internal-call marker header (`INTERNAL_SERVICE_HEADER`).
///
/// Services that call each other send this header; the receiving gate looks for it.
pub fn internal_header_from_lookup(
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<HeaderName, ConfigError> {
    let name =
        lookup("INTERNAL_SERVICE_HEADER").unwrap_or_else(|| DEFAULT_INTERNAL_HEADER.to_string());
    HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|_| ConfigError::Invalid("INTERNAL_SERVICE_HEADER"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_development_secret() {
        let config = AuthConfig::from_lookup(vars(&[])).unwrap();
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert!(config.secret_is_default);
        assert_eq!(
            config.internal_header,
            Some(HeaderName::from_static("x-internal-service"))
        );
        assert_eq!(config.leeway_seconds, 0);
    }

    #[test]
    fn reads_explicit_values() {
        let config = AuthConfig::from_lookup(vars(&[
            ("JWT_SECRET", "s3cret"),
            ("INTERNAL_SERVICE_HEADER", "X-Service-Call"),
            ("JWT_LEEWAY_SECONDS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.jwt_secret, "s3cret");
        assert!(!config.secret_is_default);
        assert_eq!(
            config.internal_header,
            Some(HeaderName::from_static("x-service-call"))
        );
        assert_eq!(config.leeway_seconds, 5);
    }

    #[test]
    fn bypass_can_be_switched_off() {
        let config = AuthConfig::from_lookup(vars(&[("INTERNAL_BYPASS", "off")])).unwrap();
        assert!(config.internal_header.is_none());
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            AuthConfig::from_lookup(vars(&[("JWT_SECRET", "")])).unwrap_err(),
            ConfigError::Invalid("JWT_SECRET")
        );
        assert_eq!(
            AuthConfig::from_lookup(vars(&[("INTERNAL_SERVICE_HEADER", "bad header")]))
                .unwrap_err(),
            ConfigError::Invalid("INTERNAL_SERVICE_HEADER")
        );
        assert_eq!(
            AuthConfig::from_lookup(vars(&[("JWT_LEEWAY_SECONDS", "-1")])).unwrap_err(),
            ConfigError::Invalid("JWT_LEEWAY_SECONDS")
        );
    }

    #[test]
    fn debug_hides_secret() {
        let config = AuthConfig::new("top-secret-value");
        assert!(!format!("{config:?}").contains("top-secret-value"));
    }
}
