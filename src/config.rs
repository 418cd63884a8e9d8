/*
 * Responsibility
 * - Load settings from environment variables (.env is optional)
 * - Validate them; a missing or empty signing secret aborts startup
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::services::progress::memory::DEFAULT_MAX_RECORDS;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_AUDIENCE: &str = "authenticated";
const DEFAULT_CORS_ALLOWED_ORIGINS: &str =
    "http://localhost:3000,http://127.0.0.1:3000,http://localhost:3001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
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

/// Token verification settings, fixed for the lifetime of the process.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: Vec<u8>,
    pub algorithm: Algorithm,
    pub audience: String,
    pub issuer: Option<String>,
    pub leeway_seconds: u64,
}

impl AuthConfig {
    /// HS256 with the default audience and no leeway.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            audience: DEFAULT_AUDIENCE.to_string(),
            issuer: None,
            leeway_seconds: 0,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the secret
        f.debug_struct("AuthConfig")
            .field("algorithm", &self.algorithm)
            .field("audience", &self.audience)
            .field("issuer", &self.issuer)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub progress_max_records: usize,
    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup (env, map in tests, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let progress_max_records = match lookup("PROGRESS_MAX_RECORDS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid("PROGRESS_MAX_RECORDS"))?,
            None => DEFAULT_MAX_RECORDS,
        };

        let jwt_secret = lookup("AUTH_JWT_SECRET").ok_or(ConfigError::Missing("AUTH_JWT_SECRET"))?;
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::Invalid("AUTH_JWT_SECRET"));
        }

        let algorithm = match lookup("AUTH_JWT_ALGORITHM") {
            Some(raw) => parse_hmac_algorithm(&raw)?,
            None => Algorithm::HS256,
        };

        let audience = lookup("AUTH_AUDIENCE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string());

        let issuer = lookup("AUTH_ISSUER")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let leeway_seconds = match lookup("ACCESS_TOKEN_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("ACCESS_TOKEN_LEEWAY_SECONDS"))?,
            None => 0,
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            progress_max_records,
            auth: AuthConfig {
                jwt_secret: jwt_secret.into_bytes(),
                algorithm,
                audience,
                issuer,
                leeway_seconds,
            },
        })
    }
}

// Only shared-secret algorithms make sense for a single signing secret.
fn parse_hmac_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(ConfigError::Invalid("AUTH_JWT_ALGORITHM")),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = Config::from_lookup(lookup_from(&[("AUTH_JWT_SECRET", "s3cret")])).unwrap();

        assert_eq!(config.addr.port(), 8000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.cors_allowed_origins.len(), 3);
        assert_eq!(config.progress_max_records, 100_000);
        assert_eq!(config.auth.jwt_secret, b"s3cret".to_vec());
        assert_eq!(config.auth.algorithm, Algorithm::HS256);
        assert_eq!(config.auth.audience, "authenticated");
        assert_eq!(config.auth.issuer, None);
        assert_eq!(config.auth.leeway_seconds, 0);
    }

    #[test]
    fn missing_secret_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("AUTH_JWT_SECRET"));
    }

    #[test]
    fn blank_secret_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[("AUTH_JWT_SECRET", "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("AUTH_JWT_SECRET"));
    }

    #[test]
    fn asymmetric_algorithm_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("AUTH_JWT_SECRET", "s3cret"),
            ("AUTH_JWT_ALGORITHM", "RS256"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("AUTH_JWT_ALGORITHM"));
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("AUTH_JWT_SECRET", "s3cret"),
            ("PORT", "9100"),
            ("APP_ENV", "PROD"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("AUTH_JWT_ALGORITHM", "hs512"),
            ("AUTH_AUDIENCE", "app"),
            ("AUTH_ISSUER", "https://issuer.example/auth/v1"),
            ("ACCESS_TOKEN_LEEWAY_SECONDS", "5"),
            ("PROGRESS_MAX_RECORDS", "50"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 9100);
        assert!(config.app_env.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.auth.algorithm, Algorithm::HS512);
        assert_eq!(config.auth.audience, "app");
        assert_eq!(
            config.auth.issuer.as_deref(),
            Some("https://issuer.example/auth/v1")
        );
        assert_eq!(config.auth.leeway_seconds, 5);
        assert_eq!(config.progress_max_records, 50);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("AUTH_JWT_SECRET", "s3cret"),
            ("PORT", "http"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("PORT"));
    }

    #[test]
    fn zero_progress_capacity_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("AUTH_JWT_SECRET", "s3cret"),
            ("PROGRESS_MAX_RECORDS", "0"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("PROGRESS_MAX_RECORDS"));
    }

    #[test]
    fn debug_output_hides_secret() {
        let auth = AuthConfig::new("do-not-print-me");
        let printed = format!("{:?}", auth);
        assert!(!printed.contains("do-not-print-me"));
    }
}
