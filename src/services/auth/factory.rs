/// Factory: build `Authenticator` from application `Config`.
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::services::auth::Authenticator;

/// Refuses an empty secret so a misconfigured process never accepts every token.
pub fn build_authenticator(config: &Config) -> Result<Arc<Authenticator>, ConfigError> {
    if config.auth.jwt_secret.iter().all(u8::is_ascii_whitespace) {
        return Err(ConfigError::Invalid("AUTH_JWT_SECRET"));
    }

    tracing::info!(
        algorithm = ?config.auth.algorithm,
        audience = %config.auth.audience,
        issuer = ?config.auth.issuer,
        "access token verification configured"
    );

    Ok(Arc::new(Authenticator::new(&config.auth)))
}
