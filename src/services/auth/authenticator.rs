use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, Validation};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::AuthConfig;

/// Why a credential was refused.
///
/// All kinds surface to clients as the same 401; the distinction exists for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("missing credential")]
    MissingCredential,
    #[error("malformed credential")]
    Malformed,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("expired credential")]
    Expired,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::Malformed => "malformed",
            Self::InvalidSignature => "invalid_signature",
            Self::Expired => "expired",
        }
    }
}

/// Whether an endpoint tolerates anonymous callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Required,
    Optional,
}

/// Outcome of a successful authentication.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    Authenticated(Claims),
    /// No credential was supplied on an optional endpoint.
    Anonymous,
}

/// Verified identity extracted from a credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    pub subject: String,
    pub expires_at: i64,
    pub issuer: Option<String>,
    pub issued_at: Option<i64>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub user_metadata: Map<String, Value>,
    pub app_metadata: Map<String, Value>,
}

// Wire shape of the token payload. `aud`/`iss` constraints are enforced by `Validation`.
#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(default)]
    sub: Option<String>,
    exp: i64,
    #[serde(default)]
    iss: Option<String>,
    #[serde(default)]
    iat: Option<i64>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    user_metadata: Option<Map<String, Value>>,
    #[serde(default)]
    app_metadata: Option<Map<String, Value>>,
}

/// Verifies HMAC-signed bearer tokens against the process-wide secret.
///
/// Verification is local and stateless: no call goes back to the token issuer, so a
/// revoked token stays valid until it expires. Key material is not printable via Debug.
#[derive(Clone)]
pub struct Authenticator {
    decoding_key: DecodingKey,
    validation: Validation,
    leeway_seconds: i64,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    pub fn new(config: &AuthConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(&config.jwt_secret);

        // An audience or issuer constraint only binds if the claim is also required;
        // otherwise a token that leaves it out would pass.
        let mut required = vec!["exp", "sub", "aud"];
        let mut validation = Validation::new(config.algorithm);
        validation.set_audience(&[config.audience.as_str()]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer.as_str()]);
            required.push("iss");
        }
        validation.set_required_spec_claims(&required);
        // Expiry is checked in `authenticate_at` against an explicit clock, strictly.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            decoding_key,
            validation,
            leeway_seconds: i64::try_from(config.leeway_seconds).unwrap_or(i64::MAX),
        }
    }

    pub fn authenticate(
        &self,
        credential: Option<&str>,
        mode: AuthMode,
    ) -> Result<Identity, Rejection> {
        self.authenticate_at(credential, mode, chrono::Utc::now().timestamp())
    }

    /// Authenticate against an explicit verification time (unix seconds).
    pub fn authenticate_at(
        &self,
        credential: Option<&str>,
        mode: AuthMode,
        now: i64,
    ) -> Result<Identity, Rejection> {
        let Some(token) = credential else {
            return match mode {
                AuthMode::Required => Err(Rejection::MissingCredential),
                AuthMode::Optional => Ok(Identity::Anonymous),
            };
        };

        self.verify_at(token, now).map(Identity::Authenticated)
    }

    /// Credential must be present and valid.
    pub fn require(&self, credential: Option<&str>) -> Result<Claims, Rejection> {
        match self.authenticate(credential, AuthMode::Required)? {
            Identity::Authenticated(claims) => Ok(claims),
            Identity::Anonymous => Err(Rejection::MissingCredential),
        }
    }

    /// Absent credential yields `None`; a present one must still be valid.
    pub fn optional(&self, credential: Option<&str>) -> Result<Option<Claims>, Rejection> {
        match self.authenticate(credential, AuthMode::Optional)? {
            Identity::Authenticated(claims) => Ok(Some(claims)),
            Identity::Anonymous => Ok(None),
        }
    }

    fn verify_at(&self, token: &str, now: i64) -> Result<Claims, Rejection> {
        if token.trim().is_empty() {
            return Err(Rejection::Malformed);
        }

        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| {
                tracing::debug!(error_kind = ?err.kind(), "token decode failed");
                classify(err.kind())
            })?;

        let claims = data.claims;

        // Strictly in the future: a token expiring this very second is already expired.
        if claims.exp.saturating_add(self.leeway_seconds) <= now {
            return Err(Rejection::Expired);
        }

        let subject = claims
            .sub
            .filter(|s| !s.trim().is_empty())
            .ok_or(Rejection::Malformed)?;

        Ok(Claims {
            subject,
            expires_at: claims.exp,
            issuer: claims.iss,
            issued_at: claims.iat,
            email: claims.email.filter(|s| !s.trim().is_empty()),
            role: claims.role,
            user_metadata: claims.user_metadata.unwrap_or_default(),
            app_metadata: claims.app_metadata.unwrap_or_default(),
        })
    }
}

// Anything that is neither a bad signature nor expiry folds into `Malformed`.
fn classify(kind: &ErrorKind) -> Rejection {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => Rejection::InvalidSignature,
        ErrorKind::ExpiredSignature => Rejection::Expired,
        _ => Rejection::Malformed,
    }
}
