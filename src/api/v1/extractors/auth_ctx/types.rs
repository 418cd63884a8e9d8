/*
 * Responsibility
 * - The "authenticated context" handlers see
 * - The access middleware verifies the token and stores this in request extensions;
 *   handlers only ever receive this type
 */
use serde_json::{Map, Value};

use crate::services::auth::Claims;

/// Context attached to an authenticated request.
///
/// - `user_id` is the token subject as issued by the auth provider
/// - `role` is the provider's coarse role (e.g. `authenticated`)
/// - `user_metadata` is user-editable; `app_metadata` is provider-controlled
#[derive(Debug, Clone, PartialEq)]
pub struct AuthCtx {
    pub user_id: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub issued_at: Option<i64>,
    pub expires_at: i64,
    pub user_metadata: Map<String, Value>,
    pub app_metadata: Map<String, Value>,
}

impl AuthCtx {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
            role: None,
            issued_at: None,
            expires_at: 0,
            user_metadata: Map::new(),
            app_metadata: Map::new(),
        }
    }

    /// Admin is an explicit `is_admin: true` in user metadata; anything else is not.
    pub fn is_admin(&self) -> bool {
        matches!(self.user_metadata.get("is_admin"), Some(Value::Bool(true)))
    }

    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.user_metadata.get(key).and_then(Value::as_str)
    }

    /// Email when the provider supplied one, otherwise the subject.
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.user_id)
    }
}

impl From<Claims> for AuthCtx {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.subject,
            email: claims.email,
            role: claims.role,
            issued_at: claims.issued_at,
            expires_at: claims.expires_at,
            user_metadata: claims.user_metadata,
            app_metadata: claims.app_metadata,
        }
    }
}

/// Identity on optional-auth routes: `None` for anonymous callers.
#[derive(Debug, Clone, PartialEq)]
pub struct MaybeAuthCtx(pub Option<AuthCtx>);
