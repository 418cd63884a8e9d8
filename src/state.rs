/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Cheap to clone (everything behind Arc or Copy)
 */
use std::sync::Arc;

use crate::config::AppEnv;
use crate::services::{auth::Authenticator, progress::ProgressStore};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<Authenticator>,
    pub progress: Arc<dyn ProgressStore>,
    pub app_env: AppEnv,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .field("progress", &self.progress.backend_name())
            .field("app_env", &self.app_env)
            .finish()
    }
}

impl AppState {
    pub fn new(auth: Arc<Authenticator>, progress: Arc<dyn ProgressStore>, app_env: AppEnv) -> Self {
        Self {
            auth,
            progress,
            app_env,
        }
    }
}
