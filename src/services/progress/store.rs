//! Learning-progress store interface used by the handlers.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::services::leaderboard::UserTotal;

/// Store-layer errors.
///
/// Kept independent from `AppError` so callers decide how to surface them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("progress store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct NewProgress {
    pub user_id: String,
    pub module: String,
    pub lesson: String,
    pub score: u8,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub id: Uuid,
    pub user_id: String,
    pub module: String,
    pub lesson: String,
    pub score: u8,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStats {
    pub total_users: u64,
    pub total_sessions: u64,
}

/// A minimal progress store.
///
/// Implementations must be shareable across request tasks (`Arc<dyn ProgressStore>`).
#[async_trait]
pub trait ProgressStore: Send + Sync {
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn record(&self, progress: NewProgress) -> Result<ProgressRecord, StoreError>;

    // Newest first.
    async fn history_for(&self, user_id: &str) -> Result<Vec<ProgressRecord>, StoreError>;

    // Sum of scores per user, unordered.
    async fn totals(&self) -> Result<Vec<UserTotal>, StoreError>;

    async fn stats(&self) -> Result<ProgressStats, StoreError>;
}
