/*
 * Responsibility
 * - Learning-progress request/response DTOs
 * - validate() does shape checks only; ownership is checked in the handler
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::progress::ProgressRecord;

#[derive(Debug, Deserialize)]
pub struct LearningProgressRequest {
    pub user_id: String,
    pub module: String,
    pub lesson: String,
    pub score: i64,
    // Defaults to the time the request is handled.
    pub completed_at: Option<DateTime<Utc>>,
}

impl LearningProgressRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.user_id.trim().is_empty() {
            return Err("user_id is required");
        }
        if self.module.trim().is_empty() {
            return Err("module is required");
        }
        if self.lesson.trim().is_empty() {
            return Err("lesson is required");
        }
        if !(0..=100).contains(&self.score) {
            return Err("score must be between 0 and 100");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct LearningProgressResponse {
    pub id: Uuid,
    pub user_id: String,
    pub module: String,
    pub lesson: String,
    pub score: u8,
    pub completed_at: DateTime<Utc>,
}

impl From<ProgressRecord> for LearningProgressResponse {
    fn from(r: ProgressRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            module: r.module,
            lesson: r.lesson,
            score: r.score,
            completed_at: r.completed_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LearningHistoryResponse {
    pub user_id: String,
    pub learning_sessions: Vec<LearningProgressResponse>,
}
