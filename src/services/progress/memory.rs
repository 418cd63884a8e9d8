use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::services::leaderboard::UserTotal;

use super::store::{NewProgress, ProgressRecord, ProgressStats, ProgressStore, StoreError};

pub const DEFAULT_MAX_RECORDS: usize = 100_000;

/// Process-local store; contents are lost on restart.
///
/// Holds at most `max_records` entries. Once full, `record` fails with
/// `StoreError::Unavailable` instead of growing further.
#[derive(Debug)]
pub struct InMemoryProgressStore {
    records: RwLock<Vec<ProgressRecord>>,
    max_records: usize,
}

impl Default for InMemoryProgressStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_RECORDS)
    }
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_records: usize) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            max_records,
        }
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn record(&self, progress: NewProgress) -> Result<ProgressRecord, StoreError> {
        let mut records = self.records.write().await;
        if records.len() >= self.max_records {
            return Err(StoreError::Unavailable(format!(
                "capacity of {} records reached",
                self.max_records
            )));
        }

        let record = ProgressRecord {
            id: Uuid::new_v4(),
            user_id: progress.user_id,
            module: progress.module,
            lesson: progress.lesson,
            score: progress.score,
            completed_at: progress.completed_at,
        };

        records.push(record.clone());
        Ok(record)
    }

    async fn history_for(&self, user_id: &str) -> Result<Vec<ProgressRecord>, StoreError> {
        let records = self.records.read().await;

        // Reverse first so equal timestamps keep newest-inserted first (sort is stable).
        let mut history: Vec<_> = records
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

        Ok(history)
    }

    async fn totals(&self) -> Result<Vec<UserTotal>, StoreError> {
        let records = self.records.read().await;

        let mut totals: HashMap<&str, u64> = HashMap::new();
        for r in records.iter() {
            *totals.entry(r.user_id.as_str()).or_default() += u64::from(r.score);
        }

        Ok(totals
            .into_iter()
            .map(|(user_id, score)| UserTotal {
                user_id: user_id.to_string(),
                score,
            })
            .collect())
    }

    async fn stats(&self) -> Result<ProgressStats, StoreError> {
        let records = self.records.read().await;
        let users: HashSet<&str> = records.iter().map(|r| r.user_id.as_str()).collect();

        Ok(ProgressStats {
            total_users: users.len() as u64,
            total_sessions: records.len() as u64,
        })
    }
}
