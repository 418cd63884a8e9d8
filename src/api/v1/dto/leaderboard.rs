/*
 * Responsibility
 * - Leaderboard query/response DTOs
 */
use serde::{Deserialize, Serialize};

use crate::services::leaderboard::LeaderboardEntry;

pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

impl LeaderboardQuery {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.page < 1 {
            return Err("page must be >= 1");
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err("page_size must be between 1 and 100");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardPageResponse {
    pub items: Vec<LeaderboardEntry>,
    pub page: u32,
    pub page_size: u32,
}
