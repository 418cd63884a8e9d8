//! Dense ranking over per-user total scores.
//!
//! Users are ordered by score (desc) then user id (asc). Equal scores share a position,
//! and the next distinct score takes the following position (1, 1, 2, ...).
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTotal {
    pub user_id: String,
    pub score: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub score: u64,
    pub position: u64,
}

pub fn rank(mut totals: Vec<UserTotal>) -> Vec<LeaderboardEntry> {
    totals.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.user_id.cmp(&b.user_id)));

    let mut entries = Vec::with_capacity(totals.len());
    let mut position = 0u64;
    let mut previous: Option<u64> = None;

    for total in totals {
        if previous != Some(total.score) {
            position += 1;
            previous = Some(total.score);
        }
        entries.push(LeaderboardEntry {
            user_id: total.user_id,
            score: total.score,
            position,
        });
    }

    entries
}

/// 1-based page of an already ranked list; out-of-range pages are empty.
pub fn page(entries: &[LeaderboardEntry], page: u32, page_size: u32) -> &[LeaderboardEntry] {
    let page_size = page_size as usize;
    let offset = (page.saturating_sub(1) as usize).saturating_mul(page_size);
    if offset >= entries.len() {
        return &[];
    }
    let end = offset.saturating_add(page_size).min(entries.len());
    &entries[offset..end]
}

pub fn position_of<'a>(entries: &'a [LeaderboardEntry], user_id: &str) -> Option<&'a LeaderboardEntry> {
    entries.iter().find(|e| e.user_id == user_id)
}
