pub mod leaderboard;
pub mod profile;
pub mod progress;
