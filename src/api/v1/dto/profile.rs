/*
 * Responsibility
 * - Identity-derived response DTOs (profile, my-data, public data)
 */
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub learning_goals: String,
    // Token issue time (unix seconds); the provider does not send account creation time.
    pub created_at: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MyDataResponse {
    pub message: String,
    pub user_id: String,
    pub is_authenticated: bool,
    pub user_metadata: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct PublicDataResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub is_authenticated: bool,
}
