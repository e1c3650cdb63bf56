use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email: String,
    pub call_time_interval: Option<String>,
    pub linked_in_profile_url: Option<String>,
    pub git_hub_profile_url: Option<String>,
    pub comments: String,
    pub creation_time: DateTime<Utc>,
    pub last_updated: Option<DateTime<Utc>>,
}
