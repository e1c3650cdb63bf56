use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::candidate::Candidate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidatePayload {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(max = 50))]
    pub call_time_interval: Option<String>,
    #[validate(length(max = 200))]
    pub linked_in_profile_url: Option<String>,
    #[validate(length(max = 200))]
    pub git_hub_profile_url: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub comments: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
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
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListResponse {
    pub total_count: i64,
    pub items: Vec<CandidateResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateListQuery {
    pub search_text: Option<String>,
    pub sorting: Option<String>,
    pub is_descending: bool,
    pub max_result_count: Option<i64>,
    pub skip_count: Option<i64>,
}

impl From<Candidate> for CandidateResponse {
    fn from(value: Candidate) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            phone_number: value.phone_number,
            email: value.email,
            call_time_interval: value.call_time_interval,
            linked_in_profile_url: value.linked_in_profile_url,
            git_hub_profile_url: value.git_hub_profile_url,
            comments: value.comments,
            creation_time: value.creation_time,
        }
    }
}
