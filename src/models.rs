use serde::{Deserialize, Serialize};

/// One catalog row: the category and items day `day` presents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub day: u16,
    pub category: String,
    pub items: Vec<String>,
}

/// Payload forwarded to the submission sink. Field casing matches the
/// spreadsheet webhook's expected row shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingSubmission {
    pub timestamp: String,
    pub day: u16,
    pub category: String,
    pub rankings: Vec<String>,
    pub session_id: String,
    pub user_agent: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct TodayQuery {
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub day: u16,
    pub category: String,
    pub items: Vec<String>,
    pub already_submitted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub session_id: String,
    pub rankings: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub day: u16,
    pub recorded: bool,
}
