use crate::analyze::AllMetrics;
use crate::types::scoring::CategoryScore;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub login: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub metrics: AllMetrics,
    pub categories: Vec<CategoryScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    pub year: Option<i32>,
}

impl Finding {
    pub fn warning(id: &str, title: &str, body: String, year: Option<i32>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking: false,
            year,
        }
    }

    pub fn blocking(id: &str, title: &str, body: String, year: Option<i32>) -> Self {
        Self {
            blocking: true,
            ..Self::warning(id, title, body, year)
        }
    }
}
