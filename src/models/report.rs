use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Report {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub report_type: String,
    pub date_report: NaiveDate,
    pub content: String,
}

/// Input for both create and update.
#[derive(Debug, Deserialize)]
pub struct ReportInput {
    #[serde(rename = "type")]
    pub report_type: String,
    pub date_report: NaiveDate,
    pub content: String,
}
