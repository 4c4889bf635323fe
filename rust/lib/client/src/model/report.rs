use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::status::{ReportStatus, StatusParseError};
use super::{de, present, Record};

/// Maintenance or incident ticket raised against a facility device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(deserialize_with = "de::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub report_number: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::id_opt")]
    pub facility_id: Option<i64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub facility_name: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub device_name: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub reported_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub closed_at: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Report {
    pub fn status(&self) -> Option<Result<ReportStatus, StatusParseError>> {
        self.status.as_deref().map(str::parse)
    }
}

impl Record for Report {
    fn id(&self) -> i64 {
        self.id
    }

    fn status_label(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn search_text(&self) -> Vec<&str> {
        present(&[
            &self.report_number,
            &self.title,
            &self.description,
            &self.facility_name,
            &self.device_name,
        ])
    }
}
