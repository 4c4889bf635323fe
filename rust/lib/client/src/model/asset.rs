use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::status::{AssetStatus, StatusParseError};
use super::{de, present, Record};

/// A dental device in the asset inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DentalAsset {
    #[serde(deserialize_with = "de::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "de::id_opt")]
    pub facility_id: Option<i64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub facility_name: Option<String>,
    #[serde(default, deserialize_with = "de::id_opt")]
    pub supplier_id: Option<i64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub warranty_end: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::number_opt")]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DentalAsset {
    pub fn status(&self) -> Option<Result<AssetStatus, StatusParseError>> {
        self.status.as_deref().map(str::parse)
    }

    /// Whether the warranty still covers the device on `on`. Devices without
    /// a recorded warranty end are not covered.
    pub fn warranty_active(&self, on: NaiveDate) -> bool {
        self.warranty_end.is_some_and(|end| on <= end)
    }

    /// Days until the warranty ends; negative once expired.
    pub fn warranty_days_left(&self, on: NaiveDate) -> Option<i64> {
        self.warranty_end.map(|end| (end - on).num_days())
    }

    /// Still under warranty on `on`, with the end at most `days` away.
    pub fn warranty_ends_within(&self, on: NaiveDate, days: i64) -> bool {
        matches!(self.warranty_days_left(on), Some(left) if (0..=days).contains(&left))
    }
}

impl Record for DentalAsset {
    fn id(&self) -> i64 {
        self.id
    }

    fn status_label(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn search_text(&self) -> Vec<&str> {
        present(&[
            &self.name,
            &self.serial_number,
            &self.model,
            &self.manufacturer,
            &self.facility_name,
        ])
    }
}
