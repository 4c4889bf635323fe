use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::status::{ProcurementStatus, StatusParseError};
use super::{de, present, Record};

/// Dental equipment contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DentalContract {
    #[serde(deserialize_with = "de::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub contract_number: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub device_name: Option<String>,
    #[serde(default, deserialize_with = "de::id_opt")]
    pub facility_id: Option<i64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub facility_name: Option<String>,
    #[serde(default, deserialize_with = "de::id_opt")]
    pub supplier_id: Option<i64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub supplier_name: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de::number_opt")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "de::number_opt")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub contract_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DentalContract {
    pub fn status(&self) -> Option<Result<ProcurementStatus, StatusParseError>> {
        self.status.as_deref().map(str::parse)
    }
}

impl Record for DentalContract {
    fn id(&self) -> i64 {
        self.id
    }

    fn status_label(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn search_text(&self) -> Vec<&str> {
        present(&[
            &self.contract_number,
            &self.device_name,
            &self.facility_name,
            &self.supplier_name,
        ])
    }
}
