use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::status::{ProcurementStatus, StatusParseError};
use super::{de, present, Record};

/// Direct-purchase order. Shares the contract lifecycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectPurchaseOrder {
    #[serde(deserialize_with = "de::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub item_name: Option<String>,
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
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub order_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DirectPurchaseOrder {
    pub fn status(&self) -> Option<Result<ProcurementStatus, StatusParseError>> {
        self.status.as_deref().map(str::parse)
    }
}

impl Record for DirectPurchaseOrder {
    fn id(&self) -> i64 {
        self.id
    }

    fn status_label(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn search_text(&self) -> Vec<&str> {
        present(&[
            &self.order_number,
            &self.item_name,
            &self.facility_name,
            &self.supplier_name,
        ])
    }
}
