use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de, present, Record};

/// Stock line in the warehouse inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(deserialize_with = "de::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub item_code: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "de::number_opt")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "de::number_opt")]
    pub min_quantity: Option<f64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::id_opt")]
    pub supplier_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InventoryItem {
    /// At or below the minimum quantity. Items without a minimum never are.
    pub fn is_low_stock(&self) -> bool {
        match self.min_quantity {
            Some(min) => self.quantity.unwrap_or(0.0) <= min,
            None => false,
        }
    }

    pub fn is_expired(&self, on: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|d| d < on)
    }
}

impl Record for InventoryItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn search_text(&self) -> Vec<&str> {
        present(&[&self.item_code, &self.name, &self.category, &self.location])
    }
}

/// Stock withdrawal recorded against a facility request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dispensing {
    #[serde(deserialize_with = "de::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::id_opt")]
    pub item_id: Option<i64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "de::id_opt")]
    pub facility_id: Option<i64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub facility_name: Option<String>,
    #[serde(default, deserialize_with = "de::number_opt")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub request_number: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub dispensed_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Dispensing {
    fn id(&self) -> i64 {
        self.id
    }

    fn search_text(&self) -> Vec<&str> {
        present(&[
            &self.item_name,
            &self.facility_name,
            &self.request_number,
            &self.recipient,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: Option<f64>, min_quantity: Option<f64>) -> InventoryItem {
        InventoryItem {
            id: 1,
            quantity,
            min_quantity,
            ..Default::default()
        }
    }

    #[test]
    fn test_low_stock() {
        assert!(item(Some(3.0), Some(5.0)).is_low_stock());
        assert!(item(Some(5.0), Some(5.0)).is_low_stock());
        assert!(!item(Some(6.0), Some(5.0)).is_low_stock());
        assert!(item(None, Some(1.0)).is_low_stock());
        assert!(!item(Some(0.0), None).is_low_stock());
    }

    #[test]
    fn test_decimal_strings() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id": 4, "name": "قفازات", "quantity": "12.00", "min_quantity": "20"}"#,
        )
        .unwrap();
        assert_eq!(item.quantity, Some(12.0));
        assert!(item.is_low_stock());
    }

    #[test]
    fn test_expiry() {
        let mut i = item(None, None);
        i.expiry_date = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert!(i.is_expired(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()));
        assert!(!i.is_expired(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
    }
}
