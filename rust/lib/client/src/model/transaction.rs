use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::status::{StatusParseError, TransactionStatus};
use super::{de, present, Record};

/// Administrative correspondence tracked from receipt to completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(deserialize_with = "de::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub transaction_number: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub sender: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub receiver: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub current_location: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub transaction_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub notes: Option<String>,
    #[serde(default, alias = "transfer_history", deserialize_with = "de::vec")]
    pub transfers: Vec<TransferEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transaction {
    pub fn status(&self) -> Option<Result<TransactionStatus, StatusParseError>> {
        self.status.as_deref().map(str::parse)
    }

    /// Most recent custody change, by position in the log.
    pub fn last_transfer(&self) -> Option<&TransferEntry> {
        self.transfers.last()
    }
}

impl Record for Transaction {
    fn id(&self) -> i64 {
        self.id
    }

    fn status_label(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn search_text(&self) -> Vec<&str> {
        present(&[
            &self.transaction_number,
            &self.subject,
            &self.sender,
            &self.receiver,
            &self.current_location,
        ])
    }
}

/// One entry of a transaction's append-only custody log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferEntry {
    #[serde(default, deserialize_with = "de::id_opt")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub from_department: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub to_department: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub transferred_by: Option<String>,
    /// Server timestamp, kept verbatim.
    #[serde(default, alias = "created_at", deserialize_with = "de::string_opt")]
    pub transferred_at: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_number_and_null_transfers() {
        let tx: Transaction = serde_json::from_value(serde_json::json!({
            "id": 7,
            "transaction_number": 1024,
            "subject": "طلب صيانة",
            "transfers": null,
            "transaction_date": "2024-02-01 09:30:00",
        }))
        .unwrap();
        assert_eq!(tx.transaction_number.as_deref(), Some("1024"));
        assert!(tx.transfers.is_empty());
        assert!(tx.last_transfer().is_none());
        assert_eq!(tx.transaction_date, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(tx.search_text(), vec!["1024", "طلب صيانة"]);
    }

    #[test]
    fn test_transfer_history_alias() {
        let tx: Transaction = serde_json::from_value(serde_json::json!({
            "id": 8,
            "transfer_history": [
                {"to_department": "المالية", "created_at": "2024-02-02T08:00:00Z"},
                {"to_department": "الشؤون الفنية"},
            ],
        }))
        .unwrap();
        assert_eq!(tx.transfers.len(), 2);
        assert_eq!(
            tx.transfers[0].transferred_at.as_deref(),
            Some("2024-02-02T08:00:00Z")
        );
        assert_eq!(
            tx.last_transfer().and_then(|t| t.to_department.as_deref()),
            Some("الشؤون الفنية")
        );
    }
}
