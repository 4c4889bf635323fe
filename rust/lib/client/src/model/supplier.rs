use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de, present, Record};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(deserialize_with = "de::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub contact_person: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub commercial_record: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Supplier {
    fn id(&self) -> i64 {
        self.id
    }

    fn search_text(&self) -> Vec<&str> {
        present(&[
            &self.name,
            &self.contact_person,
            &self.phone,
            &self.email,
            &self.commercial_record,
        ])
    }
}
