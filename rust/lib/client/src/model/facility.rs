use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de, present, Record};

/// A medical site or clinic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Facility {
    #[serde(deserialize_with = "de::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub code: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "de::string_opt")]
    pub facility_type: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub manager: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Facility {
    fn id(&self) -> i64 {
        self.id
    }

    fn search_text(&self) -> Vec<&str> {
        present(&[&self.name, &self.code, &self.region, &self.manager])
    }
}
