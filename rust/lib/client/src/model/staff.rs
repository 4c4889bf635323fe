use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de, present, Record};

/// Staff account as managed by administrators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(deserialize_with = "de::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "de::bool_opt")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for StaffMember {
    fn id(&self) -> i64 {
        self.id
    }

    fn search_text(&self) -> Vec<&str> {
        present(&[&self.name, &self.email, &self.phone, &self.department])
    }
}
