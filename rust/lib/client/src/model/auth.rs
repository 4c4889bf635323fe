use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::de;

/// Login form body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The signed-in account, as cached in the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default, deserialize_with = "de::id_opt")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de::string_opt")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Successful login payload. `access_token` is accepted as an alias of
/// `token`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default, alias = "admin", alias = "staff")]
    pub user: AuthUser,
}
