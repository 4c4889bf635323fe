//! Signed-in accounts and their tokens.
//!
//! Two kinds of account can be signed in at once, each under its own pair
//! of session keys. When a caller does not say which one a request is for,
//! [`Session::current_user_type`] picks one.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use medadmin_session::{MemoryStore, SessionStore};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Kind of account a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    Staff,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::Staff => "staff",
        }
    }

    /// Session key of the bearer token: `admin_token` / `staff_token`.
    pub fn token_key(&self) -> String {
        format!("{}_token", self.as_str())
    }

    /// Session key of the cached user object: `admin_user` / `staff_user`.
    pub fn user_key(&self) -> String {
        format!("{}_user", self.as_str())
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(UserType::Admin),
            "staff" => Ok(UserType::Staff),
            other => Err(format!("unknown user type: {}", other)),
        }
    }
}

/// Handle to the session store shared by every API call.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Bearer token for `user_type`. An empty stored value counts as absent.
    pub fn token(&self, user_type: UserType) -> Result<Option<String>, ApiError> {
        let token = self.store.get(&user_type.token_key())?;
        Ok(token.filter(|t| !t.trim().is_empty()))
    }

    /// Cached user object for `user_type`, decoded from its JSON text.
    pub fn user<T: DeserializeOwned>(&self, user_type: UserType) -> Result<Option<T>, ApiError> {
        match self.store.get(&user_type.user_key())? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| ApiError::Decode(format!("stored {} user: {}", user_type, e))),
            None => Ok(None),
        }
    }

    /// Record a successful login.
    pub fn store_login<U: Serialize>(
        &self,
        user_type: UserType,
        token: &str,
        user: &U,
    ) -> Result<(), ApiError> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| ApiError::Decode(format!("encode {} user: {}", user_type, e)))?;
        self.store.set(&user_type.token_key(), token)?;
        self.store.set(&user_type.user_key(), &user_json)?;
        Ok(())
    }

    /// Replace the cached user object, keeping the token.
    pub fn store_user<U: Serialize>(&self, user_type: UserType, user: &U) -> Result<(), ApiError> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| ApiError::Decode(format!("encode {} user: {}", user_type, e)))?;
        self.store.set(&user_type.user_key(), &user_json)?;
        Ok(())
    }

    /// Forget the token and user of `user_type`.
    pub fn clear(&self, user_type: UserType) -> Result<(), ApiError> {
        self.store.remove(&user_type.token_key())?;
        self.store.remove(&user_type.user_key())?;
        Ok(())
    }

    pub fn is_authenticated(&self, user_type: UserType) -> Result<bool, ApiError> {
        Ok(self.token(user_type)?.is_some())
    }

    /// Account type used when a call does not name one: admin if an admin
    /// token is stored, otherwise staff, even when no staff token exists.
    pub fn current_user_type(&self) -> Result<UserType, ApiError> {
        if self.token(UserType::Admin)?.is_some() {
            return Ok(UserType::Admin);
        }
        if self.token(UserType::Staff)?.is_none() {
            debug!("no stored token, defaulting to staff");
        }
        Ok(UserType::Staff)
    }

    /// `explicit` if given, otherwise [`Session::current_user_type`].
    pub fn resolve(&self, explicit: Option<UserType>) -> Result<UserType, ApiError> {
        match explicit {
            Some(user_type) => Ok(user_type),
            None => self.current_user_type(),
        }
    }
}
