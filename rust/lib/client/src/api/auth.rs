use serde_json::{json, Value};
use tracing::{info, warn};

use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::model::{AuthUser, Credentials, LoginResponse};
use crate::response::unwrap_data;
use crate::session::UserType;

/// `/admin/login`, `/staff/login` and the per-account session endpoints.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Log in and store the returned token and user under `user_type`.
    pub async fn login(
        &self,
        user_type: UserType,
        credentials: &Credentials,
    ) -> Result<LoginResponse, ApiError> {
        let endpoint = format!("/{}/login", user_type);
        let body = serde_json::to_value(credentials)
            .map_err(|e| ApiError::Decode(format!("credentials: {}", e)))?;
        let value: Value = self
            .client
            .call(&endpoint, RequestOptions::post(body), false, Some(user_type))
            .await?;
        let login: LoginResponse = unwrap_data(value)?;
        self.client
            .session()
            .store_login(user_type, &login.token, &login.user)?;
        info!("logged in as {} ({})", credentials.email, user_type);
        Ok(login)
    }

    /// Tell the server, then clear the local session whatever it answered.
    pub async fn logout(&self, user_type: UserType) -> Result<(), ApiError> {
        let endpoint = format!("/{}/logout", user_type);
        let result: Result<Value, ApiError> = self
            .client
            .call(&endpoint, RequestOptions::post(json!({})), true, Some(user_type))
            .await;
        if let Err(e) = &result {
            warn!("server logout for {} failed: {}", user_type, e);
        }
        self.client.session().clear(user_type)
    }

    /// Fetch the signed-in account and refresh the cached copy.
    pub async fn me(&self, user_type: UserType) -> Result<AuthUser, ApiError> {
        let endpoint = format!("/{}/me", user_type);
        let value: Value = self
            .client
            .call(&endpoint, RequestOptions::get(), true, Some(user_type))
            .await?;
        let inner: Value = unwrap_data(value)?;
        let user_value = match inner {
            Value::Object(mut map) if map.contains_key("user") => {
                map.remove("user").unwrap_or_default()
            }
            other => other,
        };
        let user: AuthUser = serde_json::from_value(user_value)
            .map_err(|e| ApiError::Decode(format!("user: {}", e)))?;
        self.client.session().store_user(user_type, &user)?;
        Ok(user)
    }

    /// Cached user of `user_type`, without a request.
    pub fn cached_user(&self, user_type: UserType) -> Result<Option<AuthUser>, ApiError> {
        self.client.session().user(user_type)
    }
}
