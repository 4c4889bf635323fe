//! Generic CRUD over one REST collection.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::client::{ApiClient, FormData, FormMethod, RequestOptions};
use crate::error::ApiError;
use crate::response::{unwrap_data, ListQuery, Page};
use crate::session::UserType;

/// Type-safe CRUD client for a single collection such as `/facilities`.
///
/// Item URLs are `{path}/{id}`; status changes go to
/// `PATCH {path}/{id}/status`. All calls require auth.
pub struct ResourceClient<'a, T> {
    client: &'a ApiClient,
    path: String,
    user_type: Option<UserType>,
    _phantom: PhantomData<T>,
}

impl<'a, T: DeserializeOwned> ResourceClient<'a, T> {
    pub fn new(client: &'a ApiClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into().trim_end_matches('/').to_string(),
            user_type: None,
            _phantom: PhantomData,
        }
    }

    /// Pin the user type instead of auto-detecting it per call.
    pub fn as_user(mut self, user_type: UserType) -> Self {
        self.user_type = Some(user_type);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.path, id)
    }

    async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        self.client
            .call(endpoint, options, true, self.user_type)
            .await
    }

    async fn send_form(
        &self,
        endpoint: &str,
        form: FormData,
        method: FormMethod,
    ) -> Result<Value, ApiError> {
        self.client
            .call_with_files(endpoint, form, method, true, self.user_type)
            .await
    }

    /// One page of the collection.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<T>, ApiError> {
        let options = RequestOptions::get().with_query_pairs(query.to_pairs());
        let value = self.send(&self.path, options).await?;
        Page::from_value(value)
    }

    /// Every record of the collection. Follows `page=N` while the
    /// paginator reports more pages. Stops early if the server answers
    /// with a different page than asked for.
    pub async fn all(&self) -> Result<Vec<T>, ApiError> {
        let mut page = self.list(&ListQuery::default()).await?;
        let mut records = std::mem::take(&mut page.data);
        while page.has_more() {
            let wanted = page.current_page + 1;
            let mut next = self.list(&ListQuery::new().page(wanted)).await?;
            if next.current_page != wanted {
                warn!(
                    "{}: asked for page {} but got page {}, stopping",
                    self.path, wanted, next.current_page
                );
                break;
            }
            records.append(&mut next.data);
            page = next;
        }
        debug!("{}: fetched {} records", self.path, records.len());
        Ok(records)
    }

    pub async fn get(&self, id: i64) -> Result<T, ApiError> {
        let value = self.send(&self.item_path(id), RequestOptions::get()).await?;
        unwrap_data(value)
    }

    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<T, ApiError> {
        let value = self
            .send(&self.path, RequestOptions::post(to_json(body)?))
            .await?;
        unwrap_data(value)
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, body: &B) -> Result<T, ApiError> {
        let value = self
            .send(&self.item_path(id), RequestOptions::put(to_json(body)?))
            .await?;
        unwrap_data(value)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.send(&self.item_path(id), RequestOptions::delete())
            .await?;
        Ok(())
    }

    /// `PATCH {path}/{id}/status` with `{"status": label}` and an optional
    /// `notes` field.
    pub async fn update_status(
        &self,
        id: i64,
        status: &str,
        notes: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut body = json!({ "status": status });
        if let Some(notes) = notes {
            body["notes"] = Value::String(notes.to_string());
        }
        let endpoint = format!("{}/status", self.item_path(id));
        let value = self.send(&endpoint, RequestOptions::patch(body)).await?;
        unwrap_data(value)
    }

    pub async fn create_with_files(&self, form: FormData) -> Result<T, ApiError> {
        let value = self.send_form(&self.path, form, FormMethod::Post).await?;
        unwrap_data(value)
    }

    /// Multipart update, sent as POST with `_method=PUT`.
    pub async fn update_with_files(&self, id: i64, form: FormData) -> Result<T, ApiError> {
        let value = self
            .send_form(&self.item_path(id), form, FormMethod::Put)
            .await?;
        unwrap_data(value)
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(format!("request body: {}", e)))
}
