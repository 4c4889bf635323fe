use serde::Serialize;
use serde_json::Value;

use crate::client::{ApiClient, FormData, RequestOptions};
use crate::error::ApiError;
use crate::model::{Transaction, TransactionStatus, TransferEntry};
use crate::resource::ResourceClient;
use crate::response::{unwrap_data, ListQuery, Page};

/// New custody-log entry. The server stamps the time and the acting user.
#[derive(Debug, Clone, Serialize)]
pub struct NewTransfer {
    pub to_department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `/transactions`: administrative correspondence and its transfer log.
pub struct TransactionsApi<'a> {
    client: &'a ApiClient,
    resource: ResourceClient<'a, Transaction>,
}

impl<'a> TransactionsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            resource: ResourceClient::new(client, "/transactions"),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Transaction>, ApiError> {
        self.resource.list(query).await
    }

    pub async fn all(&self) -> Result<Vec<Transaction>, ApiError> {
        self.resource.all().await
    }

    pub async fn get(&self, id: i64) -> Result<Transaction, ApiError> {
        self.resource.get(id).await
    }

    pub async fn create(&self, form: FormData) -> Result<Transaction, ApiError> {
        self.resource.create_with_files(form).await
    }

    pub async fn update(&self, id: i64, form: FormData) -> Result<Transaction, ApiError> {
        self.resource.update_with_files(id, form).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.resource.delete(id).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: TransactionStatus,
        notes: Option<&str>,
    ) -> Result<Transaction, ApiError> {
        self.resource.update_status(id, status.label(), notes).await
    }

    /// Custody log, oldest first as the server returns it.
    pub async fn transfers(&self, id: i64) -> Result<Vec<TransferEntry>, ApiError> {
        let endpoint = format!("{}/transfers", self.resource.item_path(id));
        let value: Value = self
            .client
            .call(&endpoint, RequestOptions::get(), true, None)
            .await?;
        unwrap_data(value)
    }

    /// Append to the custody log.
    pub async fn add_transfer(
        &self,
        id: i64,
        transfer: &NewTransfer,
    ) -> Result<TransferEntry, ApiError> {
        let endpoint = format!("{}/transfers", self.resource.item_path(id));
        let body = serde_json::to_value(transfer)
            .map_err(|e| ApiError::Decode(format!("transfer: {}", e)))?;
        let value: Value = self
            .client
            .call(&endpoint, RequestOptions::post(body), true, None)
            .await?;
        unwrap_data(value)
    }
}
