use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::model::{DirectPurchaseOrder, ProcurementStatus};
use crate::resource::ResourceClient;
use crate::response::{ListQuery, Page};

/// `/direct-purchase/orders`.
pub struct DirectPurchaseApi<'a> {
    resource: ResourceClient<'a, DirectPurchaseOrder>,
}

impl<'a> DirectPurchaseApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: ResourceClient::new(client, "/direct-purchase/orders"),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<DirectPurchaseOrder>, ApiError> {
        self.resource.list(query).await
    }

    pub async fn all(&self) -> Result<Vec<DirectPurchaseOrder>, ApiError> {
        self.resource.all().await
    }

    pub async fn get(&self, id: i64) -> Result<DirectPurchaseOrder, ApiError> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<DirectPurchaseOrder, ApiError> {
        self.resource.create(body).await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        id: i64,
        body: &B,
    ) -> Result<DirectPurchaseOrder, ApiError> {
        self.resource.update(id, body).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.resource.delete(id).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: ProcurementStatus,
        notes: Option<&str>,
    ) -> Result<DirectPurchaseOrder, ApiError> {
        self.resource.update_status(id, status.label(), notes).await
    }
}
