use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::model::{Dispensing, InventoryItem};
use crate::resource::ResourceClient;
use crate::response::{ListQuery, Page};

/// Stock withdrawal request body.
#[derive(Debug, Clone, Serialize)]
pub struct NewDispensing {
    pub item_id: i64,
    pub facility_id: i64,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `/warehouse/inventory` and `/warehouse/dispensing`.
pub struct WarehouseApi<'a> {
    inventory: ResourceClient<'a, InventoryItem>,
    dispensing: ResourceClient<'a, Dispensing>,
}

impl<'a> WarehouseApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            inventory: ResourceClient::new(client, "/warehouse/inventory"),
            dispensing: ResourceClient::new(client, "/warehouse/dispensing"),
        }
    }

    pub async fn list_inventory(&self, query: &ListQuery) -> Result<Page<InventoryItem>, ApiError> {
        self.inventory.list(query).await
    }

    pub async fn all_inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.inventory.all().await
    }

    pub async fn get_item(&self, id: i64) -> Result<InventoryItem, ApiError> {
        self.inventory.get(id).await
    }

    pub async fn create_item<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<InventoryItem, ApiError> {
        self.inventory.create(body).await
    }

    pub async fn update_item<B: Serialize + ?Sized>(
        &self,
        id: i64,
        body: &B,
    ) -> Result<InventoryItem, ApiError> {
        self.inventory.update(id, body).await
    }

    pub async fn delete_item(&self, id: i64) -> Result<(), ApiError> {
        self.inventory.delete(id).await
    }

    /// Items at or below their minimum quantity.
    pub async fn low_stock(&self) -> Result<Vec<InventoryItem>, ApiError> {
        Ok(self
            .all_inventory()
            .await?
            .into_iter()
            .filter(InventoryItem::is_low_stock)
            .collect())
    }

    pub async fn list_dispensing(&self, query: &ListQuery) -> Result<Page<Dispensing>, ApiError> {
        self.dispensing.list(query).await
    }

    pub async fn all_dispensing(&self) -> Result<Vec<Dispensing>, ApiError> {
        self.dispensing.all().await
    }

    pub async fn get_dispensing(&self, id: i64) -> Result<Dispensing, ApiError> {
        self.dispensing.get(id).await
    }

    pub async fn dispense(&self, request: &NewDispensing) -> Result<Dispensing, ApiError> {
        self.dispensing.create(request).await
    }
}
