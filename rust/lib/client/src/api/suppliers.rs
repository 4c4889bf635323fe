use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::model::Supplier;
use crate::resource::ResourceClient;
use crate::response::{ListQuery, Page};

/// `/suppliers`.
pub struct SuppliersApi<'a> {
    resource: ResourceClient<'a, Supplier>,
}

impl<'a> SuppliersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: ResourceClient::new(client, "/suppliers"),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Supplier>, ApiError> {
        self.resource.list(query).await
    }

    pub async fn all(&self) -> Result<Vec<Supplier>, ApiError> {
        self.resource.all().await
    }

    pub async fn get(&self, id: i64) -> Result<Supplier, ApiError> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<Supplier, ApiError> {
        self.resource.create(body).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, body: &B) -> Result<Supplier, ApiError> {
        self.resource.update(id, body).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.resource.delete(id).await
    }
}
