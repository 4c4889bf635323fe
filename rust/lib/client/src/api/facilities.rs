use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::model::Facility;
use crate::resource::ResourceClient;
use crate::response::{ListQuery, Page};

/// `/facilities`.
pub struct FacilitiesApi<'a> {
    resource: ResourceClient<'a, Facility>,
}

impl<'a> FacilitiesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: ResourceClient::new(client, "/facilities"),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Facility>, ApiError> {
        self.resource.list(query).await
    }

    pub async fn all(&self) -> Result<Vec<Facility>, ApiError> {
        self.resource.all().await
    }

    pub async fn get(&self, id: i64) -> Result<Facility, ApiError> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<Facility, ApiError> {
        self.resource.create(body).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, body: &B) -> Result<Facility, ApiError> {
        self.resource.update(id, body).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.resource.delete(id).await
    }
}
