use crate::client::{ApiClient, FormData};
use crate::error::ApiError;
use crate::model::{DentalContract, ProcurementStatus};
use crate::resource::ResourceClient;
use crate::response::{ListQuery, Page};

/// `/dental/contracts`.
pub struct DentalContractsApi<'a> {
    resource: ResourceClient<'a, DentalContract>,
}

impl<'a> DentalContractsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: ResourceClient::new(client, "/dental/contracts"),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<DentalContract>, ApiError> {
        self.resource.list(query).await
    }

    pub async fn all(&self) -> Result<Vec<DentalContract>, ApiError> {
        self.resource.all().await
    }

    pub async fn get(&self, id: i64) -> Result<DentalContract, ApiError> {
        self.resource.get(id).await
    }

    pub async fn create(&self, form: FormData) -> Result<DentalContract, ApiError> {
        self.resource.create_with_files(form).await
    }

    pub async fn update(&self, id: i64, form: FormData) -> Result<DentalContract, ApiError> {
        self.resource.update_with_files(id, form).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.resource.delete(id).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: ProcurementStatus,
        notes: Option<&str>,
    ) -> Result<DentalContract, ApiError> {
        self.resource.update_status(id, status.label(), notes).await
    }
}
