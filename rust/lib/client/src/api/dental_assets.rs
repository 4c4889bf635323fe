use chrono::NaiveDate;

use crate::client::{ApiClient, FormData};
use crate::error::ApiError;
use crate::model::{AssetStatus, DentalAsset};
use crate::resource::ResourceClient;
use crate::response::{ListQuery, Page};

/// `/dental/assets`.
pub struct DentalAssetsApi<'a> {
    resource: ResourceClient<'a, DentalAsset>,
}

impl<'a> DentalAssetsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: ResourceClient::new(client, "/dental/assets"),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<DentalAsset>, ApiError> {
        self.resource.list(query).await
    }

    pub async fn all(&self) -> Result<Vec<DentalAsset>, ApiError> {
        self.resource.all().await
    }

    pub async fn get(&self, id: i64) -> Result<DentalAsset, ApiError> {
        self.resource.get(id).await
    }

    pub async fn create(&self, form: FormData) -> Result<DentalAsset, ApiError> {
        self.resource.create_with_files(form).await
    }

    pub async fn update(&self, id: i64, form: FormData) -> Result<DentalAsset, ApiError> {
        self.resource.update_with_files(id, form).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.resource.delete(id).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: AssetStatus,
        notes: Option<&str>,
    ) -> Result<DentalAsset, ApiError> {
        self.resource.update_status(id, status.label(), notes).await
    }

    /// Assets whose warranty ends within `days` of `on`, soonest first.
    /// Already-expired warranties are excluded.
    pub async fn expiring_warranties(
        &self,
        on: NaiveDate,
        days: i64,
    ) -> Result<Vec<DentalAsset>, ApiError> {
        let mut assets: Vec<DentalAsset> = self
            .all()
            .await?
            .into_iter()
            .filter(|a| a.warranty_ends_within(on, days))
            .collect();
        assets.sort_by_key(|a| a.warranty_end);
        Ok(assets)
    }
}
