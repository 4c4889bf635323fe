use serde::Serialize;

use crate::client::{ApiClient, FormData};
use crate::error::ApiError;
use crate::model::{Report, ReportStatus};
use crate::resource::ResourceClient;
use crate::response::{ListQuery, Page};

/// `/reports`: maintenance and incident tickets. Create and update accept
/// attachments, so both go through the multipart path.
pub struct ReportsApi<'a> {
    resource: ResourceClient<'a, Report>,
}

impl<'a> ReportsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: ResourceClient::new(client, "/reports"),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Report>, ApiError> {
        self.resource.list(query).await
    }

    pub async fn all(&self) -> Result<Vec<Report>, ApiError> {
        self.resource.all().await
    }

    pub async fn get(&self, id: i64) -> Result<Report, ApiError> {
        self.resource.get(id).await
    }

    pub async fn create(&self, form: FormData) -> Result<Report, ApiError> {
        self.resource.create_with_files(form).await
    }

    pub async fn update(&self, id: i64, form: FormData) -> Result<Report, ApiError> {
        self.resource.update_with_files(id, form).await
    }

    /// JSON update for edits without attachments.
    pub async fn update_fields<B: Serialize + ?Sized>(
        &self,
        id: i64,
        body: &B,
    ) -> Result<Report, ApiError> {
        self.resource.update(id, body).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.resource.delete(id).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: ReportStatus,
        notes: Option<&str>,
    ) -> Result<Report, ApiError> {
        self.resource.update_status(id, status.label(), notes).await
    }
}
