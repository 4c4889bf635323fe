use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::model::StaffMember;
use crate::resource::ResourceClient;
use crate::response::{ListQuery, Page};
use crate::session::UserType;

/// `/admin/staff`. Always called with the admin token, whichever account
/// would be auto-detected.
pub struct StaffApi<'a> {
    resource: ResourceClient<'a, StaffMember>,
}

impl<'a> StaffApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: ResourceClient::new(client, "/admin/staff").as_user(UserType::Admin),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<StaffMember>, ApiError> {
        self.resource.list(query).await
    }

    pub async fn all(&self) -> Result<Vec<StaffMember>, ApiError> {
        self.resource.all().await
    }

    pub async fn get(&self, id: i64) -> Result<StaffMember, ApiError> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<StaffMember, ApiError> {
        self.resource.create(body).await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        id: i64,
        body: &B,
    ) -> Result<StaffMember, ApiError> {
        self.resource.update(id, body).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.resource.delete(id).await
    }
}
