//! Domain APIs, one per backend area. Each is a thin borrow of the
//! [`ApiClient`] with one method per endpoint.

mod auth;
mod dental_assets;
mod dental_contracts;
mod direct_purchase;
mod facilities;
mod reports;
mod staff;
mod suppliers;
mod transactions;
mod warehouse;

pub use auth::AuthApi;
pub use dental_assets::DentalAssetsApi;
pub use dental_contracts::DentalContractsApi;
pub use direct_purchase::DirectPurchaseApi;
pub use facilities::FacilitiesApi;
pub use reports::ReportsApi;
pub use staff::StaffApi;
pub use suppliers::SuppliersApi;
pub use transactions::{NewTransfer, TransactionsApi};
pub use warehouse::{NewDispensing, WarehouseApi};

use crate::client::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn facilities(&self) -> FacilitiesApi<'_> {
        FacilitiesApi::new(self)
    }

    pub fn suppliers(&self) -> SuppliersApi<'_> {
        SuppliersApi::new(self)
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(self)
    }

    pub fn warehouse(&self) -> WarehouseApi<'_> {
        WarehouseApi::new(self)
    }

    pub fn dental_assets(&self) -> DentalAssetsApi<'_> {
        DentalAssetsApi::new(self)
    }

    pub fn dental_contracts(&self) -> DentalContractsApi<'_> {
        DentalContractsApi::new(self)
    }

    pub fn transactions(&self) -> TransactionsApi<'_> {
        TransactionsApi::new(self)
    }

    pub fn direct_purchase(&self) -> DirectPurchaseApi<'_> {
        DirectPurchaseApi::new(self)
    }

    pub fn staff(&self) -> StaffApi<'_> {
        StaffApi::new(self)
    }
}
