//! MedAdmin HTTP client.
//!
//! Talks to the healthcare-equipment administration backend: dental
//! assets and contracts, direct purchases, warehouse stock, administrative
//! transactions, facilities, suppliers, maintenance reports and staff.
//!
//! Every request goes through [`ApiClient`], which attaches the bearer
//! token of the right account from the [`Session`] and clears that
//! account's session when the server answers 401.
//!
//! # Usage
//!
//! ```ignore
//! use medadmin_client::{ApiClient, Credentials, ListQuery, Session, UserType};
//!
//! let client = ApiClient::from_env(Session::in_memory());
//! client.auth().login(UserType::Staff, &Credentials {
//!     email: "nurse@clinic.sa".into(),
//!     password: "secret".into(),
//! }).await?;
//! let open = client.reports().list(&ListQuery::new().status("مفتوح")).await?;
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod listing;
pub mod model;
pub mod resource;
pub mod response;
pub mod session;

#[cfg(test)]
mod client_test;

pub use api::{NewDispensing, NewTransfer};
pub use client::{ApiClient, FormData, FormMethod, RequestOptions, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ApiError, FieldErrors, CONNECTION_FAILED, SESSION_EXPIRED};
pub use listing::{paginate, sort_by, status_counts, Filter, PageSlice, SortOrder};
pub use model::{
    AssetStatus, AuthUser, Credentials, DentalAsset, DentalContract, DirectPurchaseOrder,
    Dispensing, Facility, InventoryItem, LoginResponse, ProcurementStatus, Record, Report,
    ReportStatus, StaffMember, StatusParseError, Supplier, Transaction, TransactionStatus,
    TransferEntry,
};
pub use reqwest::Method;
pub use resource::ResourceClient;
pub use response::{unwrap_data, ListQuery, Page};
pub use session::{Session, UserType};
