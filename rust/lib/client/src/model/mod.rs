//! Backend records.
//!
//! Only the fields the client reads are typed; everything else the server
//! sends is kept verbatim in `extra`. Typed fields are normalized on the way
//! in (dates cut to the day, decimals parsed, ids made numeric, unreadable
//! values dropped), so a record serialized back is not byte-identical to
//! what the server sent. Send explicit bodies for writes.

pub mod de;
pub mod status;

mod asset;
mod auth;
mod contract;
mod facility;
mod purchase;
mod report;
mod staff;
mod supplier;
mod transaction;
mod warehouse;

pub use asset::DentalAsset;
pub use auth::{AuthUser, Credentials, LoginResponse};
pub use contract::DentalContract;
pub use facility::Facility;
pub use purchase::DirectPurchaseOrder;
pub use report::Report;
pub use staff::StaffMember;
pub use status::{AssetStatus, ProcurementStatus, ReportStatus, StatusParseError, TransactionStatus};
pub use supplier::Supplier;
pub use transaction::{Transaction, TransferEntry};
pub use warehouse::{Dispensing, InventoryItem};

/// Common view of a record for listing, search and dashboards.
pub trait Record {
    fn id(&self) -> i64;

    /// Raw status label, for records that have a lifecycle.
    fn status_label(&self) -> Option<&str> {
        None
    }

    /// Fields free-text search looks at.
    fn search_text(&self) -> Vec<&str>;
}

/// Present values of a set of optional text fields.
pub(crate) fn present<'a>(fields: &[&'a Option<String>]) -> Vec<&'a str> {
    fields
        .iter()
        .filter_map(|f| f.as_deref())
        .filter(|s| !s.is_empty())
        .collect()
}
