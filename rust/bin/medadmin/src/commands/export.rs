//! `medadmin export`: write a resource list to CSV.

use std::path::Path;

use anyhow::Result;
use medadmin_client::{Filter, Record};
use medadmin_export::{presets, Column, CsvExport};
use serde::Serialize;

use super::resource::Resource;
use super::{describe, open_client};

/// Fetch every record of `resource`, keep those matching `filter`, and
/// write them with the resource's column preset.
pub async fn export(
    resource: &str,
    out: &Path,
    filter: Filter,
    timeout: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let resource = Resource::parse(resource)?;
    let columns = presets::preset(resource.preset())?;
    let filter = Filter {
        status: resource.status_label(filter.status.as_deref())?.map(String::from),
        ..filter
    };
    let (_, client) = open_client(client_config_path, timeout)?;

    let rows = match resource {
        Resource::Reports => {
            let records = client.reports().all().await.map_err(describe)?;
            write(&records, &filter, columns, out)?
        }
        Resource::DentalAssets => {
            let records = client.dental_assets().all().await.map_err(describe)?;
            write(&records, &filter, columns, out)?
        }
        Resource::DentalContracts => {
            let records = client.dental_contracts().all().await.map_err(describe)?;
            write(&records, &filter, columns, out)?
        }
        Resource::DirectPurchase => {
            let records = client.direct_purchase().all().await.map_err(describe)?;
            write(&records, &filter, columns, out)?
        }
        Resource::Transactions => {
            let records = client.transactions().all().await.map_err(describe)?;
            write(&records, &filter, columns, out)?
        }
        Resource::Inventory => {
            let records = client.warehouse().all_inventory().await.map_err(describe)?;
            write(&records, &filter, columns, out)?
        }
        Resource::Dispensing => {
            let records = client.warehouse().all_dispensing().await.map_err(describe)?;
            write(&records, &filter, columns, out)?
        }
        Resource::Facilities => {
            let records = client.facilities().all().await.map_err(describe)?;
            write(&records, &filter, columns, out)?
        }
        Resource::Suppliers => {
            let records = client.suppliers().all().await.map_err(describe)?;
            write(&records, &filter, columns, out)?
        }
        Resource::Staff => {
            let records = client.staff().all().await.map_err(describe)?;
            write(&records, &filter, columns, out)?
        }
    };

    println!("Exported {} {} rows to {}.", rows, resource.preset(), out.display());
    Ok(())
}

fn write<R: Record + Serialize>(
    records: &[R],
    filter: &Filter,
    columns: Vec<Column>,
    out: &Path,
) -> Result<usize> {
    let rows = filter.apply(records);
    tracing::debug!("{} of {} records match the filter", rows.len(), records.len());
    Ok(CsvExport::new(columns).write_to_path(out, &rows)?)
}
