//! Generic resource commands.
//!
//! `medadmin get reports`, `medadmin create dental-assets`, etc.
//! Translates resource names to REST API paths.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use medadmin_client::{
    ApiClient, AssetStatus, FormData, ListQuery, NewTransfer, ProcurementStatus, ReportStatus,
    RequestOptions, ResourceClient, TransactionStatus, UserType,
};
use serde::Serialize;
use serde_json::Value;

use super::{describe, open_client, print_json, print_record, print_rows, Output};

/// Resource types the CLI knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Reports,
    DentalAssets,
    DentalContracts,
    DirectPurchase,
    Transactions,
    Inventory,
    Dispensing,
    Facilities,
    Suppliers,
    Staff,
}

impl Resource {
    /// Map a singular/plural resource name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "report" | "reports" => Ok(Self::Reports),
            "asset" | "assets" | "dental-asset" | "dental-assets" => Ok(Self::DentalAssets),
            "contract" | "contracts" | "dental-contract" | "dental-contracts" => {
                Ok(Self::DentalContracts)
            }
            "purchase" | "purchases" | "direct-purchase" | "direct-purchases" | "order"
            | "orders" => Ok(Self::DirectPurchase),
            "transaction" | "transactions" => Ok(Self::Transactions),
            "item" | "items" | "inventory" => Ok(Self::Inventory),
            "dispensing" | "dispensings" => Ok(Self::Dispensing),
            "facility" | "facilities" => Ok(Self::Facilities),
            "supplier" | "suppliers" => Ok(Self::Suppliers),
            "staff" | "staff-member" | "staff-members" => Ok(Self::Staff),
            _ => Err(anyhow!("Unknown resource type: {}", name)),
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Reports => "report",
            Self::DentalAssets => "dental asset",
            Self::DentalContracts => "dental contract",
            Self::DirectPurchase => "purchase order",
            Self::Transactions => "transaction",
            Self::Inventory => "inventory item",
            Self::Dispensing => "dispensing",
            Self::Facilities => "facility",
            Self::Suppliers => "supplier",
            Self::Staff => "staff member",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Reports => "/reports",
            Self::DentalAssets => "/dental/assets",
            Self::DentalContracts => "/dental/contracts",
            Self::DirectPurchase => "/direct-purchase/orders",
            Self::Transactions => "/transactions",
            Self::Inventory => "/warehouse/inventory",
            Self::Dispensing => "/warehouse/dispensing",
            Self::Facilities => "/facilities",
            Self::Suppliers => "/suppliers",
            Self::Staff => "/admin/staff",
        }
    }

    /// Export column preset name.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Reports => "reports",
            Self::DentalAssets => "dental-assets",
            Self::DentalContracts => "dental-contracts",
            Self::DirectPurchase => "direct-purchase",
            Self::Transactions => "transactions",
            Self::Inventory => "inventory",
            Self::Dispensing => "dispensing",
            Self::Facilities => "facilities",
            Self::Suppliers => "suppliers",
            Self::Staff => "staff",
        }
    }

    /// Endpoints under `/admin` only accept the admin token.
    pub fn user_type(&self) -> Option<UserType> {
        match self {
            Self::Staff => Some(UserType::Admin),
            _ => None,
        }
    }

    /// Create/update go as multipart forms (these forms carry uploads).
    pub fn multipart(&self) -> bool {
        matches!(
            self,
            Self::Reports | Self::DentalAssets | Self::DentalContracts | Self::Transactions
        )
    }

    /// Stored status label for `raw`, which may be the label itself or
    /// its English alias. Blank input means no status filter.
    pub fn status_label(&self, raw: Option<&str>) -> Result<Option<&'static str>> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let label = match self {
            Self::Reports => raw.parse::<ReportStatus>()?.label(),
            Self::DentalAssets => raw.parse::<AssetStatus>()?.label(),
            Self::DentalContracts | Self::DirectPurchase => {
                raw.parse::<ProcurementStatus>()?.label()
            }
            Self::Transactions => raw.parse::<TransactionStatus>()?.label(),
            other => anyhow::bail!("{} records have no status.", other.singular()),
        };
        Ok(Some(label))
    }

    fn client<'a>(&self, client: &'a ApiClient) -> ResourceClient<'a, Value> {
        let resource = ResourceClient::new(client, self.path());
        match self.user_type() {
            Some(ut) => resource.as_user(ut),
            None => resource,
        }
    }
}

/// Parse `--attach field=path`.
pub fn parse_attachment(spec: &str) -> Result<(String, PathBuf)> {
    let (field, path) = spec
        .split_once('=')
        .filter(|(f, p)| !f.trim().is_empty() && !p.trim().is_empty())
        .ok_or_else(|| anyhow!("Invalid attachment \"{}\", expected field=path.", spec))?;
    Ok((field.trim().to_string(), PathBuf::from(path.trim())))
}

/// Multipart body from a JSON object plus file attachments.
fn build_form(body: &Value, attachments: &[(String, PathBuf)]) -> Result<FormData> {
    let mut form = FormData::from_json(body);
    for (field, path) in attachments {
        let bytes = std::fs::read(path)
            .map_err(|e| anyhow!("Cannot read attachment {}: {}", path.display(), e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| field.clone());
        form = form.file(field.clone(), file_name, bytes);
    }
    Ok(form)
}

fn parse_body(json_body: &str) -> Result<Value> {
    let body: Value =
        serde_json::from_str(json_body).map_err(|e| anyhow!("Invalid JSON: {}", e))?;
    if !body.is_object() {
        anyhow::bail!("Invalid JSON: expected an object.");
    }
    Ok(body)
}

fn parse_id(id: &str) -> Result<i64> {
    id.parse()
        .map_err(|_| anyhow!("Invalid id \"{}\", expected a number.", id))
}

/// List parameters for `get`.
#[derive(Debug, Clone, Default)]
pub struct GetArgs {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET a resource (list or get by ID).
pub async fn get(
    resource: &str,
    id: Option<&str>,
    args: GetArgs,
    output: Output,
    timeout: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let resource = Resource::parse(resource)?;
    let (_, client) = open_client(client_config_path, timeout)?;
    let api = resource.client(&client);

    if let Some(id) = id {
        let record = api.get(parse_id(id)?).await.map_err(describe)?;
        return print_record(&record, output);
    }

    let mut query = ListQuery::new();
    query.search = args.search;
    query.status = resource.status_label(args.status.as_deref())?.map(String::from);
    query.page = args.page;
    query.per_page = args.per_page;

    let page = api.list(&query).await.map_err(describe)?;
    if output == Output::Json {
        return print_json(&page);
    }
    let columns = medadmin_export::presets::preset(resource.preset())?;
    print_rows(&page.data, &columns, output)?;
    println!();
    println!(
        "Page {}/{} ({} total)",
        page.current_page, page.last_page, page.total
    );
    Ok(())
}

/// CREATE a resource.
pub async fn create(
    resource: &str,
    json_body: &str,
    attachments: &[String],
    output: Output,
    timeout: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let resource = Resource::parse(resource)?;
    let body = parse_body(json_body)?;
    let attachments = attachments
        .iter()
        .map(|a| parse_attachment(a))
        .collect::<Result<Vec<_>>>()?;

    let (_, client) = open_client(client_config_path, timeout)?;
    let api = resource.client(&client);

    let created = if resource.multipart() || !attachments.is_empty() {
        api.create_with_files(build_form(&body, &attachments)?).await
    } else {
        api.create(&body).await
    }
    .map_err(describe)?;

    println!("{} created.", resource.singular());
    print_record(&created, output)
}

/// UPDATE a resource: PUT for JSON resources, `_method=PUT` form otherwise.
pub async fn update(
    resource: &str,
    id: &str,
    json_body: &str,
    attachments: &[String],
    output: Output,
    timeout: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let resource = Resource::parse(resource)?;
    let id = parse_id(id)?;
    let body = parse_body(json_body)?;
    let attachments = attachments
        .iter()
        .map(|a| parse_attachment(a))
        .collect::<Result<Vec<_>>>()?;

    let (_, client) = open_client(client_config_path, timeout)?;
    let api = resource.client(&client);

    let updated = if resource.multipart() || !attachments.is_empty() {
        api.update_with_files(id, build_form(&body, &attachments)?)
            .await
    } else {
        api.update(id, &body).await
    }
    .map_err(describe)?;

    println!("{} {} updated.", resource.singular(), id);
    print_record(&updated, output)
}

/// DELETE a resource.
pub async fn delete(
    resource: &str,
    id: &str,
    timeout: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let resource = Resource::parse(resource)?;
    let id = parse_id(id)?;
    let (_, client) = open_client(client_config_path, timeout)?;

    resource.client(&client).delete(id).await.map_err(describe)?;
    println!("{} {} deleted.", resource.singular(), id);
    Ok(())
}

/// Change a record's status. `label` is the Arabic label or its English alias.
pub async fn set_status(
    resource: &str,
    id: &str,
    label: &str,
    notes: Option<&str>,
    output: Output,
    timeout: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let resource = Resource::parse(resource)?;
    let id = parse_id(id)?;
    let (_, client) = open_client(client_config_path, timeout)?;

    let updated = match resource {
        Resource::Reports => {
            let status: ReportStatus = label.parse()?;
            to_value(client.reports().update_status(id, status, notes).await)?
        }
        Resource::DentalAssets => {
            let status: AssetStatus = label.parse()?;
            to_value(client.dental_assets().update_status(id, status, notes).await)?
        }
        Resource::DentalContracts => {
            let status: ProcurementStatus = label.parse()?;
            to_value(client.dental_contracts().update_status(id, status, notes).await)?
        }
        Resource::DirectPurchase => {
            let status: ProcurementStatus = label.parse()?;
            to_value(client.direct_purchase().update_status(id, status, notes).await)?
        }
        Resource::Transactions => {
            let status: TransactionStatus = label.parse()?;
            to_value(client.transactions().update_status(id, status, notes).await)?
        }
        other => anyhow::bail!("{} records have no status.", other.singular()),
    };

    println!("{} {} status updated.", resource.singular(), id);
    print_record(&updated, output)
}

fn to_value<T: Serialize>(result: Result<T, medadmin_client::ApiError>) -> Result<Value> {
    let record = result.map_err(describe)?;
    Ok(serde_json::to_value(record)?)
}

/// Show a transaction's transfer log, or append to it.
pub async fn transfers(
    id: &str,
    add_to: Option<&str>,
    note: Option<&str>,
    output: Output,
    timeout: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let id = parse_id(id)?;
    let (_, client) = open_client(client_config_path, timeout)?;
    let transactions = client.transactions();

    if let Some(to) = add_to {
        let entry = transactions
            .add_transfer(
                id,
                &NewTransfer {
                    to_department: to.to_string(),
                    notes: note.map(str::to_string),
                },
            )
            .await
            .map_err(describe)?;
        println!("transaction {} transferred to {}.", id, to);
        return print_record(&serde_json::to_value(entry)?, output);
    }

    let entries = transactions.transfers(id).await.map_err(describe)?;
    let rows = entries
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    let columns = [
        ("from_department", "من"),
        ("to_department", "إلى"),
        ("transferred_by", "بواسطة"),
        ("transferred_at", "التاريخ"),
        ("notes", "ملاحظات"),
    ]
    .iter()
    .map(|(path, header)| medadmin_export::Column::new(*path, *header))
    .collect::<Vec<_>>();
    print_rows(&rows, &columns, output)
}

/// Check server health.
pub async fn status(timeout: Option<u64>, client_config_path: &Path) -> Result<()> {
    let (ctx, client) = open_client(client_config_path, timeout)?;

    println!("Context:   {}", ctx.name);
    println!("Server:    {}", client.base_url());

    let session = client.session();
    let accounts: Vec<&str> = [UserType::Admin, UserType::Staff]
        .into_iter()
        .filter_map(|ut| match session.is_authenticated(ut) {
            Ok(true) => Some(ut.as_str()),
            _ => None,
        })
        .collect();
    println!(
        "Session:   {}",
        if accounts.is_empty() {
            "-".to_string()
        } else {
            accounts.join(", ")
        }
    );

    match client
        .call::<Value>("/health", RequestOptions::get(), false, None)
        .await
    {
        Ok(_) => println!("Status:    connected"),
        Err(e) if e.is_network() => println!("Status:    disconnected ({})", e),
        Err(e) => println!("Status:    error ({})", e.status()),
    }
    Ok(())
}
