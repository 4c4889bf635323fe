//! `medadmin dashboard`: status cards for every module at once.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use chrono::Local;
use medadmin_client::{status_counts, DentalAsset, InventoryItem, Record};
use serde::Serialize;

use super::{describe, open_client, print_json, Output};

#[derive(Debug, Serialize)]
struct Summary {
    status: BTreeMap<&'static str, BTreeMap<String, usize>>,
    low_stock: Vec<StockAlert>,
    expiring_warranties: Vec<WarrantyAlert>,
}

#[derive(Debug, Serialize)]
struct StockAlert {
    id: i64,
    name: String,
    quantity: Option<f64>,
    min_quantity: Option<f64>,
}

#[derive(Debug, Serialize)]
struct WarrantyAlert {
    id: i64,
    name: String,
    days_left: i64,
}

pub async fn dashboard(
    days: i64,
    output: Output,
    timeout: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let (_, client) = open_client(client_config_path, timeout)?;
    let today = Local::now().date_naive();

    let reports = client.reports();
    let assets = client.dental_assets();
    let contracts = client.dental_contracts();
    let purchases = client.direct_purchase();
    let transactions = client.transactions();
    let warehouse = client.warehouse();

    let (reports, assets, contracts, purchases, transactions, low_stock) = tokio::try_join!(
        reports.all(),
        assets.all(),
        contracts.all(),
        purchases.all(),
        transactions.all(),
        warehouse.low_stock(),
    )
    .map_err(describe)?;

    let mut expiring: Vec<&DentalAsset> = assets
        .iter()
        .filter(|a| a.warranty_ends_within(today, days))
        .collect();
    expiring.sort_by_key(|a| a.warranty_end);

    let mut status = BTreeMap::new();
    status.insert("reports", status_counts(&reports));
    status.insert("dental-assets", status_counts(&assets));
    status.insert("dental-contracts", status_counts(&contracts));
    status.insert("direct-purchase", status_counts(&purchases));
    status.insert("transactions", status_counts(&transactions));

    let summary = Summary {
        status,
        low_stock: low_stock.iter().map(stock_alert).collect(),
        expiring_warranties: expiring
            .iter()
            .filter_map(|a| warranty_alert(a, today))
            .collect(),
    };

    if output == Output::Json {
        return print_json(&summary);
    }
    print_summary(&summary, days);
    Ok(())
}

fn stock_alert(item: &InventoryItem) -> StockAlert {
    StockAlert {
        id: item.id(),
        name: item.name.clone().unwrap_or_default(),
        quantity: item.quantity,
        min_quantity: item.min_quantity,
    }
}

fn warranty_alert(asset: &DentalAsset, today: chrono::NaiveDate) -> Option<WarrantyAlert> {
    Some(WarrantyAlert {
        id: asset.id(),
        name: asset.name.clone().unwrap_or_default(),
        days_left: asset.warranty_days_left(today)?,
    })
}

fn print_summary(summary: &Summary, days: i64) {
    for (module, counts) in &summary.status {
        let total: usize = counts.values().sum();
        println!("{} ({})", module.to_uppercase(), total);
        for (label, count) in counts {
            let label = if label.is_empty() { "-" } else { label };
            println!("  {:24} {}", label, count);
        }
    }

    println!();
    println!("LOW STOCK ({})", summary.low_stock.len());
    for alert in &summary.low_stock {
        println!(
            "  #{:<6} {:30} {} / {}",
            alert.id,
            alert.name,
            fmt_qty(alert.quantity),
            fmt_qty(alert.min_quantity)
        );
    }

    println!();
    println!(
        "WARRANTIES ENDING WITHIN {} DAYS ({})",
        days,
        summary.expiring_warranties.len()
    );
    for alert in &summary.expiring_warranties {
        println!("  #{:<6} {:30} {} days", alert.id, alert.name, alert.days_left);
    }
}

fn fmt_qty(q: Option<f64>) -> String {
    q.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string())
}
