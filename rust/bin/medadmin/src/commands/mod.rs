//! Subcommand implementations and the helpers they share.

pub mod context;
pub mod dashboard;
pub mod export;
pub mod login;
pub mod resource;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use medadmin_client::{ApiClient, ApiError, Session, BASE_URL_ENV, CONNECTION_FAILED};
use medadmin_export::{cell, Column};
use medadmin_session::FileStore;
use serde_json::Value;

use crate::config::{self, ClientConfig, Context};

/// Output format selected with `-o`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Output {
    Table,
    Json,
}

/// Widest a table cell is allowed to get before it is cut.
const MAX_CELL: usize = 32;

/// Build an API client for the current context, with that context's
/// session file as storage.
pub fn open_client(config_path: &Path, timeout: Option<u64>) -> Result<(Context, ApiClient)> {
    let config = ClientConfig::load(config_path)?;
    let ctx = config
        .current()
        .ok_or_else(|| anyhow!("No current context. Run `medadmin use context <name>`."))?
        .clone();

    let server = std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| ctx.server.clone());
    if server.is_empty() {
        anyhow::bail!(
            "No server URL set for context \"{}\". Run `medadmin context set {} --server <url>`.",
            ctx.name,
            ctx.name
        );
    }

    let store = FileStore::open(&config::session_path(config_path, &ctx.name))?;
    let session = Session::new(Arc::new(store));

    let mut builder = reqwest::Client::builder();
    if let Some(secs) = timeout.or(ctx.timeout_secs) {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let http = builder.build()?;

    Ok((ctx, ApiClient::with_http(http, server, session)))
}

/// Turn an API failure into the message shown to the user.
pub fn describe(err: ApiError) -> anyhow::Error {
    match err {
        ApiError::Network(e) => anyhow!("{} ({})", CONNECTION_FAILED, e),
        ApiError::Unauthorized { message } => {
            anyhow!("{}. Run `medadmin login`.", message)
        }
        ApiError::Server {
            status,
            message,
            errors,
        } => {
            let mut text = format!("Error ({}): {}", status, message);
            for (field, messages) in &errors {
                text.push_str(&format!("\n  {}: {}", field, messages.join("; ")));
            }
            anyhow!(text)
        }
        other => other.into(),
    }
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a list of records as a table of `columns`, or as JSON.
pub fn print_rows(rows: &[Value], columns: &[Column], output: Output) -> Result<()> {
    if output == Output::Json {
        return print_json(rows);
    }
    if rows.is_empty() {
        println!("No records.");
        return Ok(());
    }

    let mut columns = columns.to_vec();
    columns.insert(0, Column::new("id", "ID"));
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| clip(&cell(row, &c.path))).collect())
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(c.header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
    println!("{}", pad_row(&header, &widths));
    for row in &cells {
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        println!("{}", pad_row(&row, &widths));
    }
    Ok(())
}

/// Print one record as `field: value` lines, or as JSON.
pub fn print_record(record: &Value, output: Output) -> Result<()> {
    match (output, record) {
        (Output::Table, Value::Object(map)) => {
            let width = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);
            for key in map.keys() {
                println!("{:width$}  {}", key, cell(record, key), width = width);
            }
            Ok(())
        }
        _ => print_json(record),
    }
}

fn pad_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn clip(text: &str) -> String {
    let text = text.replace('\n', " ");
    if text.chars().count() <= MAX_CELL {
        return text;
    }
    let mut clipped: String = text.chars().take(MAX_CELL - 1).collect();
    clipped.push('…');
    clipped
}
