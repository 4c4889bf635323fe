//! Response envelopes and list queries.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Decode a single-record response, peeling a `{"data": ...}` envelope
/// when present.
pub fn unwrap_data<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    let inner = match value {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or_default(),
        other => other,
    };
    serde_json::from_value(inner).map_err(|e| ApiError::Decode(format!("response data: {}", e)))
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: Option<u64>,
    pub total: u64,
}

impl<T: DeserializeOwned> Page<T> {
    /// Accepts the list shapes the backend produces:
    ///
    /// - a bare array;
    /// - a paginator: `{"data": [...], "current_page": 1, "last_page": 3, "total": 42}`;
    /// - a resource collection: `{"data": [...], "meta": {"current_page": 1, ...}}`;
    /// - either of the above inside a `{"success": true, "data": {...}}` envelope.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        match value {
            Value::Array(items) => Self::build(items, &Map::new()),
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => {
                    let meta = match map.remove("meta") {
                        Some(Value::Object(meta)) => meta,
                        _ => map,
                    };
                    Self::build(items, &meta)
                }
                Some(inner @ Value::Object(_)) => Self::from_value(inner),
                _ => Err(ApiError::Decode("expected a list response".into())),
            },
            _ => Err(ApiError::Decode("expected a list response".into())),
        }
    }

    fn build(items: Vec<Value>, meta: &Map<String, Value>) -> Result<Self, ApiError> {
        let count = items.len() as u64;
        let data: Vec<T> = serde_json::from_value(Value::Array(items))
            .map_err(|e| ApiError::Decode(format!("list item: {}", e)))?;
        let number = |key: &str| meta.get(key).and_then(as_u64);
        Ok(Self {
            data,
            current_page: number("current_page").unwrap_or(1).max(1),
            last_page: number("last_page").unwrap_or(1).max(1),
            per_page: number("per_page"),
            total: number("total").unwrap_or(count),
        })
    }
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// Paginator fields sometimes arrive as strings.
fn as_u64(v: &Value) -> Option<u64> {
    v.as_u64().or_else(|| v.as_str().and_then(|s| s.parse().ok()))
}

/// Server-side list parameters.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Query-string pairs. Empty search/status values are dropped.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search".to_string(), search.to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("status".to_string(), status.to_string()));
        }
        for (k, v) in &self.filters {
            pairs.push((k.clone(), v.clone()));
        }
        pairs
    }
}
