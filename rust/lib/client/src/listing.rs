//! Local filter, sort and paging over fetched records, plus the status
//! tallies shown on dashboard cards.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::model::Record;

/// Free-text search plus an optional exact status label.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Search is a case-insensitive substring match against any of the
    /// record's search fields. Blank search or status matches everything.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if let Some(status) = self.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            if record.status_label().map(str::trim) != Some(status) {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(needle) => {
                let needle = needle.to_lowercase();
                record
                    .search_text()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            None => true,
        }
    }

    pub fn apply<'r, R: Record>(&self, records: &'r [R]) -> Vec<&'r R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Stable sort by `key`. Records whose key is `None` go last in either
/// order.
pub fn sort_by<T, K, F>(items: &mut [T], order: SortOrder, mut key: F)
where
    K: PartialOrd,
    F: FnMut(&T) -> Option<K>,
{
    items.sort_by(|a, b| match (key(a), key(b)) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// One page of a local list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// 1-based, clamped into `1..=total_pages`.
    pub page: usize,
    pub per_page: usize,
    /// At least 1, even for an empty list.
    pub total_pages: usize,
    pub total_items: usize,
}

/// Cut page `page` (1-based) out of `items`. Out-of-range pages are
/// clamped; `per_page` of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> PageSlice<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    PageSlice {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_pages,
        total_items,
    }
}

/// Records per status label. Records without a status are counted under
/// the empty string.
pub fn status_counts<R: Record>(records: &[R]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        let label = record.status_label().unwrap_or("").trim().to_string();
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}
