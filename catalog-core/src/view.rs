//! Table helpers: search filtering, name ordering and page slicing

use crate::types::{AuthorRecord, BookRecord, CategoryRecord};
use serde::Serialize;

/// A record that can be shown in a searchable table
pub trait TableRow {
    /// Name the table is sorted by
    fn sort_name(&self) -> &str;

    /// Case-insensitive match against an already lowercased needle
    fn matches(&self, needle: &str) -> bool;
}

impl TableRow for BookRecord {
    fn sort_name(&self) -> &str {
        &self.book_name
    }

    fn matches(&self, needle: &str) -> bool {
        self.book_name.to_lowercase().contains(needle)
            || self
                .author_name
                .as_deref()
                .is_some_and(|a| a.to_lowercase().contains(needle))
    }
}

impl TableRow for AuthorRecord {
    fn sort_name(&self) -> &str {
        &self.author_name
    }

    fn matches(&self, needle: &str) -> bool {
        self.author_name.to_lowercase().contains(needle)
    }
}

impl TableRow for CategoryRecord {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// One page of a table
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` rows
    pub fn page_count(&self) -> usize {
        if self.per_page == 0 {
            0
        } else {
            self.total.div_ceil(self.per_page)
        }
    }
}

/// Filter by search text (blank means everything) and sort by name
pub fn filter_rows<'a, T: TableRow>(rows: &'a [T], search: Option<&str>) -> Vec<&'a T> {
    let needle = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let mut matched: Vec<&T> = rows
        .iter()
        .filter(|row| needle.as_deref().map_or(true, |n| row.matches(n)))
        .collect();
    matched.sort_by_key(|row| row.sort_name().to_lowercase());
    matched
}

/// Slice out a 1-indexed page; page 0 is treated as 1
pub fn paginate<T>(rows: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let total = rows.len();
    let start = (page - 1).saturating_mul(per_page);
    let items = rows.into_iter().skip(start).take(per_page).collect();

    Page {
        items,
        total,
        page,
        per_page,
    }
}
