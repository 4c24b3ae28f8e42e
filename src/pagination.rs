//! Pagination primitives shared by repository queries and services.

use serde::Serialize;

/// Default page size used by the bookings table.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Caller-supplied pagination parameters. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// One page of results together with paging metadata.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    /// Number of records matching the query across all pages.
    pub total_items: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
            total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn serializes_paging_metadata() {
        let paginated = Paginated::new(vec!["a", "b"], 2, 5, 42);
        let value: Value = serde_json::to_value(&paginated).unwrap();
        assert_eq!(value["page"], 2);
        assert_eq!(value["total_pages"], 5);
        assert_eq!(value["total_items"], 42);
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
    }
}
