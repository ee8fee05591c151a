use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default page size for list requests.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Filter and pagination criteria for a list request.
///
/// Keys are resource-defined (`"search"`, `"role"`, `"status"`, ...).
/// Equality is structural, which is what keys memoization and makes the
/// load-supersession tests deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    pub page: u32,
    pub per_page: u32,
    values: BTreeMap<String, String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            values: BTreeMap::new(),
        }
    }
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a filter value. Empty values clear the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&key.into());
        } else {
            self.values.insert(key.into(), value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterate filter key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_clears_the_key() {
        let mut filters = Filters::new().with("search", "ana");
        assert_eq!(filters.get("search"), Some("ana"));

        filters.set("search", "");
        assert_eq!(filters.get("search"), None);
    }

    #[test]
    fn equality_is_structural() {
        let a = Filters::new().with("role", "admin").with_page(2);
        let b = Filters::new().with_page(2).with("role", "admin");
        assert_eq!(a, b);
    }

    #[test]
    fn page_is_clamped_to_at_least_one() {
        assert_eq!(Filters::new().with_page(0).page, 1);
    }
}
