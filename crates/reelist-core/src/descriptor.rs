//! Page descriptors: which page to fetch next, under which criteria.
//!
//! A [`PageDescriptor`] is an immutable value issued by the controller and
//! handed to a [`crate::CollectionSource`]. The embedded epoch lets the
//! controller recognize (and discard) resolutions that belong to a
//! superseded criteria generation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::models::{RequestFilter, RequestSort};

/// Filter/sort/locale parameters of a collection fetch.
///
/// Stored as an ordered map so that equivalence is plain deep equality and
/// the rendered query string is deterministic. Two criteria values are
/// equivalent iff all key/value pairs match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Criteria(BTreeMap<String, String>);

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a criteria dimension, replacing any previous value for the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Criteria for a discover collection in the given locale.
    pub fn discover(locale: &str) -> Self {
        Self::new().with(defaults::CRITERIA_LOCALE, locale)
    }

    /// Criteria for the request list under the given filter and sort.
    pub fn requests(filter: RequestFilter, sort: RequestSort) -> Self {
        Self::new()
            .with(defaults::CRITERIA_FILTER, filter.as_str())
            .with(defaults::CRITERIA_SORT, sort.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key/value pairs in key order, for query-string construction.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Immutable description of one page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// 1-based page number.
    pub page: u32,
    /// Criteria the page is fetched under.
    pub criteria: Criteria,
    /// Criteria generation of the issuing controller.
    pub epoch: u64,
}

impl PageDescriptor {
    pub fn new(page: u32, criteria: Criteria, epoch: u64) -> Self {
        debug_assert!(page >= 1, "page numbers are 1-based");
        Self {
            page,
            criteria,
            epoch,
        }
    }
}
