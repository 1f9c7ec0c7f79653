//! Quantities
//!
//! Collapses a requested SKU multiset into per-SKU counts.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::catalog::Catalog;

/// Requested unit counts for each catalog SKU.
///
/// Requested SKUs that are not in the catalog are not counted; they are kept
/// aside (once each, in request order) for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quantities<'c> {
    counts: FxHashMap<&'c str, usize>,
    unknown: SmallVec<[String; 2]>,
}

impl<'c> Quantities<'c> {
    /// Count each requested SKU against the catalog.
    pub fn aggregate<S: AsRef<str>>(catalog: &'c Catalog<'_>, requested: &[S]) -> Self {
        let mut counts: FxHashMap<&'c str, usize> = catalog
            .iter()
            .map(|product| (product.sku.as_str(), 0))
            .collect();

        let mut unknown: SmallVec<[String; 2]> = SmallVec::new();

        for sku in requested {
            let sku = sku.as_ref();

            match counts.get_mut(sku) {
                Some(count) => *count += 1,
                None if !unknown.iter().any(|seen| seen == sku) => unknown.push(sku.to_string()),
                None => {}
            }
        }

        Self { counts, unknown }
    }

    /// Units requested for `sku`; zero for SKUs never requested.
    pub fn get(&self, sku: &str) -> usize {
        self.counts.get(sku).copied().unwrap_or(0)
    }

    /// Requested SKUs missing from the catalog.
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    /// Total units requested across catalog SKUs.
    pub fn total_units(&self) -> usize {
        self.counts.values().sum()
    }
}
