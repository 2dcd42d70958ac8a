//! Region catalog: currency codes grouped for scoped enumeration.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use pricelens_common::Region;

use crate::metadata::{all, lookup};

static CATALOG: Lazy<HashMap<Region, Vec<&'static str>>> = Lazy::new(|| {
    let mut catalog: HashMap<Region, Vec<&'static str>> = HashMap::new();
    for meta in all() {
        catalog.entry(meta.region).or_default().push(meta.code);
    }
    catalog
});

/// Codes in `region`, most commonly picked first.
pub fn list_for(region: Region) -> &'static [&'static str] {
    CATALOG
        .get(&region)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Region a currency belongs to, if the code is known.
pub fn region_of(code: &str) -> Option<Region> {
    lookup(code).map(|m| m.region)
}

/// All region keys in display order.
pub fn regions() -> &'static [Region] {
    &Region::ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_for_is_ordered() {
        let americas = list_for(Region::Americas);
        assert_eq!(&americas[..3], &["USD", "CAD", "MXN"]);
        assert_eq!(list_for(Region::Europe)[0], "EUR");
    }

    #[test]
    fn test_every_region_is_populated() {
        for region in regions() {
            assert!(!list_for(*region).is_empty(), "{region} is empty");
        }
    }

    #[test]
    fn test_region_of() {
        assert_eq!(region_of("JPY"), Some(Region::Asia));
        assert_eq!(region_of("kwd"), Some(Region::MiddleEast));
        assert_eq!(region_of("BTC"), Some(Region::Crypto));
        assert_eq!(region_of("XYZ"), None);
    }

    #[test]
    fn test_catalog_partitions_registry() {
        let listed: usize = regions().iter().map(|r| list_for(*r).len()).sum();
        assert_eq!(listed, all().len());
    }
}
