//! PriceLens Currency Registry
//!
//! Static, immutable currency data loaded once per process:
//!
//! - Display metadata for every circulating ISO 4217 currency (~155) plus display-only crypto assets
//! - A region catalog for scoped enumeration in pickers
//! - Country to currency and language to country lookups used by detection
//!
//! # Example
//!
//! ```rust
//! use pricelens_common::Region;
//! use pricelens_registry::{lookup, list_for, region_of};
//!
//! let jpy = lookup("JPY").unwrap();
//! assert_eq!(jpy.decimals, 0);
//! assert_eq!(region_of("JPY"), Some(Region::Asia));
//! assert!(list_for(Region::Asia).contains(&"JPY"));
//! ```

mod currencies;
pub mod metadata;
pub mod regions;
pub mod countries;

pub use metadata::{all, is_display_only, is_known, lookup, CurrencyMetadata, RoundingPolicy, SymbolPosition};
pub use regions::{list_for, region_of, regions};
pub use countries::{country_for_language, currency_for_country, get_currency_for_country};
