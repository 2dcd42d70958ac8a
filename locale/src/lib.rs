//! PriceLens Locale
//!
//! Presentation-side currency logic:
//!
//! - Amount formatting with per-currency rounding, grouping and symbol rules
//! - A locale-aware formatter tried before the registry rules
//! - Location detection through GPS, device settings and language heuristics
//!
//! # Example
//!
//! ```rust
//! use pricelens_common::CurrencyCode;
//! use pricelens_locale::Formatter;
//!
//! let formatter = Formatter::new();
//! assert_eq!(formatter.format(1234567.0, &CurrencyCode::jpy(), None), "¥1,234,567");
//! ```

pub mod detector;
pub mod error;
pub mod formatter;
pub mod locale_rules;
pub mod platform;
pub mod rounding;

pub use detector::{Detection, DetectionSource, LocationDetector};
pub use error::{FormatError, FormatResult, PlatformError};
pub use formatter::{annotation, fallback_string, format_manual, FormattedAmount, Formatter};
pub use locale_rules::{parse_locale_tag, LocaleFormatter, LocaleTableFormatter, LocaleTag};
pub use platform::{DeniedGeolocator, DeviceLocale, Geolocator, Permission, Position, StaticDeviceLocale};
pub use rounding::{round_amount, Grouping, NumberStyle};
