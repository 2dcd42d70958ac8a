//! User currency preferences.

use pricelens_common::{CurrencyCode, Region};
use pricelens_registry::region_of;
use serde::{Deserialize, Serialize};

/// The user's display currency choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPreferences {
    /// Currency prices are shown in, and the quote base.
    pub primary: CurrencyCode,
    /// Optional second rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<CurrencyCode>,
    /// Region the currency picker is scoped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Whether a first run detected the primary currency.
    #[serde(default = "default_auto_detect")]
    pub auto_detect: bool,
}

fn default_auto_detect() -> bool {
    true
}

impl CurrencyPreferences {
    /// Preferences with `primary` and its catalog region.
    pub fn new(primary: CurrencyCode, auto_detect: bool) -> Self {
        let region = region_of(primary.as_str());
        Self {
            primary,
            secondary: None,
            region,
            auto_detect,
        }
    }

    /// Fill a missing region from the catalog. Returns whether it changed.
    pub fn backfill_region(&mut self) -> bool {
        if self.region.is_some() {
            return false;
        }
        self.region = region_of(self.primary.as_str());
        self.region.is_some()
    }

    /// Parse a persisted blob.
    pub fn from_json(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }

    /// Serialize for persistence.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_region() {
        let prefs = CurrencyPreferences::new(CurrencyCode::jpy(), true);

        assert_eq!(prefs.region, Some(Region::Asia));
        assert_eq!(prefs.secondary, None);
    }

    #[test]
    fn test_camel_case_json() {
        let mut prefs = CurrencyPreferences::new(CurrencyCode::new("AED"), false);
        prefs.secondary = Some(CurrencyCode::usd());

        let json = prefs.to_json().unwrap();

        assert_eq!(
            json,
            r#"{"primary":"AED","secondary":"USD","region":"middleEast","autoDetect":false}"#
        );
        assert_eq!(CurrencyPreferences::from_json(&json).unwrap(), prefs);
    }

    #[test]
    fn test_minimal_blob_and_backfill() {
        let mut prefs = CurrencyPreferences::from_json(r#"{"primary":"eur"}"#).unwrap();

        assert_eq!(prefs.primary, CurrencyCode::eur());
        assert!(prefs.auto_detect);
        assert_eq!(prefs.region, None);

        assert!(prefs.backfill_region());
        assert_eq!(prefs.region, Some(Region::Europe));
        assert!(!prefs.backfill_region());
    }

    #[test]
    fn test_corrupt_blob() {
        assert!(CurrencyPreferences::from_json("{not json").is_err());
        assert!(CurrencyPreferences::from_json(r#"{"secondary":"USD"}"#).is_err());
    }
}
