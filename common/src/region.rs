//! Region keys used to scope currency enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;

/// A UI grouping of currencies. Never used for conversion math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    Americas,
    Europe,
    Africa,
    Asia,
    MiddleEast,
    Oceania,
    Crypto,
}

impl Region {
    /// All regions in display order.
    pub const ALL: [Region; 7] = [
        Region::Americas,
        Region::Europe,
        Region::Africa,
        Region::Asia,
        Region::MiddleEast,
        Region::Oceania,
        Region::Crypto,
    ];

    /// The serialized key of this region.
    pub fn key(&self) -> &'static str {
        match self {
            Region::Americas => "americas",
            Region::Europe => "europe",
            Region::Africa => "africa",
            Region::Asia => "asia",
            Region::MiddleEast => "middleEast",
            Region::Oceania => "oceania",
            Region::Crypto => "crypto",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Americas => "Americas",
            Region::Europe => "Europe",
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::MiddleEast => "Middle East",
            Region::Oceania => "Oceania",
            Region::Crypto => "Crypto",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Region {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_', ' '], "").to_ascii_lowercase();
        Region::ALL
            .into_iter()
            .find(|r| r.key().to_ascii_lowercase() == wanted)
            .ok_or_else(|| CodeError::UnknownRegion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_serde_keys() {
        let json = serde_json::to_string(&Region::MiddleEast).unwrap();
        assert_eq!(json, "\"middleEast\"");

        let region: Region = serde_json::from_str("\"oceania\"").unwrap();
        assert_eq!(region, Region::Oceania);
    }

    #[test]
    fn test_region_from_str_is_lenient() {
        assert_eq!("middle-east".parse::<Region>().unwrap(), Region::MiddleEast);
        assert_eq!("Europe".parse::<Region>().unwrap(), Region::Europe);
        assert!("atlantis".parse::<Region>().is_err());
    }
}
