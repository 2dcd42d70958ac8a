//! Host location capabilities.

use async_trait::async_trait;

use crate::error::PlatformError;
use crate::locale_rules::parse_locale_tag;

/// Outcome of a location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// The host cannot ask (no UI, no service).
    Unavailable,
}

/// A device position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy in meters, if reported.
    pub accuracy_m: Option<f64>,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m: None,
        }
    }
}

/// Device geolocation service.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Ask the user for location access.
    async fn request_permission(&self) -> Permission;

    /// Current position. May suspend for a long time; callers bound it.
    async fn current_position(&self) -> Result<Position, PlatformError>;

    /// ISO 3166-1 alpha-2 country for a position, if one is known.
    async fn reverse_geocode(&self, position: &Position) -> Result<Option<String>, PlatformError>;
}

/// Device locale settings.
pub trait DeviceLocale: Send + Sync {
    /// The region setting, e.g. `US`.
    fn region(&self) -> Option<String>;

    /// The full locale string, e.g. `en-US` or `en_US.UTF-8`.
    fn locale_tag(&self) -> Option<String>;

    /// The language setting, e.g. `en`.
    fn language(&self) -> Option<String>;
}

/// A geolocator for hosts without location services. Always denies.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedGeolocator;

#[async_trait]
impl Geolocator for DeniedGeolocator {
    async fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    async fn current_position(&self) -> Result<Position, PlatformError> {
        Err(PlatformError::PermissionDenied)
    }

    async fn reverse_geocode(&self, _position: &Position) -> Result<Option<String>, PlatformError> {
        Err(PlatformError::PermissionDenied)
    }
}

/// Fixed locale settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDeviceLocale {
    region: Option<String>,
    locale_tag: Option<String>,
    language: Option<String>,
}

impl StaticDeviceLocale {
    /// No settings at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Settings derived from a locale string such as `LANG=de_DE.UTF-8`:
    /// the tag is kept verbatim and language and region are parsed from it.
    pub fn from_locale_tag(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let parsed = parse_locale_tag(&tag);

        Self {
            region: parsed.as_ref().and_then(|p| p.region.clone()),
            language: parsed.map(|p| p.language),
            locale_tag: Some(tag),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_locale_tag(mut self, tag: impl Into<String>) -> Self {
        self.locale_tag = Some(tag.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl DeviceLocale for StaticDeviceLocale {
    fn region(&self) -> Option<String> {
        self.region.clone()
    }

    fn locale_tag(&self) -> Option<String> {
        self.locale_tag.clone()
    }

    fn language(&self) -> Option<String> {
        self.language.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_denied_geolocator() {
        let geo = DeniedGeolocator;

        assert_eq!(geo.request_permission().await, Permission::Denied);
        assert_eq!(geo.current_position().await, Err(PlatformError::PermissionDenied));
    }

    #[test]
    fn test_static_locale_from_tag() {
        let device = StaticDeviceLocale::from_locale_tag("de_DE.UTF-8");

        assert_eq!(device.region().as_deref(), Some("DE"));
        assert_eq!(device.language().as_deref(), Some("de"));
        assert_eq!(device.locale_tag().as_deref(), Some("de_DE.UTF-8"));
    }

    #[test]
    fn test_static_locale_from_posix_c() {
        let device = StaticDeviceLocale::from_locale_tag("C");

        assert_eq!(device.region(), None);
        assert_eq!(device.language(), None);
    }
}
