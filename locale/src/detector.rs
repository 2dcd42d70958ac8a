//! User location detection through a fallback chain.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use pricelens_common::{constants, CountryCode, CurrencyCode, DurationExt};
use pricelens_registry::{country_for_language, currency_for_country, get_currency_for_country};
use tracing::{debug, info, instrument, warn};

use crate::error::PlatformError;
use crate::locale_rules::parse_locale_tag;
use crate::platform::{DeviceLocale, Geolocator, Permission};

/// Which step of the chain produced the country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    Gps,
    DeviceRegion,
    LocaleTag,
    Language,
    Default,
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectionSource::Gps => "gps",
            DetectionSource::DeviceRegion => "device_region",
            DetectionSource::LocaleTag => "locale_tag",
            DetectionSource::Language => "language",
            DetectionSource::Default => "default",
        };
        f.write_str(name)
    }
}

/// A detected country and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub country: CountryCode,
    pub source: DetectionSource,
}

/// Guesses the user's country, and from it a currency.
///
/// Steps run in order until one yields a country with a known currency:
/// GPS with reverse geocoding, device region, the locale string's region
/// subtag, the language heuristic, and finally `US`.
pub struct LocationDetector {
    geolocator: Arc<dyn Geolocator>,
    device: Arc<dyn DeviceLocale>,
    geolocation_timeout: Duration,
}

impl LocationDetector {
    /// Create a detector with the default geolocation timeout.
    pub fn new(geolocator: Arc<dyn Geolocator>, device: Arc<dyn DeviceLocale>) -> Self {
        Self {
            geolocator,
            device,
            geolocation_timeout: constants::geolocation_timeout().as_std(),
        }
    }

    /// Bound the whole GPS step: permission, position and reverse geocoding.
    pub fn with_geolocation_timeout(mut self, timeout: Duration) -> Self {
        self.geolocation_timeout = timeout;
        self
    }

    /// Detected country. Never fails.
    pub async fn detect_user_location(&self) -> CountryCode {
        self.detect().await.country
    }

    /// Currency for the detected country, USD if unmapped.
    pub async fn detect_currency(&self) -> CurrencyCode {
        let detection = self.detect().await;
        let currency = get_currency_for_country(detection.country.as_str());
        info!(
            country = %detection.country.as_str(),
            source = %detection.source,
            currency = %currency,
            "Detected currency"
        );
        currency
    }

    /// Run the full chain.
    #[instrument(skip_all)]
    pub async fn detect(&self) -> Detection {
        match tokio::time::timeout(self.geolocation_timeout, self.from_gps()).await {
            Ok(Some(country)) => return found(country, DetectionSource::Gps),
            Ok(None) => {}
            Err(_) => {
                let e = PlatformError::Timeout(self.geolocation_timeout);
                warn!(error = %e, "Geolocation did not finish in time");
            }
        }

        if let Some(country) = self.device.region().as_deref().and_then(mapped) {
            return found(country, DetectionSource::DeviceRegion);
        }

        let tag = self.device.locale_tag().as_deref().and_then(parse_locale_tag);

        if let Some(country) = tag.as_ref().and_then(|t| t.region.as_deref()).and_then(mapped) {
            return found(country, DetectionSource::LocaleTag);
        }

        let languages = self.device.language().into_iter().chain(tag.map(|t| t.language));
        if let Some(country) = languages
            .filter_map(|lang| parse_locale_tag(&lang).map(|t| t.language))
            .find_map(|lang| country_for_language(&lang).and_then(mapped))
        {
            return found(country, DetectionSource::Language);
        }

        debug!("No location source resolved");
        found(CountryCode::us(), DetectionSource::Default)
    }

    /// Unbounded; `detect` applies the geolocation timeout.
    async fn from_gps(&self) -> Option<CountryCode> {
        match self.geolocator.request_permission().await {
            Permission::Granted => {}
            other => {
                debug!(permission = ?other, "Location permission not granted");
                return None;
            }
        }

        let position = match self.geolocator.current_position().await {
            Ok(position) => position,
            Err(e) => {
                warn!(error = %e, "Position request failed");
                return None;
            }
        };

        match self.geolocator.reverse_geocode(&position).await {
            Ok(Some(country)) => mapped(&country),
            Ok(None) => {
                debug!("Reverse geocoding returned no country");
                None
            }
            Err(e) => {
                warn!(error = %e, "Reverse geocoding failed");
                None
            }
        }
    }
}

/// Accept a country only if the registry maps it to a currency.
fn mapped(country: &str) -> Option<CountryCode> {
    let country = CountryCode::parse(country).ok()?;
    currency_for_country(country.as_str()).map(|_| country)
}

fn found(country: CountryCode, source: DetectionSource) -> Detection {
    debug!(country = %country.as_str(), source = %source, "Location resolved");
    Detection { country, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::platform::{DeniedGeolocator, Position, StaticDeviceLocale};

    /// Grants access and answers with a fixed country, optionally after a delay.
    struct FixedGeolocator {
        country: Option<&'static str>,
        delay: Duration,
    }

    /// Grants access and locates the device, but the geocoder never answers.
    struct HangingGeocoder;

    #[async_trait]
    impl Geolocator for HangingGeocoder {
        async fn request_permission(&self) -> Permission {
            Permission::Granted
        }

        async fn current_position(&self) -> Result<Position, PlatformError> {
            Ok(Position::new(51.5, -0.12))
        }

        async fn reverse_geocode(&self, _position: &Position) -> Result<Option<String>, PlatformError> {
            std::future::pending().await
        }
    }

    #[async_trait]
    impl Geolocator for FixedGeolocator {
        async fn request_permission(&self) -> Permission {
            Permission::Granted
        }

        async fn current_position(&self) -> Result<Position, PlatformError> {
            tokio::time::sleep(self.delay).await;
            Ok(Position::new(35.68, 139.69))
        }

        async fn reverse_geocode(&self, _position: &Position) -> Result<Option<String>, PlatformError> {
            Ok(self.country.map(str::to_string))
        }
    }

    fn detector(geo: impl Geolocator + 'static, device: StaticDeviceLocale) -> LocationDetector {
        LocationDetector::new(Arc::new(geo), Arc::new(device))
    }

    #[tokio::test]
    async fn test_everything_fails_defaults_to_us() {
        let detector = detector(DeniedGeolocator, StaticDeviceLocale::empty());

        let detection = detector.detect().await;

        assert_eq!(detection.country, CountryCode::us());
        assert_eq!(detection.source, DetectionSource::Default);
        assert_eq!(detector.detect_currency().await, CurrencyCode::usd());
    }

    #[tokio::test]
    async fn test_unmappable_sources_default_to_us() {
        let device = StaticDeviceLocale::empty()
            .with_region("ZZ")
            .with_locale_tag("xx-QQ")
            .with_language("xx");
        let detector = detector(DeniedGeolocator, device);

        assert_eq!(detector.detect_user_location().await, CountryCode::us());
    }

    #[tokio::test]
    async fn test_gps_wins() {
        let geo = FixedGeolocator {
            country: Some("JP"),
            delay: Duration::ZERO,
        };
        let detector = detector(geo, StaticDeviceLocale::empty().with_region("DE"));

        let detection = detector.detect().await;

        assert_eq!(detection.country.as_str(), "JP");
        assert_eq!(detection.source, DetectionSource::Gps);
        assert_eq!(detector.detect_currency().await, CurrencyCode::jpy());
    }

    #[tokio::test]
    async fn test_gps_timeout_falls_through() {
        let geo = FixedGeolocator {
            country: Some("JP"),
            delay: Duration::from_secs(5),
        };
        let detector = detector(geo, StaticDeviceLocale::empty().with_region("GB"))
            .with_geolocation_timeout(Duration::from_millis(20));

        let detection = detector.detect().await;

        assert_eq!(detection.country.as_str(), "GB");
        assert_eq!(detection.source, DetectionSource::DeviceRegion);
    }

    #[tokio::test]
    async fn test_locale_tag_region() {
        let device = StaticDeviceLocale::empty().with_locale_tag("zh-Hant-TW");
        let detector = detector(DeniedGeolocator, device);

        let detection = detector.detect().await;

        assert_eq!(detection.country.as_str(), "TW");
        assert_eq!(detection.source, DetectionSource::LocaleTag);
    }

    #[tokio::test]
    async fn test_language_heuristic() {
        let device = StaticDeviceLocale::empty().with_locale_tag("ja");
        let detector = detector(DeniedGeolocator, device);

        let detection = detector.detect().await;

        assert_eq!(detection.country.as_str(), "JP");
        assert_eq!(detection.source, DetectionSource::Language);
    }

    #[tokio::test]
    async fn test_explicit_language_setting() {
        let device = StaticDeviceLocale::empty().with_language("ar");
        let detector = detector(DeniedGeolocator, device);

        assert_eq!(detector.detect_currency().await, CurrencyCode::new("SAR"));
    }

    #[tokio::test]
    async fn test_hanging_geocoder_falls_through() {
        let detector = detector(HangingGeocoder, StaticDeviceLocale::empty().with_region("GB"))
            .with_geolocation_timeout(Duration::from_millis(50));

        let detection = tokio::time::timeout(Duration::from_secs(2), detector.detect())
            .await
            .expect("detection must not hang");

        assert_eq!(detection.country.as_str(), "GB");
        assert_eq!(detection.source, DetectionSource::DeviceRegion);
    }

    #[tokio::test]
    async fn test_unmapped_language_tries_locale_language() {
        let device = StaticDeviceLocale::empty().with_language("xx").with_locale_tag("ja");
        let detector = detector(DeniedGeolocator, device);

        let detection = detector.detect().await;

        assert_eq!(detection.country.as_str(), "JP");
        assert_eq!(detection.source, DetectionSource::Language);
    }
}
