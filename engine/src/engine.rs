//! The currency engine service.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use pricelens_common::{CurrencyCode, FxQuote, QuoteSource, Region};
use pricelens_fx::{ConversionError, HttpRateProvider, QuoteFetcher, RateProvider};
use pricelens_locale::{
    DeniedGeolocator, DeviceLocale, FormattedAmount, Formatter, Geolocator, LocaleFormatter,
    LocationDetector, StaticDeviceLocale,
};
use pricelens_registry::{list_for, lookup, regions};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::preferences::CurrencyPreferences;
use crate::refresh::RefreshTask;
use crate::state::EngineState;
use crate::store::PreferenceStore;

/// A price rendered in the user's currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPrice {
    /// The price in the primary currency, or in its own currency if no rate
    /// was available.
    pub primary: FormattedAmount,
    /// The price in the secondary currency, when one is set and convertible.
    pub secondary: Option<FormattedAmount>,
    /// Whether `primary` is expressed in the primary currency.
    pub in_primary: bool,
}

struct Inner {
    config: EngineConfig,
    fetcher: QuoteFetcher,
    formatter: Formatter,
    detector: LocationDetector,
    store: Arc<dyn PreferenceStore>,
    prefs: RwLock<CurrencyPreferences>,
    state: RwLock<EngineState>,
    persist_seq: AtomicU64,
    write_lock: tokio::sync::Mutex<()>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl Inner {
    fn set_state(&self, state: EngineState) {
        let previous = std::mem::replace(&mut *self.state.write(), state);
        if previous != state {
            info!(from = %previous, to = %state, "Engine state changed");
        }
    }

    async fn load_preferences(&self) -> Option<CurrencyPreferences> {
        match self.store.load(&self.config.preferences_key).await {
            Ok(Some(blob)) => match CurrencyPreferences::from_json(&blob) {
                Ok(prefs) => {
                    debug!(primary = %prefs.primary, "Loaded stored preferences");
                    Some(prefs)
                }
                Err(e) => {
                    warn!(error = %e, "Stored preferences are corrupt, initialising defaults");
                    None
                }
            },
            Ok(None) => {
                info!("No stored preferences, first run");
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to load preferences");
                self.set_state(EngineState::Error);
                None
            }
        }
    }

    async fn first_run_preferences(&self) -> CurrencyPreferences {
        if self.config.auto_detect {
            self.set_state(EngineState::Detecting);
            let currency = self.detector.detect_currency().await;
            CurrencyPreferences::new(currency, true)
        } else {
            CurrencyPreferences::new(self.config.default_currency.clone(), false)
        }
    }

    /// Write `prefs` unless a newer write has been requested since `seq`.
    async fn write_preferences(&self, seq: u64, prefs: &CurrencyPreferences) {
        let _guard = self.write_lock.lock().await;
        if seq != self.persist_seq.load(Ordering::SeqCst) {
            debug!(seq, "Skipping superseded preference write");
            return;
        }

        let blob = match prefs.to_json() {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "Failed to serialize preferences");
                return;
            }
        };

        match self.store.save(&self.config.preferences_key, &blob).await {
            Ok(()) => debug!(primary = %prefs.primary, "Persisted preferences"),
            Err(e) => warn!(error = %e, "Failed to persist preferences"),
        }
    }

    fn next_persist_seq(&self) -> u64 {
        self.persist_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn persist_later(self: &Arc<Self>, prefs: CurrencyPreferences) {
        let seq = self.next_persist_seq();
        let inner = self.clone();
        self.spawn_tracked(async move {
            inner.write_preferences(seq, &prefs).await;
        });
    }

    fn spawn_tracked<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let task = handle.spawn(work);
                let mut pending = self.pending.lock();
                pending.retain(|t| !t.is_finished());
                pending.push(task);
            }
            Err(_) => warn!("No async runtime, background work skipped"),
        }
    }
}

/// Converts and formats prices in the user's preferred currencies, keeping
/// exchange rates fresh in the background.
///
/// Reads (`convert`, `format`, `preferences`, ...) are synchronous and use the
/// last committed quote and preferences. Mutators update state immediately
/// and persist in the background.
pub struct CurrencyEngine {
    inner: Arc<Inner>,
    refresh: Mutex<Option<RefreshTask>>,
    started: AtomicBool,
    disposed: AtomicBool,
}

impl CurrencyEngine {
    /// Start building an engine.
    pub fn builder() -> CurrencyEngineBuilder {
        CurrencyEngineBuilder::new()
    }

    /// Load or detect preferences, fetch the first quote and start the
    /// refresh task. Never fails; every step degrades to a default.
    /// Calling it again has no effect.
    #[instrument(skip_all)]
    pub async fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Engine already started");
            return;
        }

        let inner = &self.inner;
        inner.set_state(EngineState::Loading);

        let (mut prefs, mut dirty) = match inner.load_preferences().await.and_then(validated) {
            Some(loaded) => loaded,
            None => (inner.first_run_preferences().await, true),
        };

        if prefs.backfill_region() {
            debug!(region = ?prefs.region, "Backfilled preference region");
            dirty = true;
        }

        *inner.prefs.write() = prefs.clone();

        if dirty {
            let seq = inner.next_persist_seq();
            inner.write_preferences(seq, &prefs).await;
        }

        let primary = prefs.primary;
        inner.fetcher.retarget(&primary);
        let quote = inner.fetcher.get_quote(&primary).await;

        {
            let mut refresh = self.refresh.lock();
            if !self.disposed.load(Ordering::SeqCst) {
                *refresh = Some(self.spawn_refresh());
            }
        }

        inner.set_state(EngineState::Ready);
        info!(
            primary = %primary,
            quote_source = %quote.source,
            "Currency engine ready"
        );
    }

    fn spawn_refresh(&self) -> RefreshTask {
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);

        RefreshTask::spawn(self.inner.config.refresh_interval, move || {
            let weak = weak.clone();
            async move {
                let Some(inner) = weak.upgrade() else {
                    return false;
                };
                let primary = inner.prefs.read().primary.clone();
                let quote = inner.fetcher.get_quote(&primary).await;
                debug!(base = %quote.base, source = %quote.source, "Periodic refresh");
                true
            }
        })
    }

    /// Convert `amount` between two currencies with the committed quote.
    pub fn convert(&self, amount: f64, from: &CurrencyCode, to: &CurrencyCode) -> Option<f64> {
        self.try_convert(amount, from, to).ok()
    }

    /// [`convert`](Self::convert) with the reason a conversion failed.
    pub fn try_convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ConversionError> {
        let quote = self.inner.fetcher.current();
        pricelens_fx::try_convert(quote.as_deref(), amount, from, to)
    }

    /// Render `amount` of `code`.
    pub fn format(&self, amount: f64, code: &CurrencyCode, locale: Option<&str>) -> String {
        self.inner.formatter.format(amount, code, locale)
    }

    /// Render `amount` of `code` with its pegged/display-only annotation.
    pub fn format_annotated(&self, amount: f64, code: &CurrencyCode, locale: Option<&str>) -> FormattedAmount {
        self.inner.formatter.format_annotated(amount, code, locale)
    }

    /// Render a price given in `from` in the primary and secondary currencies.
    pub fn display_price(&self, amount: f64, from: &CurrencyCode) -> DisplayPrice {
        let prefs = self.preferences();
        let quote = self.inner.fetcher.current();
        let formatter = &self.inner.formatter;

        let render = |to: &CurrencyCode| {
            pricelens_fx::convert(quote.as_deref(), amount, from, to)
                .map(|value| formatter.format_annotated(value, to, None))
        };

        let (primary, in_primary) = match render(&prefs.primary) {
            Some(primary) => (primary, true),
            None => (formatter.format_annotated(amount, from, None), false),
        };

        let secondary = prefs
            .secondary
            .as_ref()
            .filter(|secondary| **secondary != prefs.primary)
            .and_then(render);

        DisplayPrice {
            primary,
            secondary,
            in_primary,
        }
    }

    /// Codes for the preference region, or every region when none is set.
    pub fn available(&self) -> Vec<&'static str> {
        match self.inner.prefs.read().region {
            Some(region) => list_for(region).to_vec(),
            None => regions()
                .iter()
                .flat_map(|region| list_for(*region).iter().copied())
                .collect(),
        }
    }

    /// Codes listed for `region`.
    pub fn available_in(&self, region: Region) -> &'static [&'static str] {
        list_for(region)
    }

    /// Current preferences.
    pub fn preferences(&self) -> CurrencyPreferences {
        self.inner.prefs.read().clone()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        *self.inner.state.read()
    }

    /// Publication time of the committed quote.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.inner.fetcher.current().map(|quote| quote.timestamp)
    }

    /// Origin of the committed quote.
    pub fn quote_source(&self) -> Option<QuoteSource> {
        self.inner.fetcher.current().map(|quote| quote.source)
    }

    /// Whether no fresh network quote exists for the primary currency.
    pub fn is_stale(&self) -> bool {
        let primary = self.inner.prefs.read().primary.clone();
        self.inner.fetcher.is_stale(&primary)
    }

    /// Whether the periodic refresh is running.
    pub fn is_refreshing(&self) -> bool {
        self.refresh
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Fetch a quote for the primary currency now, bypassing the cache.
    pub async fn refresh_now(&self) -> Arc<FxQuote> {
        let primary = self.inner.prefs.read().primary.clone();
        self.inner.fetcher.refresh(&primary).await
    }

    /// Change the primary currency. The fetcher switches base at once and a
    /// quote for the new base is fetched in the background.
    pub fn set_primary(&self, code: &CurrencyCode) -> EngineResult<()> {
        let code = selectable(code)?;

        let snapshot = {
            let mut prefs = self.inner.prefs.write();
            if prefs.primary == code {
                return Ok(());
            }
            prefs.primary = code.clone();
            prefs.backfill_region();
            prefs.clone()
        };
        info!(primary = %code, "Primary currency changed");

        self.inner.fetcher.retarget(&code);
        let inner = self.inner.clone();
        self.inner.spawn_tracked(async move {
            inner.fetcher.get_quote(&code).await;
        });
        self.inner.persist_later(snapshot);
        Ok(())
    }

    /// Set or clear the secondary currency.
    pub fn set_secondary(&self, code: Option<&CurrencyCode>) -> EngineResult<()> {
        let code = code.map(selectable).transpose()?;

        let snapshot = {
            let mut prefs = self.inner.prefs.write();
            prefs.secondary = code;
            prefs.clone()
        };
        info!(secondary = ?snapshot.secondary, "Secondary currency changed");

        self.inner.persist_later(snapshot);
        Ok(())
    }

    /// Turn first-run detection on or off.
    pub fn set_auto_detect(&self, enabled: bool) {
        let snapshot = {
            let mut prefs = self.inner.prefs.write();
            prefs.auto_detect = enabled;
            prefs.clone()
        };
        info!(auto_detect = enabled, "Auto-detect changed");

        self.inner.persist_later(snapshot);
    }

    /// Wait for background persistence and re-fetches started so far.
    pub async fn flush(&self) {
        let pending = std::mem::take(&mut *self.inner.pending.lock());
        for task in pending {
            if let Err(e) = task.await {
                warn!(error = %e, "Background task failed");
            }
        }
    }

    /// Stop the refresh task. Reads keep working on the last committed data.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
        if let Some(task) = self.refresh.lock().take() {
            task.cancel();
            info!("Currency engine disposed");
        }
    }
}

/// The canonical code for `code`, if it may be chosen as primary or secondary.
fn selectable(code: &CurrencyCode) -> EngineResult<CurrencyCode> {
    match lookup(code.as_str()) {
        None => Err(EngineError::UnknownCurrency(code.to_string())),
        Some(meta) if !meta.is_selectable() => Err(EngineError::NotSelectable(code.to_string())),
        Some(meta) => Ok(CurrencyCode::new(meta.code)),
    }
}

/// Stored preferences with canonical codes, plus whether they changed.
/// `None` when the stored primary cannot be selected.
fn validated(mut prefs: CurrencyPreferences) -> Option<(CurrencyPreferences, bool)> {
    let primary = match selectable(&prefs.primary) {
        Ok(primary) => primary,
        Err(e) => {
            warn!(error = %e, error_code = e.error_code(), "Stored primary currency rejected, initialising defaults");
            return None;
        }
    };
    let mut dirty = primary != prefs.primary;
    prefs.primary = primary;

    if let Some(stored) = prefs.secondary.take() {
        match selectable(&stored) {
            Ok(secondary) => {
                dirty |= secondary != stored;
                prefs.secondary = Some(secondary);
            }
            Err(e) => {
                warn!(error = %e, error_code = e.error_code(), "Dropping stored secondary currency");
                dirty = true;
            }
        }
    }

    Some((prefs, dirty))
}

/// Builder for [`CurrencyEngine`].
pub struct CurrencyEngineBuilder {
    config: EngineConfig,
    store: Option<Arc<dyn PreferenceStore>>,
    provider: Option<Arc<dyn RateProvider>>,
    geolocator: Option<Arc<dyn Geolocator>>,
    device_locale: Option<Arc<dyn DeviceLocale>>,
    locale_formatter: Option<Arc<dyn LocaleFormatter>>,
}

impl CurrencyEngineBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            store: None,
            provider: None,
            geolocator: None,
            device_locale: None,
            locale_formatter: None,
        }
    }

    /// Set configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the preference store (required).
    pub fn store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the rate provider. Defaults to HTTP against the configured endpoint.
    pub fn rate_provider(mut self, provider: Arc<dyn RateProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the geolocator. Defaults to one that always denies.
    pub fn geolocator(mut self, geolocator: Arc<dyn Geolocator>) -> Self {
        self.geolocator = Some(geolocator);
        self
    }

    /// Set device locale settings. Defaults to none.
    pub fn device_locale(mut self, device_locale: Arc<dyn DeviceLocale>) -> Self {
        self.device_locale = Some(device_locale);
        self
    }

    /// Set the locale-aware formatter tried before registry rules.
    pub fn locale_formatter(mut self, formatter: Arc<dyn LocaleFormatter>) -> Self {
        self.locale_formatter = Some(formatter);
        self
    }

    /// Build the engine.
    pub fn build(self) -> EngineResult<CurrencyEngine> {
        self.config.validate().map_err(EngineError::Config)?;

        let store = self
            .store
            .ok_or_else(|| EngineError::Config("Preference store is required".to_string()))?;

        let config = self.config;

        let provider = self.provider.unwrap_or_else(|| {
            Arc::new(HttpRateProvider::new(config.rate_endpoint.clone(), config.fetch_timeout))
        });
        let geolocator = self.geolocator.unwrap_or_else(|| Arc::new(DeniedGeolocator));
        let device_locale = self
            .device_locale
            .unwrap_or_else(|| Arc::new(StaticDeviceLocale::empty()));

        let mut formatter = Formatter::new();
        if let Some(locale_formatter) = self.locale_formatter {
            formatter = formatter.with_locale_formatter(locale_formatter);
        }
        if let Some(locale) = config.default_locale.clone() {
            formatter = formatter.with_default_locale(locale);
        }

        let detector = LocationDetector::new(geolocator, device_locale)
            .with_geolocation_timeout(config.geolocation_timeout);
        let fetcher = QuoteFetcher::with_config(provider, config.fetcher_config());
        let prefs = CurrencyPreferences::new(config.default_currency.clone(), config.auto_detect);

        let inner = Inner {
            config,
            fetcher,
            formatter,
            detector,
            store,
            prefs: RwLock::new(prefs),
            state: RwLock::new(EngineState::Uninitialized),
            persist_seq: AtomicU64::new(0),
            write_lock: tokio::sync::Mutex::new(()),
            pending: Mutex::new(Vec::new()),
        };

        Ok(CurrencyEngine {
            inner: Arc::new(inner),
            refresh: Mutex::new(None),
            started: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
        })
    }
}

impl Default for CurrencyEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
