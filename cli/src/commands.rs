//! Subcommand implementations.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use pricelens_common::{CurrencyCode, QuoteSource, Region};
use pricelens_engine::{CurrencyEngine, EngineConfig, FilePreferenceStore};
use pricelens_locale::{
    annotation, DeniedGeolocator, Formatter, LocaleTableFormatter, LocationDetector, StaticDeviceLocale,
};
use pricelens_registry::{get_currency_for_country, list_for, lookup, regions};
use tracing::info;

/// Device locale from `LC_ALL`, `LC_MESSAGES` or `LANG`, first non-empty wins.
fn device_locale() -> StaticDeviceLocale {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .map(StaticDeviceLocale::from_locale_tag)
        .unwrap_or_else(StaticDeviceLocale::empty)
}

async fn start_engine(state_dir: &Path) -> Result<CurrencyEngine> {
    let engine = CurrencyEngine::builder()
        .config(EngineConfig::from_env())
        .store(Arc::new(FilePreferenceStore::new(state_dir)))
        .device_locale(Arc::new(device_locale()))
        .locale_formatter(Arc::new(LocaleTableFormatter::new()))
        .build()
        .context("Failed to build currency engine")?;

    engine.start().await;
    Ok(engine)
}

pub async fn convert(state_dir: &Path, amount: f64, from: &str, to: &str) -> Result<()> {
    let engine = start_engine(state_dir).await?;
    let from = CurrencyCode::new(from);
    let to = CurrencyCode::new(to);

    let converted = engine
        .try_convert(amount, &from, &to)
        .with_context(|| format!("Cannot convert {from} to {to}"))?;

    println!(
        "{} = {}",
        engine.format(amount, &from, None),
        engine.format(converted, &to, None)
    );

    if engine.quote_source() == Some(QuoteSource::StaticSnapshot) {
        if let Some(ts) = engine.last_updated() {
            println!("(offline rates as of {})", ts.format("%Y-%m-%d"));
        }
    }

    engine.dispose();
    Ok(())
}

pub fn format(amount: f64, code: &str, locale: Option<&str>) {
    let mut formatter = Formatter::new().with_locale_formatter(Arc::new(LocaleTableFormatter::new()));
    if let Some(default_locale) = EngineConfig::from_env().default_locale {
        formatter = formatter.with_default_locale(default_locale);
    }

    let formatted = formatter.format_annotated(amount, &CurrencyCode::new(code), locale);
    match formatted.annotation {
        Some(note) => println!("{} ({})", formatted.text, note),
        None => println!("{}", formatted.text),
    }
}

pub fn currencies(region: Option<&str>) -> Result<()> {
    let selected: Vec<Region> = match region {
        Some(key) => vec![key.parse::<Region>()?],
        None => regions().to_vec(),
    };

    for region in selected {
        println!("{}", region.label());
        for code in list_for(region) {
            let Some(meta) = lookup(code) else { continue };
            let note = annotation(&CurrencyCode::new(*code)).unwrap_or_default();
            println!("  {:<5} {:<6} {:<40} {}", meta.code, meta.symbol, meta.name, note);
        }
    }
    Ok(())
}

pub async fn detect() {
    let detector = LocationDetector::new(Arc::new(DeniedGeolocator), Arc::new(device_locale()));

    let detection = detector.detect().await;
    let currency = get_currency_for_country(detection.country.as_str());

    println!("country:  {}", detection.country);
    println!("source:   {}", detection.source);
    println!("currency: {}", currency);
}

pub async fn prefs_show(state_dir: &Path) -> Result<()> {
    let engine = start_engine(state_dir).await?;
    let prefs = engine.preferences();

    println!("primary:     {}", prefs.primary);
    println!(
        "secondary:   {}",
        prefs.secondary.as_ref().map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
    );
    println!(
        "region:      {}",
        prefs.region.map(|r| r.label().to_string()).unwrap_or_else(|| "-".to_string())
    );
    println!("auto-detect: {}", if prefs.auto_detect { "on" } else { "off" });

    if let (Some(source), Some(ts)) = (engine.quote_source(), engine.last_updated()) {
        println!("rates:       {} ({})", source, ts.to_rfc3339());
    }

    engine.dispose();
    Ok(())
}

pub async fn set_primary(state_dir: &Path, code: &str) -> Result<()> {
    let engine = start_engine(state_dir).await?;

    engine.set_primary(&CurrencyCode::new(code))?;
    engine.flush().await;
    engine.dispose();

    info!(primary = %engine.preferences().primary, "Saved primary currency");
    println!("primary: {}", engine.preferences().primary);
    Ok(())
}

pub async fn set_secondary(state_dir: &Path, code: &str) -> Result<()> {
    let engine = start_engine(state_dir).await?;

    let code = match code.trim().to_ascii_lowercase().as_str() {
        "none" | "-" => None,
        _ => Some(CurrencyCode::new(code)),
    };
    engine.set_secondary(code.as_ref())?;
    engine.flush().await;
    engine.dispose();

    match engine.preferences().secondary {
        Some(code) => println!("secondary: {code}"),
        None => println!("secondary: cleared"),
    }
    Ok(())
}

pub async fn set_auto_detect(state_dir: &Path, enabled: bool) -> Result<()> {
    let engine = start_engine(state_dir).await?;

    engine.set_auto_detect(enabled);
    engine.flush().await;
    engine.dispose();

    println!("auto-detect: {}", if enabled { "on" } else { "off" });
    Ok(())
}
