//! PriceLens Engine
//!
//! The currency service a UI talks to. It owns the user's currency
//! preferences and the current exchange-rate quote, and answers `convert`
//! and `format` calls synchronously from them.
//!
//! # Lifecycle
//!
//! 1. Load persisted preferences, or detect a currency on first run
//! 2. Fetch a quote for the primary currency (static snapshot on failure)
//! 3. Refresh the quote periodically until disposed
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pricelens_engine::{CurrencyEngine, EngineConfig, FilePreferenceStore};
//! use pricelens_common::CurrencyCode;
//!
//! let engine = CurrencyEngine::builder()
//!     .config(EngineConfig::from_env())
//!     .store(Arc::new(FilePreferenceStore::new("/var/lib/pricelens")))
//!     .build()?;
//!
//! engine.start().await;
//! let price = engine.display_price(19.99, &CurrencyCode::usd());
//! println!("{}", price.primary.text);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod preferences;
pub mod refresh;
pub mod state;
pub mod store;

pub use config::EngineConfig;
pub use engine::{CurrencyEngine, CurrencyEngineBuilder, DisplayPrice};
pub use error::{EngineError, EngineResult, StoreError};
pub use preferences::CurrencyPreferences;
pub use refresh::RefreshTask;
pub use state::EngineState;
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
