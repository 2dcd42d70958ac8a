//! PriceLens Common Types
//!
//! This crate contains shared types used across the PriceLens engine,
//! including currency and country identifiers, region keys, exchange-rate
//! quotes and timing constants.

pub mod identifiers;
pub mod region;
pub mod quote;
pub mod error;
pub mod time;

pub use identifiers::*;
pub use region::*;
pub use quote::*;
pub use error::*;
pub use time::*;
