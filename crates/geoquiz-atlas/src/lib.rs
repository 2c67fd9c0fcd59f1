//! Geoquiz Atlas: immutable reference data.
//!
//! Countries, continent filters and the lookups the game uses to build its
//! question pool. Everything here is fixed at compile time and indexed once
//! on first use.

pub mod continents;
pub mod countries;
pub mod country;
pub mod lookup;

pub use continents::{ContinentFilter, WORLD};
pub use country::{Country, CountryName};
