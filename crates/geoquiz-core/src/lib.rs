//! Geoquiz Core: shared domain abstractions.
//!
//! This crate defines the traits and value types that the game, the
//! persistence adapters and the HTTP surface all depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod error;
pub mod history;
pub mod rng;
