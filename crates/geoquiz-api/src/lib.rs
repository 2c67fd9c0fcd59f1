//! Geoquiz API: HTTP surface for browser front-ends.
//!
//! Hosts independent single-player game sessions, forwards map clicks and
//! typed answers into them, and schedules the automatic move from feedback
//! to the next question.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
