//! Phases, events and transition rules.

pub mod events;
pub mod scoring;
pub mod state;
pub mod transitions;
