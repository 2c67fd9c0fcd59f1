//! Shared test mocks and utilities for the capital quiz engine.

mod clock;
mod rng;
mod store;

pub use clock::{FixedClock, fixed_clock};
pub use rng::{MockRng, SequenceRng};
pub use store::{FailingHistoryStore, RecordingHistoryStore};
