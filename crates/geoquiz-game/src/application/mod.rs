//! Session orchestration: dispatch, observers and the score log.

pub mod session;
pub mod stats;
pub mod subscribers;
