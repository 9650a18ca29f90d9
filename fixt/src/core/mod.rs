//! Pure, deterministic logic shared by the engine.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! member tables and return deterministic outputs suitable for tests.

pub mod classifier;
pub mod planner;
pub mod types;
