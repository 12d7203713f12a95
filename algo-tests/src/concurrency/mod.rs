//! Concurrency Tests
//!
//! The catalog is immutable static data and a `SessionPriority` is read-only
//! once built, so both must give identical answers from any thread.

pub mod thread_safety;
