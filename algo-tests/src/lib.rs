#![deny(unsafe_code)]

//! # tlsalgo Test Suite
//!
//! Tests that span more than one crate: concurrent reads of the catalog and
//! of shared session priorities live in [`concurrency`]; property tests over
//! the ranking engine live under `tests/`.

pub mod concurrency;
