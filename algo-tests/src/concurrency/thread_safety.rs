//! Thread Safety Tests
//!
//! Verifies lock-free concurrent access to the catalog and to shared
//! session priorities.
