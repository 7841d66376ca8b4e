//! Backend test support utilities
//!
//! Logging bootstrap shared by unit and integration tests, plus helpers for
//! generating collision-free test data.

pub mod logging;
pub mod unique_helpers;
