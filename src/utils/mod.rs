//! Utility functions shared across the library
//!
//! Common presentation helpers for catalog fields.

pub mod format;

pub use format::*;
