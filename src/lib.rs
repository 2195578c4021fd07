//! Firmware Catalog Library
//!
//! Read-only browsing client for the vendor firmware catalog: cached
//! fetching, the filter-query grammar, a debounced re-fetch worker, and
//! presentation helpers for catalog fields.

pub mod cache;
pub mod client;
pub mod config;
pub mod firmware;
pub mod logging;
pub mod query;
pub mod utils;
pub mod watch;

#[cfg(test)]
mod tests;

pub use cache::ResponseCache;
pub use client::{Backend, CachedClient, FetchError, HttpBackend};
pub use firmware::{
    extract_filter_values, Channel, FilterValues, FirmwareItem, FirmwareResponse, FirmwareService,
    Version,
};
pub use query::{build_firmware_query, Condition, FilterOp, FirmwareFilters, Sort, SortDirection};
pub use utils::format::{channel_display_name, format_date, format_file_size, format_probability};
pub use watch::FirmwareWatcher;
