//! Application configuration constants
//!
//! Central place for endpoint URLs, query defaults, and tuning knobs.
//! The catalog base is fixed at compile time; the remote API is not
//! runtime-configurable.

/// Application identity
pub mod app {
    /// Application name, used in the log startup header
    pub const NAME: &str = "firmware-catalog";

    /// User agent sent with every catalog request
    pub const USER_AGENT: &str = "Firmware-Catalog";
}

/// Remote catalog endpoints
pub mod urls {
    /// Paginated firmware collection endpoint.
    /// Single resources live under `{FIRMWARE}/{id}`.
    pub const FIRMWARE: &str = "https://api.fwcatalog.io/firmware";

    /// Latest-per-(product, platform, channel) endpoint, already
    /// deduplicated upstream. Takes no query parameters.
    pub const FIRMWARE_LATEST: &str = "https://api.fwcatalog.io/firmware-latest";
}

/// Query defaults and debounce tuning
pub mod query {
    /// Page size applied when the caller leaves `limit` unset
    pub const DEFAULT_LIMIT: u32 = 50;

    /// Page offset applied when the caller leaves `offset` unset
    pub const DEFAULT_OFFSET: u32 = 0;

    /// Quiescence window for the debounced re-fetch loop, in milliseconds
    pub const DEBOUNCE_WINDOW_MS: u64 = 300;
}

/// Logging configuration
pub mod logging {
    /// Maximum number of lines kept in the in-memory log buffer
    pub const MAX_BUFFER_LINES: usize = 1000;
}
