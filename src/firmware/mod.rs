//! Firmware catalog access
//!
//! Fetching, caching, and querying the vendor's firmware catalog.

pub mod filters;
pub mod models;

// Re-export types and functions
pub use filters::{extract_filter_values, FilterValues};
pub use models::{
    Channel, Embedded, FirmwareItem, FirmwareResponse, ItemLinks, Link, Page, ResponseLinks,
    Version,
};

use crate::cache::ResponseCache;
use crate::client::{Backend, CachedClient, FetchError, HttpBackend};
use crate::config;
use crate::query::{build_firmware_query, Condition, FirmwareFilters};
use crate::{log_debug, log_info, log_warn};

const MODULE: &str = "firmware";

/// Catalog façade owning one cached client.
///
/// The cache lives and dies with the service; dropping the service drops
/// every memoized response.
pub struct FirmwareService<B: Backend = HttpBackend> {
    client: CachedClient<B>,
}

impl FirmwareService<HttpBackend> {
    /// Service over the real HTTP transport
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            client: CachedClient::new()?,
        })
    }
}

impl<B: Backend> FirmwareService<B> {
    /// Service over a caller-supplied transport
    pub fn with_backend(backend: B) -> Self {
        Self {
            client: CachedClient::with_backend(backend),
        }
    }

    /// Fetch one page of the catalog for the given filter state.
    ///
    /// Unset limit and offset fall back to the configured defaults, so
    /// equal filter states always build the same request URL and share one
    /// cache entry.
    pub async fn fetch_firmware(
        &self,
        filters: &FirmwareFilters,
        extra: &[Condition],
    ) -> Result<FirmwareResponse, FetchError> {
        let mut filters = filters.clone();
        if filters.limit.is_none() {
            filters.limit = Some(config::query::DEFAULT_LIMIT);
        }
        if filters.offset.is_none() {
            filters.offset = Some(config::query::DEFAULT_OFFSET);
        }

        let query = build_firmware_query(&filters, extra);
        let url = format!("{}?{}", config::urls::FIRMWARE, query);
        log_info!(MODULE, "Fetching firmware list: {}", url);

        let value = self.client.get(&url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch the latest-build feed, already deduplicated upstream to one
    /// row per product, platform, and channel
    pub async fn fetch_latest_firmware(&self) -> Result<FirmwareResponse, FetchError> {
        log_info!(
            MODULE,
            "Fetching latest firmware from {}",
            config::urls::FIRMWARE_LATEST
        );

        let value = self.client.get(config::urls::FIRMWARE_LATEST).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Look up a single build by identifier.
    ///
    /// `Ok(None)` means the catalog confirmed the id does not exist; any
    /// other failure stays an error.
    pub async fn get_firmware_by_id(&self, id: &str) -> Result<Option<FirmwareItem>, FetchError> {
        let url = format!("{}/{}", config::urls::FIRMWARE, id);
        log_debug!(MODULE, "Looking up firmware {}", id);

        match self.client.get(&url).await {
            Ok(value) => Ok(Some(serde_json::from_value(value)?)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Distinct products, platforms, and channels for the filter dropdowns.
    ///
    /// Failures degrade to empty lists so a catalog outage cannot block the
    /// initial page render; the dropdowns simply start empty.
    pub async fn get_initial_filter_values(&self) -> FilterValues {
        match self.fetch_latest_firmware().await {
            Ok(response) => extract_filter_values(&response),
            Err(err) => {
                log_warn!(MODULE, "Failed to load filter values: {}", err);
                FilterValues::default()
            }
        }
    }

    /// The response cache owned by this service
    pub fn cache(&self) -> &ResponseCache {
        self.client.cache()
    }
}
