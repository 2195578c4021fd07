//! Firmware data models
//!
//! Types for the catalog's HAL-style JSON payloads.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::utils::format::channel_display_name;

/// Release channel of a firmware build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Channel {
    Release,
    BetaPublic,
    Beta,
    Alpha,
    /// Channels the vendor introduces faster than we model them
    Other(String),
}

impl Channel {
    /// Wire string exactly as the API sends it
    pub fn as_str(&self) -> &str {
        match self {
            Channel::Release => "release",
            Channel::BetaPublic => "beta-public",
            Channel::Beta => "beta",
            Channel::Alpha => "alpha",
            Channel::Other(channel) => channel,
        }
    }

    /// Human-facing label for tables and detail views
    pub fn display_name(&self) -> String {
        channel_display_name(self.as_str())
    }
}

impl From<String> for Channel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "release" => Channel::Release,
            "beta-public" => Channel::BetaPublic,
            "beta" => Channel::Beta,
            "alpha" => Channel::Alpha,
            _ => Channel::Other(value),
        }
    }
}

impl From<Channel> for String {
    fn from(value: Channel) -> Self {
        value.as_str().to_string()
    }
}

/// Structured firmware version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: Option<String>,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                // A prerelease precedes the release it leads up to
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single HAL link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Links attached to one catalog item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemLinks {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
    pub data: Option<Link>,
    pub upload: Option<Link>,
}

/// One firmware build as the catalog lists it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmwareItem {
    pub id: String,
    pub channel: Channel,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub size: u64,
    pub md5: String,
    pub sha256: String,
    pub platform: String,
    pub product: String,
    pub version: Version,
    #[serde(default)]
    pub probability: f64,
    pub tags: Option<IndexMap<String, String>>,
    #[serde(rename = "_links", default)]
    pub links: ItemLinks,
}

impl FirmwareItem {
    /// URL of the binary payload
    pub fn download_url(&self) -> Option<&str> {
        self.links.data.as_ref().map(|link| link.href.as_str())
    }

    /// Canonical URL of this catalog entry
    pub fn self_url(&self) -> Option<&str> {
        self.links.self_link.as_ref().map(|link| link.href.as_str())
    }
}

/// Pagination links on a collection response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseLinks {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
    pub next: Option<Link>,
    pub prev: Option<Link>,
}

/// Collection paging metadata, camelCase on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

/// HAL `_embedded` envelope; the collection key is omitted when empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub firmware: Vec<FirmwareItem>,
}

/// One page of the firmware collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirmwareResponse {
    #[serde(rename = "_embedded", default)]
    pub embedded: Embedded,
    #[serde(rename = "_links", default)]
    pub links: ResponseLinks,
    pub page: Option<Page>,
}

impl FirmwareResponse {
    /// Items on this page; empty when the vendor omitted `_embedded`
    pub fn items(&self) -> &[FirmwareItem] {
        &self.embedded.firmware
    }
}
