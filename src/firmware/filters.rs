//! Filter-value extraction
//!
//! Derives the dropdown option lists from a catalog response.

use std::collections::HashSet;

use super::models::FirmwareResponse;

/// Distinct values available for the filter dropdowns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterValues {
    pub products: Vec<String>,
    pub platforms: Vec<String>,
    pub channels: Vec<String>,
}

fn push_unique(seen: &mut HashSet<String>, values: &mut Vec<String>, value: &str) {
    if seen.insert(value.to_string()) {
        values.push(value.to_string());
    }
}

fn sort_case_insensitive(values: &mut [String]) {
    values.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
}

/// Collect the distinct products, platforms and channels present in a
/// response, each sorted ascending without regard to case. Values keep
/// their exact spelling; channels use the wire string.
pub fn extract_filter_values(response: &FirmwareResponse) -> FilterValues {
    let mut values = FilterValues::default();
    let mut seen_products = HashSet::new();
    let mut seen_platforms = HashSet::new();
    let mut seen_channels = HashSet::new();

    for item in response.items() {
        push_unique(&mut seen_products, &mut values.products, &item.product);
        push_unique(&mut seen_platforms, &mut values.platforms, &item.platform);
        push_unique(&mut seen_channels, &mut values.channels, item.channel.as_str());
    }

    sort_case_insensitive(&mut values.products);
    sort_case_insensitive(&mut values.platforms);
    sort_case_insensitive(&mut values.channels);

    values
}
