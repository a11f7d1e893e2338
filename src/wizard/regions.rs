// ABOUTME: Shipping region multi-select over a fixed reference list

use std::collections::BTreeSet;

use super::patch::{DraftAction, ShippingPoliciesPatch};

/// Regions offered by the shipping step, in display order
pub const REFERENCE_REGIONS: [&str; 16] = [
    "United States",
    "Canada",
    "Mexico",
    "United Kingdom",
    "European Union",
    "Australia",
    "New Zealand",
    "Japan",
    "South Korea",
    "Singapore",
    "India",
    "China",
    "Brazil",
    "Argentina",
    "South Africa",
    "Worldwide",
];

/// Add `name` when `selected`, remove it otherwise. Idempotent either way.
pub fn toggle_region(regions: &BTreeSet<String>, name: &str, selected: bool) -> BTreeSet<String> {
    let mut next = regions.clone();
    if selected {
        next.insert(name.to_string());
    } else {
        next.remove(name);
    }
    next
}

/// Patch replacing the whole region set with the toggled one
pub fn region_patch(regions: &BTreeSet<String>, name: &str, selected: bool) -> DraftAction {
    DraftAction::ShippingPolicies(ShippingPoliciesPatch {
        shipping_regions: Some(toggle_region(regions, name, selected)),
        ..ShippingPoliciesPatch::default()
    })
}

/// Selected regions in reference order, followed by any that are not in the list
pub fn display_order(regions: &BTreeSet<String>) -> Vec<&str> {
    let mut ordered: Vec<&str> = REFERENCE_REGIONS
        .iter()
        .copied()
        .filter(|name| regions.contains(*name))
        .collect();
    ordered.extend(
        regions
            .iter()
            .map(String::as_str)
            .filter(|name| !REFERENCE_REGIONS.contains(name)),
    );
    ordered
}
