//! Public address filtering.
//!
//! Applies the range classifier across an address set and produces the
//! ordered, deduplicated public subset.

use crate::models::{classify, AddressScope, FilterReport};
use itertools::Itertools;
use std::collections::HashSet;

/// Filter the public addresses out of a set of raw address strings.
///
/// Addresses are visited in ascending lexicographic order and the returned
/// list keeps that order. Strings that fail to parse count as non-public.
/// An empty result is a valid outcome, not an error.
pub fn filter_public(addresses: &HashSet<String>) -> Vec<String> {
    filter_public_with(addresses, |_, _| {}).public
}

/// Filter with a per-address verdict observer.
///
/// The observer receives every address and its [`AddressScope`] in the order
/// the addresses are analysed, so the caller can render progress lines
/// without coupling the classification to the console.
///
/// # Arguments
/// * `addresses` - The raw candidate addresses, already deduplicated by set semantics
/// * `observer` - Called once per address with its verdict
///
/// # Returns
/// A [`FilterReport`] with the ordered public list and exclusion count.
pub fn filter_public_with<F>(addresses: &HashSet<String>, mut observer: F) -> FilterReport
where
    F: FnMut(&str, AddressScope),
{
    log::info!(
        "#Start filter_public_with() analysing {} addresses",
        addresses.len()
    );

    let mut report = FilterReport::default();
    for addr in addresses.iter().sorted() {
        let scope = classify(addr);
        observer(addr.as_str(), scope);
        if scope.is_public() {
            report.public.push(addr.clone());
        } else {
            report.excluded += 1;
        }
        report.analysed += 1;
    }

    log::info!(
        "# Analysed {} addresses: {} public, {} excluded",
        report.analysed,
        report.public.len(),
        report.excluded
    );

    report
}
