pub mod config;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{classify, is_public, AddressScope, FilterReport};
pub use processing::{filter_public, filter_public_with};

use std::collections::HashSet;

/// Classify an address set, printing one verdict line per address.
///
/// Convenience entry point for the interactive driver; the filtering core
/// itself stays pure and console-free.
pub fn screen_addresses(addresses: &HashSet<String>) -> FilterReport {
    processing::filter_public_with(addresses, output::print_verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_addresses_report() {
        let ips: HashSet<String> = ["8.8.8.8", "10.0.0.1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let report = screen_addresses(&ips);
        assert_eq!(report.public, vec!["8.8.8.8"]);
        assert_eq!(report.excluded, 1);
        assert!(report.is_complete());
    }
}
