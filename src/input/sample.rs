//! Built-in sample address list.

use std::collections::HashSet;

/// Sample addresses for demonstration runs.
fn sample_addresses() -> Vec<&'static str> {
    vec![
        "192.168.1.1",    // private
        "10.0.0.1",       // private
        "8.8.8.8",        // public (Google DNS)
        "1.1.1.1",        // public (Cloudflare DNS)
        "172.16.0.1",     // private
        "208.67.222.222", // public (OpenDNS)
        "127.0.0.1",      // loopback
        "169.254.1.1",    // link-local
        "224.0.0.1",      // multicast
        "93.184.216.34",  // public (example.com)
        "192.168.100.50", // private
        "142.251.41.14",  // public (google.com)
    ]
}

/// Load the built-in sample list.
pub fn read_sample_ips() -> HashSet<String> {
    let sample = sample_addresses();
    log::info!("Loaded built-in sample list with {} addresses", sample.len());
    sample.into_iter().map(str::to_string).collect()
}
