//! Terminal output for the interactive session.
//!
//! Menu, per-address verdict lines and the run summary.

use crate::models::{AddressScope, FilterReport};
use colored::Colorize;

/// Print the main menu.
pub fn print_menu() {
    println!("\n{}", "=".repeat(50));
    println!("{}", "     PUBLIC IP FILTER".bold());
    println!("{}", "=".repeat(50));
    println!("\nSelect the input source:");
    println!("  1. Enter addresses manually");
    println!("  2. Use the built-in sample list");
    println!("  3. Load from a delimited file");
    println!("  4. Quit");
    println!("{}", "-".repeat(50));
}

/// Print one verdict line for an analysed address.
pub fn print_verdict(addr: &str, scope: AddressScope) {
    if scope.is_public() {
        println!("  {mark} {line}", mark = "+".green(), line = format_verdict(addr, scope));
    } else {
        println!("  {mark} {line}", mark = "-".red(), line = format_verdict(addr, scope));
    }
}

/// Format the text of a verdict line (without the colored mark).
pub fn format_verdict(addr: &str, scope: AddressScope) -> String {
    format!("{addr} - {scope}")
}

/// Print the totals of a filter run.
pub fn print_summary(report: &FilterReport) {
    println!("\n{}", "=".repeat(50));
    println!("{}", "SUMMARY".bold());
    println!("  addresses analysed:      {}", report.analysed);
    println!("  public addresses found:  {}", report.public.len());
    println!("  non-public excluded:     {}", report.excluded);
}

/// Print the public addresses found.
pub fn print_public_list(public_ips: &[String]) {
    println!("\nPublic addresses found:");
    for ip in public_ips {
        println!("   {ip}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_verdict_public() {
        assert_eq!(format_verdict("8.8.8.8", AddressScope::Public), "8.8.8.8 - public");
    }

    #[test]
    fn test_format_verdict_non_public() {
        assert_eq!(
            format_verdict("192.168.1.1", AddressScope::Private),
            "192.168.1.1 - private"
        );
        assert_eq!(
            format_verdict("not-an-ip", AddressScope::Invalid),
            "not-an-ip - invalid"
        );
    }
}
