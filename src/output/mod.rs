//! Output for the filter results.
//!
//! This module handles exporting and displaying results:
//! - [`csv`] - Timestamped CSV record file export
//! - [`terminal`] - Menu, verdict and summary rendering

mod csv;
mod terminal;

pub use csv::{export_public_ips, CSV_HEADER};
pub use terminal::{format_verdict, print_menu, print_public_list, print_summary, print_verdict};
