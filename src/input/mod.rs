//! Address input sources.
//!
//! This module gathers raw candidate addresses for classification:
//! - [`manual`] - Line-by-line entry from the terminal
//! - [`sample`] - Built-in sample list
//! - [`file`] - Delimited text file

mod file;
mod manual;
mod sample;

// Re-export public functions
pub use file::read_ips_from_file;
pub use manual::{read_from, read_manual_ips, END_WORD};
pub use sample::read_sample_ips;
