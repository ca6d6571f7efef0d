//! Delimited file address source.
//!
//! Reads candidate addresses from a text file, splitting rows on commas,
//! semicolons and whitespace.

use regex::Regex;
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use std::sync::OnceLock;

/// Regex for splitting rows into candidate address fields.
static FIELD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_field_regex() -> &'static Regex {
    FIELD_REGEX.get_or_init(|| Regex::new(r"[,;\s]+").expect("Invalid Regex"))
}

/// Read candidate addresses from a delimited text file.
///
/// Every field of every row becomes one candidate after trimming; empty
/// fields are dropped and duplicates collapse.
///
/// # Arguments
/// * `path` - Path of the file to read
///
/// # Returns
/// * `Ok(HashSet<String>)` - The candidate addresses (possibly empty)
/// * `Err` - If the file does not exist or cannot be read
pub fn read_ips_from_file(path: &str) -> Result<HashSet<String>, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("File does not exist: {path}").into());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| format!("Error reading file {path}: {e}"))?;

    let ips = split_fields(&content);
    log::info!("Read {} candidate addresses from {path}", ips.len());
    Ok(ips)
}

/// Split file content into trimmed, non-empty fields.
fn split_fields(content: &str) -> HashSet<String> {
    get_field_regex()
        .split(content)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}
