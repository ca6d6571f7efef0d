//! CSV export of the public address list.

use std::error::Error;
use std::path::{Path, PathBuf};

/// Column header of the exported record file.
pub const CSV_HEADER: &str = "IP_Publica";

/// Write the public address list to a timestamped CSV file.
///
/// Creates `dir` if absent. The file is named
/// `ips_publicas_<YYYYMMDD_HHMMSS>.csv` and holds the header row followed by
/// one address per row, in the order given.
///
/// # Arguments
/// * `public_ips` - The addresses to write, already ordered
/// * `dir` - Directory the file is written into
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the file written
/// * `Err` - If the directory or file cannot be written
pub fn export_public_ips(public_ips: &[String], dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Error creating output directory {}: {e}", dir.display()))?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filepath = dir.join(format!("ips_publicas_{timestamp}.csv"));

    let mut records = String::from(CSV_HEADER);
    records.push('\n');
    for ip in public_ips {
        records.push_str(ip);
        records.push('\n');
    }

    std::fs::write(&filepath, records)
        .map_err(|e| format!("Error writing output file {}: {e}", filepath.display()))?;

    log::info!(
        "Wrote {} public addresses to {}",
        public_ips.len(),
        filepath.display()
    );
    Ok(filepath)
}
