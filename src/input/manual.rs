//! Manual address entry from the terminal.

use std::collections::HashSet;
use std::error::Error;
use std::io::{BufRead, Write};

/// Word that ends manual entry (matched case-insensitively).
pub const END_WORD: &str = "done";

/// Read addresses line by line from stdin until the operator types [`END_WORD`].
pub fn read_manual_ips() -> Result<HashSet<String>, Box<dyn Error>> {
    println!("\nEnter addresses one per line, '{END_WORD}' to finish:\n");
    let stdin = std::io::stdin();
    read_from(&mut stdin.lock())
}

/// Read addresses from any line source until [`END_WORD`] or end of input.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. Duplicate
/// lines collapse through the set.
pub fn read_from<R: BufRead>(reader: &mut R) -> Result<HashSet<String>, Box<dyn Error>> {
    let mut ips = HashSet::new();

    loop {
        print!("IP> ");
        std::io::stdout()
            .flush()
            .map_err(|e| format!("Error flushing stdout: {e}"))?;

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| format!("Error reading input: {e}"))?;
        if read == 0 {
            // EOF ends entry like the end word
            break;
        }

        let ip = line.trim();
        if ip.eq_ignore_ascii_case(END_WORD) {
            break;
        }
        if !ip.is_empty() {
            ips.insert(ip.to_string());
        }
    }

    log::info!("Manual entry collected {} addresses", ips.len());
    Ok(ips)
}
