use colored::Colorize;
use public_ip_summary::config::Settings;
use public_ip_summary::{input, output, screen_addresses};
use std::error::Error;
use std::io::Write;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let settings = Settings::from_env();
    run_menu_loop(&settings)
}

/// Interactive loop: collect, filter, export, repeat.
fn run_menu_loop(settings: &Settings) -> Result<(), Box<dyn Error>> {
    loop {
        output::print_menu();

        let Some(choice) = prompt("\nOption [1-4]: ")? else {
            break;
        };

        let ips = match choice.as_str() {
            "1" => input::read_manual_ips()?,
            "2" => input::read_sample_ips(),
            "3" => {
                let Some(path) = prompt("\nFile path: ")? else {
                    break;
                };
                match input::read_ips_from_file(&path) {
                    Ok(ips) => ips,
                    Err(e) => {
                        log::warn!(
                            "{failed} to read address file: {e}",
                            failed = "failed".on_red()
                        );
                        println!("  Error: {e}");
                        continue;
                    }
                }
            }
            "4" => {
                println!("\nGoodbye!");
                break;
            }
            _ => {
                println!("\nInvalid option, select 1-4");
                continue;
            }
        };

        if ips.is_empty() {
            log::warn!("No addresses collected");
            println!("\nNo addresses to analyse");
            continue;
        }

        println!("\nAnalysing addresses...");
        let report = screen_addresses(&ips);
        output::print_summary(&report);

        if report.public.is_empty() {
            println!("\nNo public addresses found in the input");
        } else {
            match output::export_public_ips(&report.public, &settings.output_dir) {
                Ok(filepath) => {
                    println!("\nResult saved to: {}", filepath.display());
                    output::print_public_list(&report.public);
                }
                Err(e) => {
                    log::error!("Export failed: {e}");
                    println!("  Export error: {e}");
                }
            }
        }

        if prompt("\n[Press Enter to continue...]")?.is_none() {
            break;
        }
    }

    log::info!("# End main()");
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` on end of input.
fn prompt(msg: &str) -> Result<Option<String>, Box<dyn Error>> {
    print!("{msg}");
    std::io::stdout()
        .flush()
        .map_err(|e| format!("Error flushing stdout: {e}"))?;

    let mut line = String::new();
    let read = std::io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Error reading input: {e}"))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
