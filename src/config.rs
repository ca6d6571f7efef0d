//! Runtime configuration.
//!
//! Settings come from environment variables, optionally loaded from a `.env`
//! file by the driver.

use std::path::PathBuf;

/// Default directory for exported record files.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Runtime settings for the interactive session.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory exported CSV files are written into.
    pub output_dir: PathBuf,
}

impl Settings {
    /// Build settings from the environment.
    ///
    /// `OUTPUT_DIR` overrides the default export directory.
    pub fn from_env() -> Settings {
        let output_dir =
            std::env::var("OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());
        log::debug!("Using output directory: {output_dir}");
        Settings {
            output_dir: PathBuf::from(output_dir),
        }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_from_env_override() {
        std::env::set_var("OUTPUT_DIR", "exports");
        let settings = Settings::from_env();
        std::env::remove_var("OUTPUT_DIR");
        assert_eq!(settings.output_dir, PathBuf::from("exports"));
    }
}
