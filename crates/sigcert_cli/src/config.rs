//! CLI configuration file.

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied when a flag is not given on the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Certificate type for `create`
    pub cert_type: String,
    /// Validity period for `create`, in hours from now
    pub validity_hours: u64,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            cert_type: "authority".to_string(),
            validity_hours: 24 * 30,
            log_filter: "sigcert=info".to_string(),
            log_json: false,
        }
    }
}

impl CliConfig {
    /// Load from a JSON file, or fall back to defaults when no path is given
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).wrap_err_with(|| format!("parsing config {}", path.display()))
    }
}
