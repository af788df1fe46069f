//! Store configuration via `reelstore.toml`
//!
//! The file is optional: when it is absent from the working directory every
//! field takes its default. Input paths given on the command line override
//! whatever the file names.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use reelstore_core::{Error, Result};
use reelstore_storage::DEFAULT_BUCKETS;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "reelstore.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Store configuration loaded from `reelstore.toml`.
///
/// # Example
///
/// ```toml
/// movies = "data4movies.txt"
/// customers = "data4customers.txt"
/// commands = "data4commands.txt"
/// customer_buckets = 101
/// log_level = "error"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Movie load file
    #[serde(default = "default_movies")]
    pub movies: PathBuf,
    /// Customer load file
    #[serde(default = "default_customers")]
    pub customers: PathBuf,
    /// Command file
    #[serde(default = "default_commands")]
    pub commands: PathBuf,
    /// Initial bucket count of the customer index.
    #[serde(default = "default_customer_buckets")]
    pub customer_buckets: usize,
    /// Log filter level: `"error"`, `"warn"`, `"info"`, `"debug"` or `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_movies() -> PathBuf {
    PathBuf::from("data4movies.txt")
}

fn default_customers() -> PathBuf {
    PathBuf::from("data4customers.txt")
}

fn default_commands() -> PathBuf {
    PathBuf::from("data4commands.txt")
}

fn default_customer_buckets() -> usize {
    DEFAULT_BUCKETS
}

fn default_log_level() -> String {
    "error".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            movies: default_movies(),
            customers: default_customers(),
            commands: default_commands(),
            customer_buckets: default_customer_buckets(),
            log_level: default_log_level(),
        }
    }
}

impl StoreConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# reelstore configuration
#
# Input files. Positional command-line arguments override these.
movies = "data4movies.txt"
customers = "data4customers.txt"
commands = "data4commands.txt"

# Initial bucket count of the customer index (must be > 0).
# The index doubles whenever its load factor passes 0.75.
customer_buckets = 101

# Log level for diagnostics on stderr: "error", "warn", "info", "debug", "trace".
# Rejected lines are always reported; "warn" adds a log event for each.
log_level = "error"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `dir/reelstore.toml` if it exists, otherwise the defaults.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check field values that serde alone cannot.
    pub fn validate(&self) -> Result<()> {
        if self.customer_buckets == 0 {
            return Err(Error::config("customer_buckets must be greater than 0"));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::config(format!(
                "invalid log_level '{}'. Expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}
