//! Configuration loading
//!
//! The configuration file is an arbitrary YAML document. No schema is
//! enforced: it is parsed into a [`ConfigMapping`] tree and handed back as-is.
//! The numeric pipeline never reads from it.

use std::path::Path;

use crate::error::{Error, Result};

/// Untyped configuration tree parsed from YAML
///
/// Keys and values may be strings, numbers, booleans, null, nested mappings,
/// or sequences. Index it like a map: `config["settings"]["debug"]`.
pub type ConfigMapping = serde_yaml::Value;

/// Load a configuration file from disk
///
/// Every call re-reads and re-parses the file.
///
/// # Errors
///
/// - [`Error::ConfigNotFound`] if `path` does not exist
/// - [`Error::ConfigParse`] if the content is not a valid YAML document
/// - [`Error::Io`] if the file cannot be read
///
/// # Example
///
/// ```rust,ignore
/// let config = load_config("settings.yaml")?;
/// println!("name = {:?}", config["name"]);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConfigMapping> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    match serde_yaml::from_str::<ConfigMapping>(&contents) {
        Ok(config) => {
            tracing::info!("Configuration loaded from {}", path.display());
            Ok(config)
        }
        Err(e) => {
            tracing::error!("Error parsing configuration file: {}", e);
            Err(Error::ConfigParse(e))
        }
    }
}
