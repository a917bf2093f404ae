//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::{BuildParams, FocuserConfig};

/// Load a build profile from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use beefocus::load_config;
///
/// let params = load_config("focuser.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BuildParams> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse a build profile from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid, names an unknown build, or the
/// resulting profile fails validation.
pub fn parse_config(content: &str) -> Result<BuildParams> {
    let config: FocuserConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    let params = config.build_params()?;
    super::validation::validate_build_params(&params)?;

    Ok(params)
}
