//! Configuration module for beefocus.
//!
//! Provides the timing and capability profile of a focuser build, the fixed
//! table of known builds, and loading of profile overrides from TOML files
//! (with `std` feature).

mod build;
#[cfg(feature = "std")]
mod loader;
mod timing;
mod validation;

pub use build::{Build, BuildParams, FocuserConfig, TimingOverrides};
pub use timing::TimingParams;
pub use validation::validate_build_params;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
