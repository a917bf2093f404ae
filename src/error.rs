//! Error types for the beefocus firmware core.
//!
//! Only configuration loading and pin access can fail. Malformed commands and
//! stack faults are not errors at this level: the engine absorbs them into
//! diagnostics and `ERROR_STATE` frames.

use core::fmt;

use crate::interface::Pin;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all beefocus operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Hardware pin access error
    Hardware(HardwareError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Build profile name not in the build table
    UnknownBuild(heapless::String<32>),
    /// Command poll interval must be at least 1 ms
    ZeroCommandEpoch,
    /// Sleep-mode poll interval must be at least 1 ms
    ZeroSleepEpoch,
    /// At least one step must be taken between command checks
    ZeroStepsBetweenChecks,
    /// Step pulse width must be at least 1 us
    ZeroStepPulse,
    /// Maximum absolute position must be positive
    ZeroMaxPosition,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Pin access errors reported by a [`HardwareInterface`](crate::interface::HardwareInterface).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareError {
    /// Driving an output pin failed
    PinWrite(Pin),
    /// Sampling an input pin failed
    PinRead(Pin),
    /// Configuring a pin's direction failed
    PinMode(Pin),
}

impl HardwareError {
    /// Numeric code carried by the `ERROR_STATE` frame this error produces.
    pub fn code(self) -> i32 {
        match self {
            HardwareError::PinWrite(pin) => 100 + pin as i32,
            HardwareError::PinRead(pin) => 200 + pin as i32,
            HardwareError::PinMode(pin) => 300 + pin as i32,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Hardware(e) => write!(f, "Hardware error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::UnknownBuild(name) => write!(f, "Unknown build profile '{}'", name),
            ConfigError::ZeroCommandEpoch => write!(f, "Command poll interval must be > 0 ms"),
            ConfigError::ZeroSleepEpoch => write!(f, "Sleep poll interval must be > 0 ms"),
            ConfigError::ZeroStepsBetweenChecks => {
                write!(f, "Steps between command checks must be > 0")
            }
            ConfigError::ZeroStepPulse => write!(f, "Step pulse width must be > 0 us"),
            ConfigError::ZeroMaxPosition => write!(f, "Maximum absolute position must be > 0"),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::PinWrite(pin) => write!(f, "write to {} pin failed", pin.name()),
            HardwareError::PinRead(pin) => write!(f, "read from {} pin failed", pin.name()),
            HardwareError::PinMode(pin) => write!(f, "setting mode of {} pin failed", pin.name()),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}
