//! Error type for telemetry queries.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for on-target logging when the `defmt`
//! feature is enabled.

use core::fmt;

/// Why a telemetry query produced no value.
///
/// The dashboard never propagates these; a failed field is drawn as a
/// placeholder and the rest of the page renders normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TelemetryError {
    /// The platform does not expose this attribute.
    Unsupported,

    /// The device backing the attribute (card, controller) is absent.
    DeviceAbsent,

    /// The platform service returned a raw error code.
    Service(u32),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Unsupported => f.write_str("unsupported"),
            TelemetryError::DeviceAbsent => f.write_str("device absent"),
            TelemetryError::Service(code) => write!(f, "service error 0x{:x}", code),
        }
    }
}

/// Shorthand for telemetry query results.
pub type Result<T> = core::result::Result<T, TelemetryError>;
