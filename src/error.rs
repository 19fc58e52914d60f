//! Error types for the device layer.
//!
//! This module provides a unified error type [`DeviceError`] covering the
//! three failure classes of the device layer: configuration errors raised
//! at construction or first use, internal-consistency failures that indicate
//! a bug in the topology that built the devices, and operations on device
//! variants that are declared but deliberately unimplemented.

use thiserror::Error;

/// Result type alias using [`DeviceError`].
pub type Result<T> = std::result::Result<T, DeviceError>;

/// Unified error type for all device operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeviceError {
    // ============ Configuration Errors ============
    /// A device parameter has a value the model cannot use
    #[error("Invalid parameter '{param}' for device '{device}': {message}")]
    InvalidParameter {
        device: String,
        param: String,
        message: String,
    },

    /// A value needed by the requested evaluation was never set
    #[error("Device '{device}' has no {what}")]
    MissingValue { device: String, what: String },

    /// A required waveform argument was not supplied
    #[error("Missing required argument '{param}' for {kind} waveform")]
    MissingArgument { kind: String, param: String },

    /// A terminal has no display name in the supplied node map
    #[error("Terminal {node} of device '{device}' has no display name")]
    UnnamedNode { device: String, node: String },

    // ============ Internal Consistency Errors ============
    /// The topology handed this layer references that do not line up.
    ///
    /// Never caused by user input; callers must abort the analysis.
    #[error("Internal consistency failure: {message}")]
    InternalConsistency { message: String },

    // ============ Unsupported Operations ============
    /// The device variant exists but cannot be simulated
    #[error("Operation '{operation}' is not supported by device '{device}'")]
    Unsupported { device: String, operation: String },
}

impl DeviceError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        device: impl Into<String>,
        param: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            device: device.into(),
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create a missing value error
    pub fn missing_value(device: impl Into<String>, what: impl Into<String>) -> Self {
        Self::MissingValue {
            device: device.into(),
            what: what.into(),
        }
    }

    /// Create an internal consistency error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalConsistency {
            message: message.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(device: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::Unsupported {
            device: device.into(),
            operation: operation.into(),
        }
    }

    /// Whether this error must abort the caller rather than be reported as bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InternalConsistency { .. } | Self::Unsupported { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DeviceError::invalid_parameter("R1", "value", "must be non-zero");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'value' for device 'R1': must be non-zero"
        );

        let err = DeviceError::unsupported("H1", "current");
        assert_eq!(
            err.to_string(),
            "Operation 'current' is not supported by device 'H1'"
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(DeviceError::internal("mutual inductors bug").is_fatal());
        assert!(DeviceError::unsupported("H1", "ports").is_fatal());
        assert!(!DeviceError::missing_value("V1", "DC value").is_fatal());
    }
}
