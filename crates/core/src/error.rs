//! Error types for color conversion and simulator construction
//!
//! Every fault in this crate signals a logic error upstream (bad input, inconsistent
//! hue range, invalid grid size). Nothing here is transient, so callers should propagate
//! rather than retry.

use std::fmt;

/// Faults raised by the color conversion functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorError {
    /// A value fell outside `[0,1]` by more than the allowed tolerance.
    OutOfTolerance {
        /// The offending value
        value: f64,
        /// Tolerance band that was exceeded
        tolerance: f64,
    },
    /// A hue midpoint could not be placed inside the normalized `[min, max]` range.
    MidpointOutOfRange { min: f64, mid: f64, max: f64 },
    /// An RGB input channel was outside `[0,1]`.
    ChannelOutOfRange {
        /// Channel name (`"r"`, `"g"` or `"b"`)
        channel: &'static str,
        value: f64,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::OutOfTolerance { value, tolerance } => write!(
                f,
                "Color value {value} is outside [0,1] by more than {tolerance}"
            ),
            ColorError::MidpointOutOfRange { min, mid, max } => write!(
                f,
                "Hue midpoint {mid} cannot be placed in range [{min}, {max}]"
            ),
            ColorError::ChannelOutOfRange { channel, value } => {
                write!(f, "RGB channel '{channel}' must be in [0,1], got {value}")
            }
        }
    }
}

impl std::error::Error for ColorError {}

/// Invalid simulator construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height was zero
    ZeroDimension {
        /// `"width"` or `"height"`
        name: &'static str,
    },
    /// `3 * width * height` does not fit in memory addressing
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimension { name } => write!(f, "Grid {name} must be positive"),
            ConfigError::TooLarge { width, height } => {
                write!(f, "Grid {width}x{height} is too large for an RGB buffer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level error returned when building a [`crate::FireSimulator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireError {
    Config(ConfigError),
    Color(ColorError),
}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireError::Config(e) => write!(f, "Invalid configuration: {e}"),
            FireError::Color(e) => write!(f, "Color conversion failed: {e}"),
        }
    }
}

impl std::error::Error for FireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FireError::Config(e) => Some(e),
            FireError::Color(e) => Some(e),
        }
    }
}

impl From<ConfigError> for FireError {
    fn from(error: ConfigError) -> Self {
        FireError::Config(error)
    }
}

impl From<ColorError> for FireError {
    fn from(error: ColorError) -> Self {
        FireError::Color(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let err = ColorError::OutOfTolerance {
            value: 1.5,
            tolerance: 0.005,
        };
        assert_eq!(
            err.to_string(),
            "Color value 1.5 is outside [0,1] by more than 0.005"
        );

        let err = ConfigError::ZeroDimension { name: "width" };
        assert_eq!(err.to_string(), "Grid width must be positive");
    }

    #[test]
    fn test_fire_error_wraps_source() {
        let err: FireError = ConfigError::ZeroDimension { name: "height" }.into();
        assert!(matches!(err, FireError::Config(_)));
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("Grid height must be positive".to_string())
        );
    }
}
