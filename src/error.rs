use std::error::Error;
use std::fmt;

pub type RotationResult<T> = Result<T, RotationError>;

/// Conditions the infallible API absorbs with a documented fallback.
/// The `try_*` methods report them instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    /// A zero-length axis or vector where a direction is required.
    DegenerateAxis(&'static str),
    /// A conversion with no unique angle/axis, such as the identity.
    SingularConversion(&'static str),
}
impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationError::DegenerateAxis(op) => {
                write!(f, "{op}: zero-length direction")
            }
            RotationError::SingularConversion(op) => {
                write!(f, "{op}: rotation axis is undefined")
            }
        }
    }
}
impl Error for RotationError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidNumber(String),
    InvalidVector(String),
    InvalidRepresentation(String),
    MissingValue(&'static str),
}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber(arg) => {
                write!(f, "
                    \rInvalid number: {arg}",
                )
            }
            ConfigError::InvalidVector(arg) => {
                write!(f, "
                    \rInvalid vector {arg}, expected x,y,z",
                )
            }
            ConfigError::InvalidRepresentation(arg) => {
                write!(f, "
                    \rUnknown representation {arg}, expected angle-axis, matrix, quaternion or all",
                )
            }
            ConfigError::MissingValue(flag) => {
                write!(f, "
                    \rMissing value for {flag}",
                )
            }
        }
    }
}
impl Error for ConfigError {}
