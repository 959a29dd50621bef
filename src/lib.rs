mod scalar;
mod vector;
mod complex;
mod quaternion;
mod matrix;
mod rotator;
mod interop;
pub mod eigen;
pub mod error;
pub mod config;
pub mod angle_axis;
pub mod rotation_matrix;
pub mod quaternion_rotation;

pub use crate::scalar::{cast, Scalar};
pub use crate::vector::{Vec2, Vec3};
pub use crate::complex::Complex;
pub use crate::quaternion::Quaternion;
pub use crate::matrix::Mat3;
pub use crate::rotator::Rotator;
pub use crate::eigen::extract_angle_axis;
pub use crate::error::{ConfigError, RotationError, RotationResult};
pub use crate::config::{Config, Representation};
pub use crate::angle_axis::AngleAxis;
pub use crate::rotation_matrix::RotationMatrix;
pub use crate::quaternion_rotation::QuaternionRotation;
