use std::ops::Mul;
use std::fmt;

use crate::angle_axis::AngleAxis;
use crate::eigen::extract_angle_axis;
use crate::error::{RotationError, RotationResult};
use crate::matrix::Mat3;
use crate::rotator::{shortest_arc, Rotator};
use crate::scalar::Scalar;
use crate::vector::Vec3;

/// A rotation stored as a 3 x 3 matrix.
///
/// The matrix may carry a uniform scale (`scale · rotation`). The scale is
/// read from the length of the first column; `inverse` and `normalized` rely
/// on the matrix having that form.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RotationMatrix<S> {
    pub matrix: Mat3<S>,
}
impl<S: Scalar> RotationMatrix<S> {
    pub fn from_matrix(matrix: Mat3<S>) -> Self {
        Self { matrix }
    }

    /// Roll about X, then pitch about Y, then yaw about Z.
    pub fn from_euler(roll: S, pitch: S, yaw: S) -> Self {
        Self::from_euler_scaled(roll, pitch, yaw, S::one())
    }

    pub fn from_euler_scaled(roll: S, pitch: S, yaw: S, scale: S) -> Self {
        let (s_a, c_a) = roll.sin_cos();
        let (s_b, c_b) = pitch.sin_cos();
        let (s_g, c_g) = yaw.sin_cos();

        let matrix = Mat3::from_rows(
            Vec3::new(c_b * c_g, s_a * s_b * c_g - c_a * s_g, c_a * s_b * c_g + s_a * s_g),
            Vec3::new(c_b * s_g, s_a * s_b * s_g + c_a * c_g, c_a * s_b * s_g - s_a * c_g),
            Vec3::new(-s_b,      s_a * c_b,                   c_a * c_b),
        );
        Self::from_matrix(matrix * scale)
    }

    /// Rodrigues' formula in matrix form, with the same axis-length scaling
    /// as [`AngleAxis::rotate`]. A zero-length axis gives the zero matrix.
    pub fn from_angle_axis(angle: S, axis: Vec3<S>) -> Self {
        let len = axis.len();
        if len == S::zero() {
            log::debug!("rotation matrix from a zero axis");
            return Self::from_matrix(Mat3::zero());
        }
        let (s, c) = angle.sin_cos();
        let c_1 = S::one() - c;
        let Vec3 { x, y, z } = axis;

        let matrix = Mat3::from_rows(
            Vec3::new(len * c + x * x * c_1 / len, x * y * c_1 / len - z * s,       z * x * c_1 / len + y * s),
            Vec3::new(x * y * c_1 / len + z * s,    len * c + y * y * c_1 / len,     y * z * c_1 / len - x * s),
            Vec3::new(z * x * c_1 / len - y * s,    y * z * c_1 / len + x * s,       len * c + z * z * c_1 / len),
        );
        Self::from_matrix(matrix)
    }

    /// Uniform scale of the matrix, the length of its first column.
    pub fn scale(&self) -> S {
        self.matrix.c0.len()
    }

    /// Angle and axis by eigen-extraction. The axis length is the matrix
    /// scale. When the axis can't be recovered (identity or very close to it)
    /// this is a zero angle about `right`.
    pub fn to_angle_axis(&self) -> AngleAxis<S> {
        self.try_angle_axis().unwrap_or_else(|_| {
            log::debug!("no stable axis in rotation matrix, using identity");
            AngleAxis::new(S::zero(), Vec3::right() * self.scale())
        })
    }

    pub fn try_angle_axis(&self) -> RotationResult<AngleAxis<S>> {
        match extract_angle_axis(&self.matrix) {
            Some((angle, axis)) => Ok(AngleAxis::new(angle, axis)),
            None => Err(RotationError::SingularConversion("RotationMatrix::to_angle_axis")),
        }
    }

    pub fn cast<T: Scalar>(&self) -> RotationMatrix<T> {
        RotationMatrix::from_matrix(self.matrix.cast())
    }
}

impl<S: Scalar> Rotator<S> for RotationMatrix<S> {
    fn identity() -> Self {
        Self::from_matrix(Mat3::identity())
    }

    fn rotate(&self, vec: Vec3<S>) -> Vec3<S> {
        self.matrix * vec
    }

    fn compose(&self, other: &Self) -> Self {
        Self::from_matrix(other.matrix * self.matrix)
    }

    /// For `scale · rotation`, the inverse is the transpose over `scale²`.
    fn inverse(&self) -> Self {
        Self::from_matrix(self.matrix.transpose() / self.matrix.c0.len_sq())
    }

    fn normalized(&self) -> Self {
        Self::from_matrix(self.matrix / self.scale())
    }

    fn rotate_from_to(from: Vec3<S>, to: Vec3<S>) -> Self {
        let (angle, axis) = shortest_arc(from, to);
        Self::from_angle_axis(angle, axis)
    }
}

impl<S: Scalar> From<AngleAxis<S>> for RotationMatrix<S> {
    fn from(aa: AngleAxis<S>) -> Self {
        Self::from_angle_axis(aa.angle, aa.axis)
    }
}

impl<S: Scalar> From<RotationMatrix<S>> for AngleAxis<S> {
    fn from(rot: RotationMatrix<S>) -> Self {
        rot.to_angle_axis()
    }
}

impl<S: Scalar> Mul<Vec3<S>> for RotationMatrix<S> {
    type Output = Vec3<S>;

    fn mul(self, vec: Vec3<S>) -> Self::Output {
        self.rotate(vec)
    }
}

impl<S: Scalar> Mul for RotationMatrix<S> {
    type Output = Self;

    /// Plain matrix product: `a * b` applies `b`, then `a`.
    fn mul(self, other: Self) -> Self::Output {
        Self::from_matrix(self.matrix * other.matrix)
    }
}

impl<S: Scalar> fmt::Display for RotationMatrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix)
    }
}


#[test]
fn euler_yaw_only() {
    let r = RotationMatrix::from_euler(0.0, 0.0, std::f64::consts::FRAC_PI_2);
    approx::assert_relative_eq!(r.rotate(Vec3::right()), Vec3::forward(), epsilon = 1e-15);
    approx::assert_relative_eq!(r.rotate(Vec3::up()), Vec3::up(), epsilon = 1e-15);
}

#[test]
fn euler_applies_roll_then_pitch_then_yaw() {
    let (roll, pitch, yaw) = (0.3, -0.4, 1.2);
    let r = RotationMatrix::from_euler(roll, pitch, yaw);
    let v = Vec3::new(1.0, -2.0, 0.5);

    let by_steps = AngleAxis::new(yaw, Vec3::up()).rotate(
        AngleAxis::new(pitch, Vec3::forward()).rotate(
            AngleAxis::new(roll, Vec3::right()).rotate(v)
        )
    );
    approx::assert_relative_eq!(r.rotate(v), by_steps, epsilon = 1e-12);
}

#[test]
fn scaled_euler_inverse_and_normalized() {
    let r = RotationMatrix::from_euler_scaled(0.1, 0.2, 0.3, 3.0);
    approx::assert_relative_eq!(r.scale(), 3.0, epsilon = 1e-12);

    let v = Vec3::new(2.0, 3.0, 4.0);
    approx::assert_relative_eq!(r.rotate(v).len(), 3.0 * v.len(), epsilon = 1e-12);
    approx::assert_relative_eq!(r.unrotate(r.rotate(v)), v, epsilon = 1e-12);
    approx::assert_relative_eq!(r.normalized().rotate(v).len(), v.len(), epsilon = 1e-12);
}

#[test]
fn compose_is_left_multiplication() {
    let a = RotationMatrix::from_euler(0.5, 0.0, 0.0);
    let b = RotationMatrix::from_euler(0.0, 0.0, 0.9);
    assert_eq!(a.compose(&b).matrix, b.matrix * a.matrix);
    assert_eq!(a.compose(&b), b * a);
}

#[test]
fn zero_axis_gives_zero_matrix() {
    let r = RotationMatrix::from_angle_axis(1.0_f64, Vec3::zero());
    assert_eq!(r.rotate(Vec3::new(2.0, 3.0, 4.0)), Vec3::zero());
    assert!(r.inverse().matrix.c0.x.is_nan());
}

#[test]
fn identity_conversion_is_singular() {
    let r = RotationMatrix::<f64>::identity();
    assert!(matches!(r.try_angle_axis(), Err(RotationError::SingularConversion(_))));

    let aa = r.to_angle_axis();
    assert_eq!(aa.angle, 0.0);
    assert_eq!(aa.axis, Vec3::right());
}

#[test]
fn half_turn_converts_back() {
    let axis = Vec3::new(1.0, 1.0, 0.0).normalized();
    let r = RotationMatrix::from_angle_axis(std::f64::consts::PI, axis);
    let aa = AngleAxis::from(r);
    let v = Vec3::new(0.3, 2.0, -1.0);
    approx::assert_relative_eq!(aa.rotate(v), r.rotate(v), epsilon = 1e-12);
}
