use std::ops::Mul;
use std::fmt;

use crate::eigen::extract_angle_axis;
use crate::error::{RotationError, RotationResult};
use crate::matrix::Mat3;
use crate::quaternion_rotation::QuaternionRotation;
use crate::rotator::{shortest_arc, Rotator};
use crate::scalar::{cast, Scalar};
use crate::vector::Vec3;

/// A rotation by `angle` radians about `axis`.
///
/// The axis does not have to be unit length. Its length acts as a uniform
/// scale: `rotate` multiplies the result by `|axis|`. Call `normalized` to get
/// a pure rotation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AngleAxis<S> {
    pub angle: S,
    pub axis: Vec3<S>,
}
impl<S: Scalar> AngleAxis<S> {
    pub fn new(angle: S, axis: Vec3<S>) -> Self {
        Self { angle, axis }
    }

    pub fn from_components(angle: S, x: S, y: S, z: S) -> Self {
        Self::new(angle, Vec3::new(x, y, z))
    }

    /// Like `rotate`, but a zero-length axis is an error instead of
    /// producing the zero vector.
    pub fn try_rotate(&self, vec: Vec3<S>) -> RotationResult<Vec3<S>> {
        if self.axis.len_sq() == S::zero() {
            return Err(RotationError::DegenerateAxis("AngleAxis::rotate"));
        }
        Ok(self.rotate(vec))
    }

    /// Same rotation at another float precision.
    pub fn cast<T: Scalar>(&self) -> AngleAxis<T> {
        AngleAxis::new(cast(self.angle), self.axis.cast())
    }
}

impl<S: Scalar> Rotator<S> for AngleAxis<S> {
    fn identity() -> Self {
        Self::new(S::zero(), Vec3::right())
    }

    /// Rodrigues' formula. A zero-length axis maps everything to zero.
    fn rotate(&self, vec: Vec3<S>) -> Vec3<S> {
        if self.axis.len_sq() == S::zero() {
            log::trace!("angle-axis rotation with a zero axis");
            return Vec3::zero();
        }
        let len = self.axis.len();
        let (sin, cos) = self.angle.sin_cos();

        vec * (len * cos)
            + self.axis * (self.axis.dot(vec) * (S::one() - cos) / len)
            + self.axis.cross(vec) * sin
    }

    /// Probes the composite with the three canonical axes. Their images are
    /// the columns of the composite matrix, which is then read back as an
    /// angle and axis. The composite fixes `right` for rotations about it, in
    /// which case the extraction probes with the other axes.
    ///
    /// Composites too close to the identity for the matrix read-back go
    /// through the quaternion product instead, which only loses the axis at
    /// exactly 0 or 2π.
    fn compose(&self, other: &Self) -> Self {
        let image = |probe: Vec3<S>| other.rotate(self.rotate(probe));
        let composite = Mat3::from_cols(
            image(Vec3::right()),
            image(Vec3::forward()),
            image(Vec3::up()),
        );
        match extract_angle_axis(&composite) {
            Some((angle, axis)) => Self::new(angle, axis),
            None => {
                log::trace!("composite too small for matrix read-back, using quaternions");
                QuaternionRotation::from(*self)
                    .compose(&QuaternionRotation::from(*other))
                    .to_angle_axis()
            }
        }
    }

    /// The reciprocal axis length undoes the scale of `rotate`.
    fn inverse(&self) -> Self {
        Self::new(-self.angle, self.axis / self.axis.len_sq())
    }

    fn normalized(&self) -> Self {
        Self::new(self.angle, self.axis.normalized())
    }

    fn rotate_from_to(from: Vec3<S>, to: Vec3<S>) -> Self {
        let (angle, axis) = shortest_arc(from, to);
        Self::new(angle, axis)
    }
}

impl<S: Scalar> Mul<Vec3<S>> for AngleAxis<S> {
    type Output = Vec3<S>;

    fn mul(self, vec: Vec3<S>) -> Self::Output {
        self.rotate(vec)
    }
}

impl<S: Scalar> Mul for AngleAxis<S> {
    type Output = Self;

    /// `a * b` applies `b`, then `a`.
    fn mul(self, other: Self) -> Self::Output {
        other.compose(&self)
    }
}

impl<S: Scalar> fmt::Display for AngleAxis<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad about {}", self.angle, self.axis)
    }
}


#[test]
fn quarter_turn_about_up() {
    let r = AngleAxis::new(std::f64::consts::FRAC_PI_2, Vec3::up());
    approx::assert_relative_eq!(r.rotate(Vec3::right()), Vec3::forward(), epsilon = 1e-15);
    approx::assert_relative_eq!(r * Vec3::forward(), Vec3::left(), epsilon = 1e-15);
}

#[test]
fn zero_axis_rotates_to_zero() {
    let r = AngleAxis::new(1.0_f64, Vec3::zero());
    assert_eq!(r.rotate(Vec3::new(2.0, 3.0, 4.0)), Vec3::zero());
    assert_eq!(
        r.try_rotate(Vec3::right()),
        Err(RotationError::DegenerateAxis("AngleAxis::rotate")),
    );

    let inv = r.inverse();
    assert!(inv.axis.x.is_nan());
}

#[test]
fn axis_length_scales_result() {
    let r = AngleAxis::new(0.4, Vec3::new(0.0, 0.0, 2.0));
    let v = Vec3::new(1.0, 1.0, 1.0);
    approx::assert_relative_eq!(r.rotate(v).len(), 2.0 * v.len(), epsilon = 1e-12);
    approx::assert_relative_eq!(r.normalized().rotate(v).len(), v.len(), epsilon = 1e-12);
    approx::assert_relative_eq!(r.unrotate(r.rotate(v)), v, epsilon = 1e-12);
}

#[test]
fn compose_about_right_axis() {
    let a = AngleAxis::new(0.3, Vec3::right());
    let b = AngleAxis::new(0.5, Vec3::right());
    let c = a.compose(&b);
    approx::assert_relative_eq!(c.angle * c.axis.x, 0.8, epsilon = 1e-12);
}

#[test]
fn compose_applies_self_first() {
    let a = AngleAxis::new(0.7, Vec3::up());
    let b = AngleAxis::new(1.1, Vec3::new(1.0, 0.0, 0.0));
    let v = Vec3::new(0.2, -1.0, 3.0);

    approx::assert_relative_eq!(a.compose(&b).rotate(v), b.rotate(a.rotate(v)), epsilon = 1e-12);
    approx::assert_relative_eq!((b * a).rotate(v), b.rotate(a.rotate(v)), epsilon = 1e-12);
}

#[test]
fn composed_inverse_is_identity() {
    let r = AngleAxis::new(2.0_f64, Vec3::new(1.0, -2.0, 0.5));
    let c = r.inverse().compose(&r);
    let v = Vec3::new(2.0, 3.0, 4.0);
    approx::assert_relative_eq!(c.rotate(v), v, epsilon = 1e-12);
    assert!(c.angle.abs() < 1e-12);
}

#[test]
fn compose_keeps_small_composites() {
    let a = AngleAxis::new(0.3, Vec3::up());
    let b = AngleAxis::new(-0.2995, Vec3::up());
    let c = a.compose(&b);
    let v = Vec3::new(2.0, 3.0, 4.0);

    approx::assert_relative_eq!(c.angle * c.axis.z, 0.0005, epsilon = 1e-12);
    approx::assert_relative_eq!(c.rotate(v), b.rotate(a.rotate(v)), epsilon = 1e-12);
}

#[test]
fn compose_accumulates_tiny_steps() {
    let step = AngleAxis::new(1e-4, Vec3::up());
    let total = (0..1000).fold(AngleAxis::identity(), |acc, _| acc.compose(&step));
    let v = Vec3::new(2.0, 3.0, 4.0);

    approx::assert_relative_eq!(total.angle * total.axis.z, 0.1, epsilon = 1e-9);
    approx::assert_relative_eq!(total.rotate(v), AngleAxis::new(0.1, Vec3::up()).rotate(v), epsilon = 1e-9);
}

#[test]
fn rotate_from_to_keeps_length() {
    let from = Vec3::new(1.0, 2.0, 2.0);
    let to = Vec3::new(0.0, -5.0, 0.0);
    let r = AngleAxis::rotate_from_to(from, to);
    approx::assert_relative_eq!(r.rotate(from), to.with_len(3.0), epsilon = 1e-12);
}

#[test]
fn cast_between_precisions() {
    let r = AngleAxis::new(1.2_f64, Vec3::new(0.3, -0.5, 0.8));
    let narrow: AngleAxis<f32> = r.cast();
    let v = Vec3::new(2.0, 3.0, 4.0);
    let wide = narrow.rotate(v.cast()).cast::<f64>();
    approx::assert_relative_eq!(wide, r.rotate(v), epsilon = 1e-5);
}
