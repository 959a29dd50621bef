use std::ops::{Deref, Mul};
use std::fmt;

use crate::angle_axis::AngleAxis;
use crate::error::{RotationError, RotationResult};
use crate::quaternion::Quaternion;
use crate::rotation_matrix::RotationMatrix;
use crate::rotator::{shortest_arc, Rotator};
use crate::scalar::{two, Scalar};
use crate::vector::Vec3;

/// A rotation stored as a quaternion and applied with `q · v · conj(q)`.
///
/// The sandwich product scales vectors by `|q|²`, so only unit quaternions
/// are pure rotations.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuaternionRotation<S> {
    quat: Quaternion<S>,
}
impl<S: Scalar> QuaternionRotation<S> {
    pub fn from_quaternion(quat: Quaternion<S>) -> Self {
        Self { quat }
    }

    pub fn new(s: S, xi: S, yj: S, zk: S) -> Self {
        Self::from_quaternion(Quaternion::new(s, xi, yj, zk))
    }

    /// `cos(angle/2)·m + sin(angle/2)·axis/m` with `m = sqrt(|axis|)`, so that
    /// `|q|² = |axis|` and the rotation scales like [`AngleAxis::rotate`].
    /// A zero-length axis gives the zero quaternion.
    pub fn from_angle_axis(angle: S, axis: Vec3<S>) -> Self {
        let m = axis.len().sqrt();
        if m == S::zero() {
            log::debug!("quaternion rotation from a zero axis");
            return Self::from_quaternion(Quaternion::zero());
        }
        let (s, c) = (angle / two()).sin_cos();
        Self::from_quaternion(Quaternion::from_sv(c * m, axis * (s / m)))
    }

    pub fn quaternion(&self) -> Quaternion<S> {
        self.quat
    }

    /// Angle and axis with `|axis| = |q|²`. Rotations by 0 or 2π have no
    /// axis; they come back as a zero angle about `right`.
    pub fn to_angle_axis(&self) -> AngleAxis<S> {
        self.try_angle_axis().unwrap_or_else(|_| {
            log::debug!("quaternion has no rotation axis, using identity");
            AngleAxis::new(S::zero(), Vec3::right() * self.quat.len_sq())
        })
    }

    pub fn try_angle_axis(&self) -> RotationResult<AngleAxis<S>> {
        let singular = RotationError::SingularConversion("QuaternionRotation::to_angle_axis");
        let len = self.quat.len();
        if len == S::zero() {
            return Err(singular);
        }
        // |v| = |q|·sin(angle/2), s = |q|·cos(angle/2)
        let v_len = self.quat.v.len();
        if v_len <= S::epsilon() * len {
            return Err(singular);
        }
        let half_angle = v_len.atan2(self.quat.s);
        Ok(AngleAxis::new(two::<S>() * half_angle, self.quat.v * (len * len / v_len)))
    }

    pub fn cast<T: Scalar>(&self) -> QuaternionRotation<T> {
        QuaternionRotation::from_quaternion(self.quat.cast())
    }
}

impl<S> Deref for QuaternionRotation<S> {
    type Target = Quaternion<S>;

    fn deref(&self) -> &Quaternion<S> {
        &self.quat
    }
}

impl<S: Scalar> Rotator<S> for QuaternionRotation<S> {
    fn identity() -> Self {
        Self::from_quaternion(Quaternion::identity())
    }

    fn rotate(&self, vec: Vec3<S>) -> Vec3<S> {
        (self.quat * Quaternion::from_vector(vec) * self.quat.conjugate()).v
    }

    fn compose(&self, other: &Self) -> Self {
        Self::from_quaternion(other.quat * self.quat)
    }

    fn inverse(&self) -> Self {
        Self::from_quaternion(self.quat.inverse())
    }

    fn normalized(&self) -> Self {
        Self::from_quaternion(self.quat.normalized())
    }

    fn rotate_from_to(from: Vec3<S>, to: Vec3<S>) -> Self {
        let (angle, axis) = shortest_arc(from, to);
        Self::from_angle_axis(angle, axis)
    }
}

impl<S: Scalar> From<Quaternion<S>> for QuaternionRotation<S> {
    fn from(quat: Quaternion<S>) -> Self {
        Self::from_quaternion(quat)
    }
}

impl<S: Scalar> From<QuaternionRotation<S>> for Quaternion<S> {
    fn from(rot: QuaternionRotation<S>) -> Self {
        rot.quat
    }
}

impl<S: Scalar> From<AngleAxis<S>> for QuaternionRotation<S> {
    fn from(aa: AngleAxis<S>) -> Self {
        Self::from_angle_axis(aa.angle, aa.axis)
    }
}

impl<S: Scalar> From<QuaternionRotation<S>> for AngleAxis<S> {
    fn from(rot: QuaternionRotation<S>) -> Self {
        rot.to_angle_axis()
    }
}

impl<S: Scalar> From<RotationMatrix<S>> for QuaternionRotation<S> {
    fn from(rot: RotationMatrix<S>) -> Self {
        rot.to_angle_axis().into()
    }
}

impl<S: Scalar> From<QuaternionRotation<S>> for RotationMatrix<S> {
    fn from(rot: QuaternionRotation<S>) -> Self {
        rot.to_angle_axis().into()
    }
}

impl<S: Scalar> Mul<Vec3<S>> for QuaternionRotation<S> {
    type Output = Vec3<S>;

    fn mul(self, vec: Vec3<S>) -> Self::Output {
        self.rotate(vec)
    }
}

impl<S: Scalar> Mul for QuaternionRotation<S> {
    type Output = Self;

    /// Hamilton product: `a * b` applies `b`, then `a`.
    fn mul(self, other: Self) -> Self::Output {
        Self::from_quaternion(self.quat * other.quat)
    }
}

impl<S: Scalar> fmt::Display for QuaternionRotation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quat)
    }
}


#[test]
fn quarter_turn_about_up() {
    let q = QuaternionRotation::from_angle_axis(std::f64::consts::FRAC_PI_2, Vec3::up());
    approx::assert_relative_eq!(q.rotate(Vec3::right()), Vec3::forward(), epsilon = 1e-15);
    approx::assert_relative_eq!(q.len(), 1.0, epsilon = 1e-15);
}

#[test]
fn axis_length_sets_quaternion_length() {
    let q = QuaternionRotation::from_angle_axis(0.9, Vec3::new(0.0, 4.0, 0.0));
    approx::assert_relative_eq!(q.len_sq(), 4.0, epsilon = 1e-12);

    let v = Vec3::new(1.0, 2.0, 3.0);
    approx::assert_relative_eq!(q.rotate(v).len(), 4.0 * v.len(), epsilon = 1e-12);
    approx::assert_relative_eq!(q.unrotate(q.rotate(v)), v, epsilon = 1e-12);
}

#[test]
fn compose_is_hamilton_product_of_other_then_self() {
    let a = QuaternionRotation::from_angle_axis(0.4, Vec3::right());
    let b = QuaternionRotation::from_angle_axis(1.3, Vec3::up());
    assert_eq!(a.compose(&b).quaternion(), b.quaternion() * a.quaternion());
    assert_eq!(a.compose(&b), b * a);
}

#[test]
fn angle_axis_round_trip_keeps_axis_length() {
    let aa = AngleAxis::new(1.2, Vec3::new(0.6, -1.0, 1.6));
    let back = QuaternionRotation::from(aa).to_angle_axis();
    approx::assert_relative_eq!(back.angle, aa.angle, epsilon = 1e-12);
    approx::assert_relative_eq!(back.axis, aa.axis, epsilon = 1e-12);
}

#[test]
fn identity_conversion_is_singular() {
    let q = QuaternionRotation::<f64>::identity();
    assert!(matches!(q.try_angle_axis(), Err(RotationError::SingularConversion(_))));
    assert_eq!(q.to_angle_axis(), AngleAxis::new(0.0, Vec3::right()));

    let zero = QuaternionRotation::<f64>::from_quaternion(Quaternion::zero());
    assert!(zero.try_angle_axis().is_err());
    assert_eq!(zero.to_angle_axis().axis, Vec3::zero());
}

#[test]
fn zero_axis_gives_zero_quaternion() {
    let q = QuaternionRotation::from_angle_axis(2.0_f64, Vec3::zero());
    assert_eq!(q.quaternion(), Quaternion::zero());
    assert_eq!(q.rotate(Vec3::new(2.0, 3.0, 4.0)), Vec3::zero());
    assert!(q.inverse().s.is_nan());
}
