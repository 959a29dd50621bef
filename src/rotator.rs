use crate::error::{RotationError, RotationResult};
use crate::scalar::Scalar;
use crate::vector::Vec3;

/// Capabilities shared by every rotation representation.
///
/// Composition order is the same for all implementors: `a.compose(&b)`
/// applies `a` first, then `b`, so
/// `a.compose(&b).rotate(v) == b.rotate(a.rotate(v))`.
pub trait Rotator<S: Scalar>: Copy + Sized {
    /// The rotation that leaves every vector unchanged.
    fn identity() -> Self;

    fn rotate(&self, vec: Vec3<S>) -> Vec3<S>;

    fn unrotate(&self, vec: Vec3<S>) -> Vec3<S> {
        self.inverse().rotate(vec)
    }

    fn compose(&self, other: &Self) -> Self;

    fn inverse(&self) -> Self;

    /// The nearest rotation of unit scale.
    fn normalized(&self) -> Self;

    /// Shortest-arc rotation taking the direction of `from` onto the
    /// direction of `to`. Lengths are kept: the result has unit scale.
    ///
    /// Zero-length or parallel inputs give the identity. Opposite inputs
    /// give a half turn about an axis perpendicular to `from`.
    fn rotate_from_to(from: Vec3<S>, to: Vec3<S>) -> Self;

    /// Like [`Rotator::rotate_from_to`] but rejects zero-length inputs.
    fn try_rotate_from_to(from: Vec3<S>, to: Vec3<S>) -> RotationResult<Self> {
        if from.len_sq() == S::zero() || to.len_sq() == S::zero() {
            return Err(RotationError::DegenerateAxis("rotate_from_to"));
        }
        Ok(Self::rotate_from_to(from, to))
    }
}

/// Angle and unit axis of the shortest arc from `from` to `to`.
pub(crate) fn shortest_arc<S: Scalar>(from: Vec3<S>, to: Vec3<S>) -> (S, Vec3<S>) {
    if from.len_sq() == S::zero() || to.len_sq() == S::zero() {
        log::debug!("rotate_from_to with a zero-length vector, using identity");
        return (S::zero(), Vec3::right());
    }
    let angle = from.angle_to(to);
    let axis = from.cross(to);

    // sin^2 of the angle between them
    if axis.len_sq() <= S::epsilon() * from.len_sq() * to.len_sq() {
        if from.dot(to) > S::zero() {
            return (S::zero(), Vec3::right());
        }
        let mut perp = from.cross(Vec3::right());
        if perp.len_sq() <= S::epsilon() * from.len_sq() {
            perp = from.cross(Vec3::forward());
        }
        log::debug!("rotate_from_to with opposite vectors, turning about {perp}");
        return (S::PI(), perp.normalized());
    }
    (angle, axis.normalized())
}


#[test]
fn arc_between_axes() {
    let (angle, axis) = shortest_arc(Vec3::right(), Vec3::forward() * 3.0);
    approx::assert_relative_eq!(angle, std::f64::consts::FRAC_PI_2);
    approx::assert_relative_eq!(axis, Vec3::up());
}

#[test]
fn arc_degenerate_inputs() {
    let (angle, _) = shortest_arc(Vec3::<f64>::zero(), Vec3::up());
    assert_eq!(angle, 0.0);

    let (angle, _) = shortest_arc(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(angle, 0.0);

    let from = Vec3::new(2.0, 0.0, 0.0);
    let (angle, axis) = shortest_arc(from, -from);
    approx::assert_relative_eq!(angle, std::f64::consts::PI);
    approx::assert_relative_eq!(axis.dot(from), 0.0);
    approx::assert_relative_eq!(axis.len(), 1.0);
}
