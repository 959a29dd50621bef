use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use num_traits::{Float, FloatConst, NumCast};

/// Floating point type every vector, quaternion and rotator is generic over.
pub trait Scalar:
    Float
    + FloatConst
    + Default
    + fmt::Debug
    + fmt::Display
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + Send
    + Sync
    + 'static
{
    /// Squared length, relative to the squared scale of a matrix, below which
    /// an eigen-extraction probe row counts as zero.
    fn probe_threshold() -> Self {
        cast(1e-6_f64)
    }
}

impl Scalar for f32 {}
impl Scalar for f64 {}

/// Convert between float precisions. A value the target can't hold becomes NaN.
pub fn cast<F: NumCast, T: Scalar>(n: F) -> T {
    <T as NumCast>::from(n).unwrap_or_else(T::nan)
}

pub(crate) fn two<S: Scalar>() -> S {
    S::one() + S::one()
}


#[test]
fn cast_widens_and_narrows() {
    let x: f64 = cast(0.1_f32);
    assert!((x - 0.1).abs() < 1e-7);

    let y: f32 = cast(std::f64::consts::PI);
    assert_eq!(y, std::f32::consts::PI);
}
