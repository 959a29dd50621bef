use std::ops::{Mul, Div};
use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::scalar::Scalar;
use crate::vector::Vec3;

/// Column-major 3 x 3 matrix.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Mat3<S> {
    pub c0: Vec3<S>,
    pub c1: Vec3<S>,
    pub c2: Vec3<S>,
}
impl<S: Scalar> Mat3<S> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c0r0: S, c0r1: S, c0r2: S,
        c1r0: S, c1r1: S, c1r2: S,
        c2r0: S, c2r1: S, c2r2: S,
    ) -> Self {
        Self::from_cols(
            Vec3::new(c0r0, c0r1, c0r2),
            Vec3::new(c1r0, c1r1, c1r2),
            Vec3::new(c2r0, c2r1, c2r2),
        )
    }

    pub fn from_cols(c0: Vec3<S>, c1: Vec3<S>, c2: Vec3<S>) -> Self {
        Self { c0, c1, c2 }
    }

    pub fn from_rows(r0: Vec3<S>, r1: Vec3<S>, r2: Vec3<S>) -> Self {
        Self::from_cols(r0, r1, r2).transpose()
    }

    pub fn identity() -> Self {
        Self::from_scale(S::one())
    }

    pub fn zero() -> Self {
        Self::from_scale(S::zero())
    }

    pub fn from_scale(s: S) -> Self {
        Self::from_nonuniform_scale(s, s, s)
    }

    pub fn from_nonuniform_scale(s1: S, s2: S, s3: S) -> Self {
        let o = S::zero();
        Self::new(
            s1, o, o,
            o, s2, o,
            o, o, s3,
        )
    }

    /// Column `i`, wrapping like vector indexing.
    pub fn col(&self, i: isize) -> Vec3<S> {
        match i.rem_euclid(3) {
            0 => self.c0,
            1 => self.c1,
            _ => self.c2,
        }
    }

    /// Row `i`, wrapping like vector indexing.
    pub fn row(&self, i: isize) -> Vec3<S> {
        Vec3::new(self.c0[i], self.c1[i], self.c2[i])
    }

    /// Element at `row`, `col`.
    pub fn get(&self, row: isize, col: isize) -> S {
        self.col(col)[row]
    }

    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    pub fn scale(&self, s: S) -> Self {
        Self::from_cols(self.c0 * s, self.c1 * s, self.c2 * s)
    }

    pub fn cast<T: Scalar>(&self) -> Mat3<T> {
        Mat3::from_cols(self.c0.cast(), self.c1.cast(), self.c2.cast())
    }
}

impl<S: Scalar> From<[[S; 3]; 3]> for Mat3<S> {
    /// Each inner array is a column.
    fn from(mat: [[S; 3]; 3]) -> Mat3<S> {
        Self::from_cols(mat[0].into(), mat[1].into(), mat[2].into())
    }
}

impl<S: Scalar> From<Mat3<S>> for [[S; 3]; 3] {
    fn from(mat: Mat3<S>) -> [[S; 3]; 3] {
        [mat.c0.into(), mat.c1.into(), mat.c2.into()]
    }
}

impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;

    fn mul(self, vec: Vec3<S>) -> Self::Output {
        self.c0 * vec.x + self.c1 * vec.y + self.c2 * vec.z
    }
}

impl<S: Scalar> Mul for Mat3<S> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        let v0 = self * other.c0;
        let v1 = self * other.c1;
        let v2 = self * other.c2;

        Mat3::from_cols(v0, v1, v2)
    }
}

impl<S: Scalar> Mul<S> for Mat3<S> {
    type Output = Self;

    fn mul(self, other: S) -> Self::Output {
        self.scale(other)
    }
}

impl<S: Scalar> Div<S> for Mat3<S> {
    type Output = Self;

    /// Division by zero gives a matrix of NaNs.
    fn div(self, other: S) -> Self::Output {
        Self::from_cols(self.c0 / other, self.c1 / other, self.c2 / other)
    }
}

impl<S: Scalar> AbsDiffEq for Mat3<S> {
    type Epsilon = S;

    fn default_epsilon() -> S {
        S::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: S) -> bool {
        self.c0.abs_diff_eq(&other.c0, epsilon)
            && self.c1.abs_diff_eq(&other.c1, epsilon)
            && self.c2.abs_diff_eq(&other.c2, epsilon)
    }
}

impl<S: Scalar> RelativeEq for Mat3<S> {
    fn default_max_relative() -> S {
        S::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: S, max_relative: S) -> bool {
        self.c0.relative_eq(&other.c0, epsilon, max_relative)
            && self.c1.relative_eq(&other.c1, epsilon, max_relative)
            && self.c2.relative_eq(&other.c2, epsilon, max_relative)
    }
}

impl<S: Scalar> fmt::Display for Mat3<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..3 {
            writeln!(f, "{}", self.row(i))?;
        }
        Ok(())
    }
}


#[test]
fn mat_multiply() {
    let mat1 = Mat3::new(
        1.0, 5.0, 9.0,
        2.0, 6.0, 1.0,
        3.0, 7.0, 2.0,
    );
    let mat2 = Mat3::new(
        10.0, 14.0, 18.0,
        11.0, 15.0, 19.0,
        12.0, 16.0, 10.0,
    );
    let res = mat1 * mat2;

    assert!(res == Mat3::new(
        92.0, 260.0, 140.0,
        98.0, 278.0, 152.0,
        74.0, 226.0, 144.0,
    ));
}

#[test]
fn rows_and_columns() {
    let m = Mat3::from_rows(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(4.0, 5.0, 6.0),
        Vec3::new(7.0, 8.0, 9.0),
    );
    assert_eq!(m.get(0, 2), 3.0);
    assert_eq!(m.get(2, 0), 7.0);
    assert_eq!(m.col(1), Vec3::new(2.0, 5.0, 8.0));
    assert_eq!(m.transpose().row(1), Vec3::new(2.0, 5.0, 8.0));
    assert_eq!(m * Vec3::new(1.0, 0.0, -1.0), Vec3::new(-2.0, -2.0, -2.0));
}

#[test]
fn array_round_trip_is_column_major() {
    let arr = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
    let m = Mat3::from(arr);
    assert_eq!(m.c1, Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(<[[f64; 3]; 3]>::from(m), arr);
}
