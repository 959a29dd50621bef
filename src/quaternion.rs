use std::ops::{Neg, Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, Index, IndexMut};
use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::complex::Complex;
use crate::scalar::{cast, Scalar};
use crate::vector::Vec3;

/// `s + v.x·i + v.y·j + v.z·k`, multiplied with the Hamilton product.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Quaternion<S> {
    pub s: S,
    pub v: Vec3<S>,
}
impl<S: Scalar> Quaternion<S> {
    pub fn new(s: S, xi: S, yj: S, zk: S) -> Self {
        Self {
            s,
            v: Vec3::new(xi, yj, zk),
        }
    }

    pub fn from_sv(s: S, v: Vec3<S>) -> Self {
        Self { s, v }
    }

    /// Pure quaternion `(0, v)`.
    pub fn from_vector(v: Vec3<S>) -> Self {
        Self::from_sv(S::zero(), v)
    }

    /// `z1.re + z1.im·i + z2.re·j + z2.im·k`.
    pub fn from_complex(z1: Complex<S>, z2: Complex<S>) -> Self {
        Self::new(z1.re, z1.im, z2.re, z2.im)
    }

    pub fn zero() -> Self {
        Self::from_sv(S::zero(), Vec3::zero())
    }

    pub fn identity() -> Self {
        Self::from_sv(S::one(), Vec3::zero())
    }

    pub fn complex1(&self) -> Complex<S> {
        Complex::new(self.s, self.v.x)
    }

    pub fn complex2(&self) -> Complex<S> {
        Complex::new(self.v.y, self.v.z)
    }

    pub fn len_sq(&self) -> S {
        self.s*self.s + self.v.len_sq()
    }

    pub fn len(&self) -> S {
        self.len_sq().sqrt()
    }

    pub fn conjugate(&self) -> Self {
        Self::from_sv(self.s, -self.v)
    }

    pub fn scale(&self, s: S) -> Self {
        Self::from_sv(self.s * s, self.v * s)
    }

    /// `conjugate / len_sq`; NaN for the zero quaternion.
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.len_sq()
    }

    /// The zero quaternion stays zero.
    pub fn normalized(&self) -> Self {
        if self.len_sq() == S::zero() {
            return *self;
        }
        self.scale(S::one() / self.len())
    }

    pub fn cast<T: Scalar>(&self) -> Quaternion<T> {
        Quaternion::from_sv(cast(self.s), self.v.cast())
    }
}

impl<S: Scalar> Neg for Quaternion<S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_sv(-self.s, -self.v)
    }
}

impl<S: Scalar> Add for Quaternion<S> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::from_sv(self.s + other.s, self.v + other.v)
    }
}

impl<S: Scalar> AddAssign for Quaternion<S> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<S: Scalar> Sub for Quaternion<S> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::from_sv(self.s - other.s, self.v - other.v)
    }
}

impl<S: Scalar> SubAssign for Quaternion<S> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<S: Scalar> Mul for Quaternion<S> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self::from_sv(
            self.s * other.s - self.v.dot(other.v),
            other.v * self.s + self.v * other.s + self.v.cross(other.v),
        )
    }
}

impl<S: Scalar> Mul<S> for Quaternion<S> {
    type Output = Self;

    fn mul(self, other: S) -> Self::Output {
        self.scale(other)
    }
}

impl<S: Scalar> MulAssign for Quaternion<S> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<S: Scalar> Div<S> for Quaternion<S> {
    type Output = Self;

    fn div(self, other: S) -> Self::Output {
        if other == S::zero() {
            return Self::from_sv(S::nan(), Vec3::splat(S::nan()));
        }
        self.scale(S::one() / other)
    }
}

impl<S> Index<isize> for Quaternion<S> {
    type Output = S;

    /// `[s, x, y, z]`, wrapping around outside 0..4.
    fn index(&self, i: isize) -> &S {
        match i.rem_euclid(4) {
            0 => &self.s,
            n => &self.v[n - 1],
        }
    }
}

impl<S> IndexMut<isize> for Quaternion<S> {
    fn index_mut(&mut self, i: isize) -> &mut S {
        match i.rem_euclid(4) {
            0 => &mut self.s,
            n => &mut self.v[n - 1],
        }
    }
}

impl<S: Scalar> From<[S; 4]> for Quaternion<S> {
    fn from(arr: [S; 4]) -> Quaternion<S> {
        Quaternion::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl<S: Scalar> From<Quaternion<S>> for [S; 4] {
    fn from(quat: Quaternion<S>) -> [S; 4] {
        [quat.s, quat.v.x, quat.v.y, quat.v.z]
    }
}

impl<S: Scalar> AbsDiffEq for Quaternion<S> {
    type Epsilon = S;

    fn default_epsilon() -> S {
        S::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: S) -> bool {
        S::abs_diff_eq(&self.s, &other.s, epsilon) && self.v.abs_diff_eq(&other.v, epsilon)
    }
}

impl<S: Scalar> RelativeEq for Quaternion<S> {
    fn default_max_relative() -> S {
        S::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: S, max_relative: S) -> bool {
        S::relative_eq(&self.s, &other.s, epsilon, max_relative)
            && self.v.relative_eq(&other.v, epsilon, max_relative)
    }
}

impl<S: fmt::Display> fmt::Display for Quaternion<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.s, self.v.x, self.v.y, self.v.z)
    }
}


#[test]
fn hamilton_product_units() {
    let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    assert_eq!(i * j, k);
    assert_eq!(j * i, -k);
    assert_eq!(j * k, i);
    assert_eq!(k * i, j);
    assert_eq!(i * i, Quaternion::new(-1.0, 0.0, 0.0, 0.0));
}

#[test]
fn inverse_undoes_product() {
    let q = Quaternion::new(1.0, 2.0, -1.0, 0.5);
    approx::assert_relative_eq!(q * q.inverse(), Quaternion::identity(), epsilon = 1e-12);
    approx::assert_relative_eq!(q.inverse() * q, Quaternion::identity(), epsilon = 1e-12);
}

#[test]
fn zero_inverse_is_nan() {
    let q = Quaternion::<f64>::zero().inverse();
    assert!(q.s.is_nan() && q.v.x.is_nan());
    assert_eq!(Quaternion::<f64>::zero().normalized(), Quaternion::zero());
}

#[test]
fn complex_pairs() {
    let q = Quaternion::from_complex(Complex::new(1.0, 2.0), Complex::new(3.0, 4.0));
    assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(q.complex1(), Complex::new(1.0, 2.0));
    assert_eq!(q.complex2(), Complex::new(3.0, 4.0));
}

#[test]
fn index_components() {
    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q[0], 1.0);
    assert_eq!(q[3], 4.0);
    assert_eq!(q[-1], 4.0);
    assert_eq!(q[5], 2.0);

    q[2] = 9.0;
    assert_eq!(q.v.y, 9.0);
    assert_eq!(<[f64; 4]>::from(q), [1.0, 2.0, 9.0, 4.0]);
}
