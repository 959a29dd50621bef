use std::ops::{Neg, Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, Index, IndexMut};
use std::fmt;

use crate::scalar::{cast, Scalar};

/// A complex number `re + im·i`. Two of these make up a quaternion.
#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Complex<S> {
    pub re: S,
    pub im: S,
}
impl<S: Scalar> Complex<S> {
    pub fn new(re: S, im: S) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self::new(S::zero(), S::zero())
    }

    pub fn real(&self) -> S {
        self.re
    }

    pub fn imaginary(&self) -> S {
        self.im
    }

    pub fn len_sq(&self) -> S {
        self.re*self.re + self.im*self.im
    }

    pub fn len(&self) -> S {
        self.len_sq().sqrt()
    }

    /// Argument in (-pi, pi]; zero for the zero number.
    pub fn arg(&self) -> S {
        self.im.atan2(self.re)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    pub fn scale(&self, s: S) -> Self {
        Self::new(self.re * s, self.im * s)
    }

    pub fn normalized(&self) -> Self {
        if self.len_sq() == S::zero() {
            return *self;
        }
        self.scale(S::one() / self.len())
    }

    pub fn cast<T: Scalar>(&self) -> Complex<T> {
        Complex::new(cast(self.re), cast(self.im))
    }

    fn nan() -> Self {
        Self::new(S::nan(), S::nan())
    }
}

impl<S: Scalar> Neg for Complex<S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl<S: Scalar> Add for Complex<S> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.re + other.re, self.im + other.im)
    }
}

impl<S: Scalar> Add<S> for Complex<S> {
    type Output = Self;

    fn add(self, other: S) -> Self::Output {
        Self::new(self.re + other, self.im)
    }
}

impl<S: Scalar> AddAssign for Complex<S> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<S: Scalar> Sub for Complex<S> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.re - other.re, self.im - other.im)
    }
}

impl<S: Scalar> Sub<S> for Complex<S> {
    type Output = Self;

    fn sub(self, other: S) -> Self::Output {
        Self::new(self.re - other, self.im)
    }
}

impl<S: Scalar> SubAssign for Complex<S> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<S: Scalar> Mul for Complex<S> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl<S: Scalar> Mul<S> for Complex<S> {
    type Output = Self;

    fn mul(self, other: S) -> Self::Output {
        self.scale(other)
    }
}

impl<S: Scalar> MulAssign for Complex<S> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<S: Scalar> Div<S> for Complex<S> {
    type Output = Self;

    fn div(self, other: S) -> Self::Output {
        if other == S::zero() {
            return Self::nan();
        }
        Self::new(self.re / other, self.im / other)
    }
}

impl<S: Scalar> Div for Complex<S> {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        if other.len_sq() == S::zero() {
            return Self::nan();
        }
        self * (other.conjugate() / other.len_sq())
    }
}

impl<S> Index<isize> for Complex<S> {
    type Output = S;

    fn index(&self, i: isize) -> &S {
        match i.rem_euclid(2) {
            0 => &self.re,
            _ => &self.im,
        }
    }
}

impl<S> IndexMut<isize> for Complex<S> {
    fn index_mut(&mut self, i: isize) -> &mut S {
        match i.rem_euclid(2) {
            0 => &mut self.re,
            _ => &mut self.im,
        }
    }
}

impl<S: Scalar> fmt::Display for Complex<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < S::zero() {
            write!(f, "{} - {}i", self.re, -self.im)
        }
        else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}


#[test]
fn multiply_and_divide() {
    let a = Complex::new(1.0_f64, 2.0);
    let b = Complex::new(3.0, -1.0);
    assert_eq!(a * b, Complex::new(5.0, 5.0));

    let q = (a * b) / b;
    assert!((q.re - 1.0).abs() < 1e-12);
    assert!((q.im - 2.0).abs() < 1e-12);
}

#[test]
fn divide_by_zero_is_nan() {
    let a = Complex::new(1.0_f64, 2.0);
    let z = a / Complex::zero();
    assert!(z.re.is_nan() && z.im.is_nan());
    assert!((a / 0.0).re.is_nan());
}

#[test]
fn argument_and_length() {
    let z = Complex::new(-1.0, 0.0);
    assert!((z.arg() - std::f64::consts::PI).abs() < 1e-12);
    assert_eq!(Complex::<f64>::zero().arg(), 0.0);
    assert_eq!(Complex::new(3.0, 4.0).len(), 5.0);
    assert_eq!(Complex::new(3.0, 4.0).conjugate(), Complex::new(3.0, -4.0));
}

#[test]
fn display_signs() {
    assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2i");
    assert_eq!(Complex::new(1.0, 2.0).to_string(), "1 + 2i");
}
