use std::ops::{Neg, Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Index, IndexMut};
use std::iter::Sum;
use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::scalar::{cast, Scalar};

#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Vec3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}
impl<S: Scalar> Vec3<S> {
    pub fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }

    /// All three components set to `n`.
    pub fn splat(n: S) -> Self {
        Self::new(n, n, n)
    }

    pub fn zero() -> Self {
        Self::splat(S::zero())
    }

    pub fn up() -> Self {
        Self::new(S::zero(), S::zero(), S::one())
    }

    pub fn down() -> Self {
        -Self::up()
    }

    pub fn right() -> Self {
        Self::new(S::one(), S::zero(), S::zero())
    }

    pub fn left() -> Self {
        -Self::right()
    }

    pub fn forward() -> Self {
        Self::new(S::zero(), S::one(), S::zero())
    }

    pub fn backward() -> Self {
        -Self::forward()
    }

    pub fn len(&self) -> S {
        self.len_sq().sqrt()
    }

    pub fn len_sq(&self) -> S {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn dot(&self, vec: Vec3<S>) -> S {
        self.x*vec.x + self.y*vec.y + self.z*vec.z
    }

    pub fn cross(&self, vec: Vec3<S>) -> Self {
        Self::new(
            self.y*vec.z - self.z*vec.y,
            self.z*vec.x - self.x*vec.z,
            self.x*vec.y - self.y*vec.x,
        )
    }

    pub fn scale(&self, s: S) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalized(&self) -> Self {
        if self.len_sq() == S::zero() {
            return *self;
        }
        self.scale(S::one() / self.len())
    }

    /// Same direction, length `len`.
    pub fn with_len(&self, len: S) -> Self {
        self.scale(len / self.len())
    }

    /// Shortens the vector to `max` if it is longer.
    pub fn clamp(&self, max: S) -> Self {
        if self.len_sq() > max * max {
            self.with_len(max)
        }
        else {
            *self
        }
    }

    /// Unsigned angle between the two directions, in [0, pi].
    pub fn angle_to(&self, vec: Vec3<S>) -> S {
        let dot = self.normalized().dot(vec.normalized());
        dot.max(-S::one()).min(S::one()).acos()
    }

    pub fn cast<T: Scalar>(&self) -> Vec3<T> {
        Vec3::new(cast(self.x), cast(self.y), cast(self.z))
    }
}

impl<S: Scalar> Neg for Vec3<S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<S: Scalar> Add for Vec3<S> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<S: Scalar> AddAssign for Vec3<S> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<S: Scalar> Sub for Vec3<S> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<S: Scalar> SubAssign for Vec3<S> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<S: Scalar> Mul<S> for Vec3<S> {
    type Output = Self;

    fn mul(self, other: S) -> Self::Output {
        self.scale(other)
    }
}

impl<S: Scalar> MulAssign<S> for Vec3<S> {
    fn mul_assign(&mut self, other: S) {
        *self = self.scale(other);
    }
}

impl<S: Scalar> Div<S> for Vec3<S> {
    type Output = Self;

    /// Division by zero gives a vector of NaNs.
    fn div(self, other: S) -> Self::Output {
        if other == S::zero() {
            return Self::splat(S::nan());
        }
        self.scale(S::one() / other)
    }
}

impl<S: Scalar> DivAssign<S> for Vec3<S> {
    fn div_assign(&mut self, other: S) {
        *self = *self / other;
    }
}

impl<S> Index<isize> for Vec3<S> {
    type Output = S;

    /// Out of range indices wrap around, so `v[-1]` is `z` and `v[3]` is `x`.
    fn index(&self, i: isize) -> &S {
        match i.rem_euclid(3) {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}

impl<S> IndexMut<isize> for Vec3<S> {
    fn index_mut(&mut self, i: isize) -> &mut S {
        match i.rem_euclid(3) {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }
}

impl<S: Scalar> From<[S; 3]> for Vec3<S> {
    fn from(arr: [S; 3]) -> Vec3<S> {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}

impl<S: Scalar> From<Vec3<S>> for [S; 3] {
    fn from(vec: Vec3<S>) -> [S; 3] {
        [vec.x, vec.y, vec.z]
    }
}

impl<S: Scalar> From<Vec2<S>> for Vec3<S> {
    fn from(vec: Vec2<S>) -> Vec3<S> {
        Vec3::new(vec.x, vec.y, S::zero())
    }
}

impl<'a, S: Scalar> Sum<&'a Vec3<S>> for Vec3<S> {
    fn sum<I>(iter: I) -> Self where I: Iterator<Item = &'a Self> {
        iter.fold(Vec3::zero(), |acc, vec| acc + *vec)
    }
}

impl<S: Scalar> AbsDiffEq for Vec3<S> {
    type Epsilon = S;

    fn default_epsilon() -> S {
        S::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: S) -> bool {
        S::abs_diff_eq(&self.x, &other.x, epsilon)
            && S::abs_diff_eq(&self.y, &other.y, epsilon)
            && S::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl<S: Scalar> RelativeEq for Vec3<S> {
    fn default_max_relative() -> S {
        S::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: S, max_relative: S) -> bool {
        S::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && S::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && S::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl<S: fmt::Display> fmt::Display for Vec3<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}


#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Vec2<S> {
    pub x: S,
    pub y: S,
}
impl<S: Scalar> Vec2<S> {
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    pub fn splat(n: S) -> Self {
        Self::new(n, n)
    }

    pub fn zero() -> Self {
        Self::splat(S::zero())
    }

    pub fn right() -> Self {
        Self::new(S::one(), S::zero())
    }

    pub fn left() -> Self {
        -Self::right()
    }

    pub fn forward() -> Self {
        Self::new(S::zero(), S::one())
    }

    pub fn backward() -> Self {
        -Self::forward()
    }

    pub fn len(&self) -> S {
        self.len_sq().sqrt()
    }

    pub fn len_sq(&self) -> S {
        self.x*self.x + self.y*self.y
    }

    pub fn dot(&self, vec: Vec2<S>) -> S {
        self.x*vec.x + self.y*vec.y
    }

    /// z component of the 3D cross product.
    pub fn cross(&self, vec: Vec2<S>) -> S {
        self.x*vec.y - self.y*vec.x
    }

    pub fn scale(&self, s: S) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    pub fn normalized(&self) -> Self {
        if self.len_sq() == S::zero() {
            return *self;
        }
        self.scale(S::one() / self.len())
    }

    pub fn with_len(&self, len: S) -> Self {
        self.scale(len / self.len())
    }

    pub fn clamp(&self, max: S) -> Self {
        if self.len_sq() > max * max {
            self.with_len(max)
        }
        else {
            *self
        }
    }

    pub fn angle_to(&self, vec: Vec2<S>) -> S {
        let dot = self.normalized().dot(vec.normalized());
        dot.max(-S::one()).min(S::one()).acos()
    }

    pub fn cast<T: Scalar>(&self) -> Vec2<T> {
        Vec2::new(cast(self.x), cast(self.y))
    }
}

impl<S: Scalar> Neg for Vec2<S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<S: Scalar> Add for Vec2<S> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<S: Scalar> AddAssign for Vec2<S> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<S: Scalar> Sub for Vec2<S> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<S: Scalar> SubAssign for Vec2<S> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<S: Scalar> Mul<S> for Vec2<S> {
    type Output = Self;

    fn mul(self, other: S) -> Self::Output {
        self.scale(other)
    }
}

impl<S: Scalar> Div<S> for Vec2<S> {
    type Output = Self;

    fn div(self, other: S) -> Self::Output {
        if other == S::zero() {
            return Self::splat(S::nan());
        }
        self.scale(S::one() / other)
    }
}

impl<S> Index<isize> for Vec2<S> {
    type Output = S;

    fn index(&self, i: isize) -> &S {
        match i.rem_euclid(2) {
            0 => &self.x,
            _ => &self.y,
        }
    }
}

impl<S> IndexMut<isize> for Vec2<S> {
    fn index_mut(&mut self, i: isize) -> &mut S {
        match i.rem_euclid(2) {
            0 => &mut self.x,
            _ => &mut self.y,
        }
    }
}

impl<S: Scalar> From<[S; 2]> for Vec2<S> {
    fn from(arr: [S; 2]) -> Vec2<S> {
        Vec2::new(arr[0], arr[1])
    }
}

impl<S: fmt::Display> fmt::Display for Vec2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}


#[test]
fn cross_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let cross = v.cross(v2);
    assert!(cross == Vec3::new(-45.0, 0.0, 30.0));
}

#[test]
fn dot_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let dot = v.dot(v2);
    assert!(dot == 53.0);
}

#[test]
fn index_wraps_around() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v[0], 1.0);
    assert_eq!(v[3], 1.0);
    assert_eq!(v[-1], 3.0);
    assert_eq!(v[-5], 2.0);

    v[4] = 7.0;
    assert_eq!(v.y, 7.0);

    let w = Vec2::new(5.0, 6.0);
    assert_eq!(w[-1], 6.0);
    assert_eq!(w[2], 5.0);
}

#[test]
fn division_by_zero_is_nan() {
    let v = Vec3::new(1.0_f64, 2.0, 3.0) / 0.0;
    assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());

    let w = Vec2::new(1.0_f32, 2.0) / 0.0;
    assert!(w.x.is_nan() && w.y.is_nan());
}

#[test]
fn normalized_keeps_zero() {
    assert_eq!(Vec3::<f64>::zero().normalized(), Vec3::zero());

    let n = Vec3::new(3.0, 0.0, 4.0).normalized();
    approx::assert_relative_eq!(n, Vec3::new(0.6, 0.0, 0.8));
}

#[test]
fn with_len_and_clamp() {
    let v = Vec3::new(0.0, 3.0, 4.0);
    approx::assert_relative_eq!(v.with_len(10.0), Vec3::new(0.0, 6.0, 8.0));
    approx::assert_relative_eq!(v.clamp(1.0).len(), 1.0);
    assert_eq!(v.clamp(6.0), v);
}

#[test]
fn angle_between_vectors() {
    let x = Vec3::<f64>::right();
    let y = Vec3::forward();
    approx::assert_relative_eq!(x.angle_to(y), std::f64::consts::FRAC_PI_2);
    assert_eq!(x.angle_to(x * 2.0), 0.0);
    approx::assert_relative_eq!(x.angle_to(-x), std::f64::consts::PI);

    let a = Vec2::new(1.0, 0.0);
    let b = Vec2::new(1.0, 1.0);
    approx::assert_relative_eq!(a.angle_to(b), std::f64::consts::FRAC_PI_4);
    assert_eq!(a.cross(b), 1.0);
}

#[test]
fn compound_assignment() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    v += Vec3::splat(1.0);
    v -= Vec3::new(0.0, 1.0, 2.0);
    v *= 2.0;
    v /= 4.0;
    assert_eq!(v, Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn lift_2d_to_3d() {
    let v: Vec3<f32> = Vec2::new(1.0, 2.0).into();
    assert_eq!(v, Vec3::new(1.0, 2.0, 0.0));
}
