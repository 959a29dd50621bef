//! Conversions to and from `cgmath` value types.

use crate::matrix::Mat3;
use crate::quaternion::Quaternion;
use crate::quaternion_rotation::QuaternionRotation;
use crate::scalar::Scalar;
use crate::vector::Vec3;

impl<S: Scalar> From<cgmath::Vector3<S>> for Vec3<S> {
    fn from(vec: cgmath::Vector3<S>) -> Vec3<S> {
        Vec3::new(vec.x, vec.y, vec.z)
    }
}

impl<S: Scalar> From<Vec3<S>> for cgmath::Vector3<S> {
    fn from(vec: Vec3<S>) -> cgmath::Vector3<S> {
        cgmath::Vector3 { x: vec.x, y: vec.y, z: vec.z }
    }
}

impl<S: Scalar> From<cgmath::Quaternion<S>> for Quaternion<S> {
    fn from(quat: cgmath::Quaternion<S>) -> Quaternion<S> {
        Quaternion::from_sv(quat.s, quat.v.into())
    }
}

impl<S: Scalar> From<Quaternion<S>> for cgmath::Quaternion<S> {
    fn from(quat: Quaternion<S>) -> cgmath::Quaternion<S> {
        cgmath::Quaternion { s: quat.s, v: quat.v.into() }
    }
}

impl<S: Scalar> From<QuaternionRotation<S>> for cgmath::Quaternion<S> {
    fn from(rot: QuaternionRotation<S>) -> cgmath::Quaternion<S> {
        rot.quaternion().into()
    }
}

impl<S: Scalar> From<cgmath::Matrix3<S>> for Mat3<S> {
    /// Both store columns, so this is a field-for-field copy.
    fn from(mat: cgmath::Matrix3<S>) -> Mat3<S> {
        Mat3::from_cols(mat.x.into(), mat.y.into(), mat.z.into())
    }
}

impl<S: Scalar> From<Mat3<S>> for cgmath::Matrix3<S> {
    fn from(mat: Mat3<S>) -> cgmath::Matrix3<S> {
        cgmath::Matrix3 { x: mat.c0.into(), y: mat.c1.into(), z: mat.c2.into() }
    }
}


#[test]
fn quaternion_agrees_with_cgmath() {
    use cgmath::{InnerSpace, Rotation3};

    let axis = cgmath::Vector3::new(1.0, -2.0, 0.5).normalize();
    let reference = cgmath::Quaternion::from_axis_angle(axis, cgmath::Rad(1.1));
    let ours_axis: Vec3<f64> = axis.into();
    let ours = QuaternionRotation::from_angle_axis(1.1, ours_axis);

    approx::assert_relative_eq!(Quaternion::from(reference), ours.quaternion(), epsilon = 1e-12);

    let v = cgmath::Vector3::new(2.0, 3.0, 4.0);
    let expected: Vec3<f64> = (reference * v).into();
    approx::assert_relative_eq!(ours * Vec3::from(v), expected, epsilon = 1e-12);
}

#[test]
fn matrix_agrees_with_cgmath() {
    use crate::rotation_matrix::RotationMatrix;
    use crate::rotator::Rotator;

    let (roll, pitch, yaw) = (0.2, 0.7, -1.4);
    let reference = cgmath::Matrix3::from_angle_z(cgmath::Rad(yaw))
        * cgmath::Matrix3::from_angle_y(cgmath::Rad(pitch))
        * cgmath::Matrix3::from_angle_x(cgmath::Rad(roll));
    let ours = RotationMatrix::from_euler(roll, pitch, yaw);

    approx::assert_relative_eq!(Mat3::from(reference), ours.matrix, epsilon = 1e-12);

    let back: cgmath::Matrix3<f64> = ours.inverse().matrix.into();
    approx::assert_relative_eq!(back * reference, cgmath::Matrix3::from_scale(1.0), epsilon = 1e-12);
}
