//! Recovering the rotation axis of a (scaled) rotation matrix.
//!
//! For `M = e·R` with `R` a rotation, the axis is the eigenvector of `R` with
//! eigenvalue 1. Every row of `M - e·I` is perpendicular to it, so the cross
//! product of two independent rows points along the axis. The angle is read
//! off by rotating one of those rows with `M` and measuring how far it turned.

use crate::matrix::Mat3;
use crate::scalar::Scalar;
use crate::vector::Vec3;

/// Signed angle and axis of `m`, with the axis scaled to the matrix scale
/// (the length of the first column).
///
/// Returns `None` when fewer than two rows of `M - e·I` are usable, which
/// happens for the identity and rotations very close to it, and for the zero
/// matrix.
pub fn extract_angle_axis<S: Scalar>(m: &Mat3<S>) -> Option<(S, Vec3<S>)> {
    let scale = m.c0.len();
    let threshold = S::probe_threshold() * scale * scale;

    let rows = [
        m.row(0) - Vec3::right() * scale,
        m.row(1) - Vec3::forward() * scale,
        m.row(2) - Vec3::up() * scale,
    ];

    // Largest cross product among rows that aren't negligible
    let mut best: Option<(Vec3<S>, Vec3<S>)> = None;
    let mut best_len_sq = S::zero();
    for i in 0..rows.len() {
        if rows[i].len_sq() <= threshold {
            continue;
        }
        for j in i + 1..rows.len() {
            if rows[j].len_sq() <= threshold {
                continue;
            }
            let cross = rows[i].cross(rows[j]);
            if cross.len_sq() > best_len_sq {
                best_len_sq = cross.len_sq();
                best = Some((rows[i], cross));
            }
        }
    }

    let (probe, axis) = match best {
        Some(found) if best_len_sq > threshold * threshold => found,
        _ => return None,
    };
    let axis = axis.normalized();

    let rotated = *m * probe;
    let mut angle = probe.angle_to(rotated);
    if probe.cross(rotated).dot(axis) < S::zero() {
        angle = -angle;
    }
    Some((angle, axis * scale))
}


#[cfg(test)]
fn about_z(angle: f64) -> Mat3<f64> {
    let (s, c) = angle.sin_cos();
    Mat3::from_rows(
        Vec3::new(c, -s, 0.0),
        Vec3::new(s, c, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    )
}

#[test]
fn extracts_rotation_about_z() {
    let (angle, axis) = extract_angle_axis(&about_z(0.8)).unwrap();
    approx::assert_relative_eq!(angle * axis.z, 0.8, epsilon = 1e-12);
    approx::assert_relative_eq!(axis.x, 0.0, epsilon = 1e-12);
    approx::assert_relative_eq!(axis.y, 0.0, epsilon = 1e-12);
    approx::assert_relative_eq!(axis.len(), 1.0, epsilon = 1e-12);
}

#[test]
fn sign_follows_direction_of_turn() {
    let (angle, axis) = extract_angle_axis(&about_z(-1.3)).unwrap();
    approx::assert_relative_eq!(angle * axis.z, -1.3, epsilon = 1e-12);
}

#[test]
fn keeps_matrix_scale_on_axis() {
    let (angle, axis) = extract_angle_axis(&(about_z(0.5) * 2.5)).unwrap();
    approx::assert_relative_eq!(axis.len(), 2.5, epsilon = 1e-12);
    approx::assert_relative_eq!(angle * axis.z / 2.5, 0.5, epsilon = 1e-12);
}

#[test]
fn identity_and_near_identity_are_singular() {
    assert!(extract_angle_axis(&Mat3::<f64>::identity()).is_none());
    assert!(extract_angle_axis(&about_z(1e-5)).is_none());
    assert!(extract_angle_axis(&Mat3::<f64>::zero()).is_none());
}

#[test]
fn half_turn_with_parallel_rows() {
    // Half turn about (1, 1, 0): the first two rows of M - I are parallel.
    let m = Mat3::from_rows(
        Vec3::new(0.0_f64, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -1.0),
    );
    let (angle, axis) = extract_angle_axis(&m).unwrap();
    approx::assert_relative_eq!(angle.abs(), std::f64::consts::PI, epsilon = 1e-12);
    let n = Vec3::new(1.0, 1.0, 0.0).normalized();
    approx::assert_relative_eq!(axis.dot(n).abs(), 1.0, epsilon = 1e-12);
}
