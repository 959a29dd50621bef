use approx::assert_relative_eq;

use rotators::{
    AngleAxis,
    QuaternionRotation,
    RotationError,
    RotationMatrix,
    Rotator,
    Vec3,
};

const ANGLE: f64 = 2.0943951;

fn scenario_axis() -> Vec3<f64> {
    Vec3::new(1.0, 1.0, 1.0)
}

fn scenario_vec() -> Vec3<f64> {
    Vec3::new(2.0, 3.0, 4.0)
}

fn samples() -> Vec<Vec3<f64>> {
    vec![
        scenario_vec(),
        Vec3::new(-1.0, 0.5, 0.25),
        Vec3::new(0.0, 0.0, -3.0),
        Vec3::new(10.0, -7.0, 2.0),
    ]
}

fn assert_identity_action<R: Rotator<f64>>(rot: &R) {
    for v in samples() {
        assert_relative_eq!(rot.rotate(v), v, epsilon = 1e-9);
    }
}

fn assert_same_action<R: Rotator<f64>>(a: &R, b: &R) {
    for v in samples() {
        assert_relative_eq!(a.rotate(v), b.rotate(v), epsilon = 1e-9);
    }
}

fn assert_contract<R: Rotator<f64>>(rot: R) {
    let id = R::identity();
    assert_identity_action(&id);

    assert_same_action(&rot.compose(&id), &rot);
    assert_same_action(&id.compose(&rot), &rot);
    assert_identity_action(&rot.inverse().compose(&rot));
    assert_identity_action(&rot.compose(&rot.inverse()));

    for v in samples() {
        assert_relative_eq!(rot.unrotate(rot.rotate(v)), v, epsilon = 1e-9);
        assert_relative_eq!(rot.normalized().rotate(v).len(), v.len(), epsilon = 1e-9);
    }
}

fn assert_arc<R: Rotator<f64>>(from: Vec3<f64>, to: Vec3<f64>) {
    let r = R::rotate_from_to(from, to);
    let image = r.rotate(from);
    assert_relative_eq!(image.len(), from.len(), epsilon = 1e-9);
    assert_relative_eq!(image, to.with_len(from.len()), epsilon = 1e-9);
}

#[test]
fn representations_agree_on_scenario() {
    let aa = AngleAxis::new(ANGLE, scenario_axis());
    let mat = RotationMatrix::from(aa);
    let quat = QuaternionRotation::from(aa);

    for v in samples() {
        assert_relative_eq!(aa.rotate(v), mat.rotate(v), epsilon = 1e-10);
        assert_relative_eq!(aa.rotate(v), quat.rotate(v), epsilon = 1e-10);
    }
}

#[test]
fn normalized_scenario_cycles_components() {
    let aa = AngleAxis::new(ANGLE, scenario_axis()).normalized();
    let image = aa.rotate(scenario_vec());

    assert_relative_eq!(image, Vec3::new(4.0, 2.0, 3.0), epsilon = 1e-6);
    assert_relative_eq!(image.len_sq(), 29.0, epsilon = 1e-9);

    let quat = QuaternionRotation::from(aa);
    assert_relative_eq!(quat.rotate(scenario_vec()).len_sq(), 29.0, epsilon = 1e-9);
}

#[test]
fn raw_axis_scales_by_its_length() {
    let aa = AngleAxis::new(ANGLE, scenario_axis());
    let mat = RotationMatrix::from(aa);
    let quat = QuaternionRotation::from(aa);

    assert_relative_eq!(aa.rotate(scenario_vec()).len_sq(), 87.0, epsilon = 1e-9);
    assert_relative_eq!(mat.rotate(scenario_vec()).len_sq(), 87.0, epsilon = 1e-9);
    assert_relative_eq!(quat.rotate(scenario_vec()).len_sq(), 87.0, epsilon = 1e-9);
}

#[test]
fn unrotate_restores_scenario_vector() {
    let aa = AngleAxis::new(ANGLE, scenario_axis());
    let mat = RotationMatrix::from(aa);
    let quat = QuaternionRotation::from(aa);
    let v = scenario_vec();

    assert_relative_eq!(aa.unrotate(aa.rotate(v)), v, epsilon = 1e-9);
    assert_relative_eq!(mat.unrotate(mat.rotate(v)), v, epsilon = 1e-9);
    assert_relative_eq!(quat.unrotate(quat.rotate(v)), v, epsilon = 1e-9);
}

#[test]
fn contract_holds_for_each_representation() {
    let aa = AngleAxis::new(0.9, Vec3::new(0.2, -1.0, 0.6));
    assert_contract(aa);
    assert_contract(RotationMatrix::from(aa));
    assert_contract(QuaternionRotation::from(aa));
    assert_contract(RotationMatrix::from_euler(0.4, -0.3, 2.2));
}

#[test]
fn compose_order_matches_across_representations() {
    let a = AngleAxis::new(0.8, Vec3::up());
    let b = AngleAxis::new(-1.4, Vec3::new(1.0, 2.0, 0.0).normalized());
    let expected = |v: Vec3<f64>| b.rotate(a.rotate(v));

    let aa = a.compose(&b);
    let mat = RotationMatrix::from(a).compose(&RotationMatrix::from(b));
    let quat = QuaternionRotation::from(a).compose(&QuaternionRotation::from(b));

    for v in samples() {
        assert_relative_eq!(aa.rotate(v), expected(v), epsilon = 1e-9);
        assert_relative_eq!(mat.rotate(v), expected(v), epsilon = 1e-9);
        assert_relative_eq!(quat.rotate(v), expected(v), epsilon = 1e-9);
    }
}

#[test]
fn nearly_cancelling_compose_matches_across_representations() {
    let axis = Vec3::new(1.0, 2.0, -1.0).normalized();
    let a = AngleAxis::new(0.7, axis);
    let b = AngleAxis::new(-0.6999, axis);
    let expected = |v: Vec3<f64>| b.rotate(a.rotate(v));

    let aa = a.compose(&b);
    let mat = RotationMatrix::from(a).compose(&RotationMatrix::from(b));
    let quat = QuaternionRotation::from(a).compose(&QuaternionRotation::from(b));

    assert_relative_eq!(aa.axis * aa.angle, axis * 1e-4, epsilon = 1e-12);
    for v in samples() {
        assert_relative_eq!(aa.rotate(v), expected(v), epsilon = 1e-12);
        assert_relative_eq!(mat.rotate(v), expected(v), epsilon = 1e-12);
        assert_relative_eq!(quat.rotate(v), expected(v), epsilon = 1e-12);
        assert_relative_eq!(aa.rotate(v), quat.rotate(v), epsilon = 1e-12);
    }
}

#[test]
fn full_turn_quaternion_has_no_axis() {
    let full = QuaternionRotation::new(-1.0, 0.0, 0.0, 0.0);
    assert_eq!(
        full.try_angle_axis(),
        Err(RotationError::SingularConversion("QuaternionRotation::to_angle_axis")),
    );
    assert_identity_action(&full.to_angle_axis());

    let turned = QuaternionRotation::from_angle_axis(2.0 * std::f64::consts::PI, Vec3::up());
    assert!(turned.try_angle_axis().is_err());
    assert_identity_action(&turned);
    assert_identity_action(&turned.to_angle_axis());
}

#[test]
fn conversions_round_trip() {
    let axis = Vec3::new(0.3, -0.8, 1.5);
    for &angle in [0.2, 1.0, 2.0, 3.0].iter() {
        let aa = AngleAxis::new(angle, axis);

        let via_matrix = RotationMatrix::from(aa).to_angle_axis();
        assert_relative_eq!(via_matrix.axis * via_matrix.angle, axis * angle, epsilon = 1e-9);

        let via_quat = QuaternionRotation::from(aa).to_angle_axis();
        assert_relative_eq!(via_quat.axis * via_quat.angle, axis * angle, epsilon = 1e-9);
    }
}

#[test]
fn matrix_and_quaternion_convert_into_each_other() {
    let aa = AngleAxis::new(1.7, Vec3::new(-2.0, 0.5, 1.0).normalized());
    let mat = RotationMatrix::from(aa);
    let quat = QuaternionRotation::from(mat);
    let back = RotationMatrix::from(quat);

    for v in samples() {
        assert_relative_eq!(quat.rotate(v), mat.rotate(v), epsilon = 1e-9);
        assert_relative_eq!(back.rotate(v), mat.rotate(v), epsilon = 1e-9);
    }
}

#[test]
fn rotate_from_to_reaches_target() {
    let pairs = [
        (Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, 2.0)),
        (Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 5.0, 0.0)),
        (Vec3::new(1.0, 1.0, 0.0), Vec3::new(-2.0, -2.0, 0.0)),
        (Vec3::new(3.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
    ];
    for (from, to) in pairs.iter() {
        assert_arc::<AngleAxis<f64>>(*from, *to);
        assert_arc::<RotationMatrix<f64>>(*from, *to);
        assert_arc::<QuaternionRotation<f64>>(*from, *to);
    }
}

#[test]
fn rotate_from_to_degenerate_inputs() {
    let v = Vec3::new(1.0, 2.0, 3.0);

    assert_identity_action(&AngleAxis::rotate_from_to(Vec3::zero(), v));
    assert_identity_action(&RotationMatrix::rotate_from_to(v, v * 2.0));
    assert_identity_action(&QuaternionRotation::rotate_from_to(v, Vec3::zero()));

    assert_eq!(
        QuaternionRotation::try_rotate_from_to(Vec3::zero(), v),
        Err(RotationError::DegenerateAxis("rotate_from_to")),
    );
    assert!(RotationMatrix::try_rotate_from_to(v, Vec3::up()).is_ok());
}

#[test]
fn single_precision_matches_double() {
    let aa = AngleAxis::new(ANGLE, scenario_axis()).normalized();
    let narrow: QuaternionRotation<f32> = QuaternionRotation::from(aa).cast();
    let image = narrow.rotate(scenario_vec().cast()).cast::<f64>();
    assert_relative_eq!(image, Vec3::new(4.0, 2.0, 3.0), epsilon = 1e-4);
}
