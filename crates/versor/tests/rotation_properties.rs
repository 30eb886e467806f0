use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use versor::{euler_to_quaternion, Quaternion, VersorError};

const TOL: f32 = 1e-5;

fn random_quaternion(rng: &mut StdRng) -> Quaternion {
    loop {
        let [x, y, z, w]: [f32; 4] = std::array::from_fn(|_| rng.random_range(-1.0..1.0));
        let q = Quaternion::new(x, y, z, w);
        // keep away from the degenerate pass-through
        if (x * x + y * y + z * z + w * w).sqrt() > 0.1 {
            return q;
        }
    }
}

fn random_quaternions(n: usize) -> Vec<Quaternion> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n).map(|_| random_quaternion(&mut rng)).collect()
}

fn assert_quat_eq(a: &Quaternion, b: &Quaternion) {
    for (u, v) in a.to_array().iter().zip(b.to_array().iter()) {
        assert_relative_eq!(*u, *v, epsilon = TOL);
    }
}

#[test]
fn composed_rotation_golden_values() {
    let q1 = Quaternion::new(0.8, 0.0, 0.0, 1.0);
    let q2 = Quaternion::new(0.11, 0.66, 0.0, 1.0);
    let q3 = q1.multiply(&q2);

    assert_relative_eq!(q3.x(), 0.590_582, epsilon = TOL);
    assert_relative_eq!(q3.y(), 0.428_334_18, epsilon = TOL);
    assert_relative_eq!(q3.z(), 0.342_667_37, epsilon = TOL);
    assert_relative_eq!(q3.w(), 0.591_879_9, epsilon = TOL);

    let p = q3.transform_point([1.0, 1.0, 1.0], true);
    assert_relative_eq!(p[0], 1.410_306, epsilon = TOL);
    assert_relative_eq!(p[1], 0.573_597_7, epsilon = TOL);
    assert_relative_eq!(p[2], 0.825_846_6, epsilon = TOL);

    let p = q3.transform_point([1.0, 2.0, 3.0], true);
    assert_relative_eq!(p[0], 3.334_185_4, epsilon = TOL);
    assert_relative_eq!(p[1], -0.169_928_26, epsilon = TOL);
    assert_relative_eq!(p[2], 1.689_477, epsilon = TOL);

    let p = q3.transform_point([1.0, 1.0, 1.0], false);
    assert_relative_eq!(p[0], 1.207_488_2, epsilon = TOL);
    assert_relative_eq!(p[1], 1.160_540_5, epsilon = TOL);
    assert_relative_eq!(p[2], 0.441_721_63, epsilon = TOL);
}

#[test]
fn euler_entry_points_agree() -> Result<(), VersorError> {
    let angles = [
        -0.645_771_8_f32,
        0.279_252_68_f32,
        -0.436_332_3_f32,
    ];
    let q4 = euler_to_quaternion(angles, "ZYX")?;
    let q5 = Quaternion::from_euler(angles, "ZYX")?;
    assert_eq!(q4, q5);
    assert!(q4.equals(&q5));

    assert_relative_eq!(q5.x(), -0.278_202_53, epsilon = TOL);
    assert_relative_eq!(q5.y(), 0.196_861_62, epsilon = TOL);
    assert_relative_eq!(q5.z(), -0.160_143_79, epsilon = TOL);
    assert_relative_eq!(q5.w(), 0.926_392_4, epsilon = TOL);
    Ok(())
}

#[test]
fn euler_missing_axis_is_an_error() {
    let _ = env_logger::builder().is_test(true).try_init();

    let angles = [0.1, 0.2, 0.3];
    assert!(matches!(
        Quaternion::from_euler(angles, "ZY"),
        Err(VersorError::InvalidSequence { .. })
    ));
    assert!(matches!(
        euler_to_quaternion(angles, "ZYQ"),
        Err(VersorError::InvalidSequence { .. })
    ));
}

#[test]
fn normalization_gives_unit_norm() {
    for q in random_quaternions(200) {
        assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn multiply_is_associative() {
    let qs = random_quaternions(90);
    for abc in qs.chunks_exact(3) {
        let (a, b, c) = (abc[0], abc[1], abc[2]);
        assert_quat_eq(&((a * b) * c), &(a * (b * c)));
    }
}

#[test]
fn multiply_is_not_commutative() -> Result<(), VersorError> {
    let a = Quaternion::from_euler([0.3, 0.0, 0.0], "XYZ")?;
    let b = Quaternion::from_euler([0.0, 0.5, 0.0], "XYZ")?;
    assert!(!(a * b).equals(&(b * a)));
    Ok(())
}

#[test]
fn identity_is_neutral() {
    let identity = Quaternion::identity();
    for q in random_quaternions(50) {
        assert_quat_eq(&(q * identity), &q);
        assert_quat_eq(&(identity * q), &q);
    }
}

#[test]
fn inverse_cancels() {
    let identity = Quaternion::identity();
    for q in random_quaternions(50) {
        assert!((q * q.inverse()).equals_eps(&identity, TOL));
        assert!((q - q).equals_eps(&identity, TOL));
    }
}

#[test]
fn equality_is_reflexive_and_double_covered() {
    for q in random_quaternions(50) {
        assert!(q.equals(&q));
        assert!(q.equals(&-q));
        assert!((-q).equals(&q));
    }
}

#[test]
fn round_trip_through_inverse_transform() {
    let mut rng = StdRng::seed_from_u64(7);
    for q in random_quaternions(50) {
        let p: [f32; 3] = std::array::from_fn(|_| rng.random_range(-10.0..10.0));
        let world = q.transform_point(p, true);
        let local = q.transform_point(world, false);
        for (u, v) in local.iter().zip(p.iter()) {
            assert_relative_eq!(*u, *v, epsilon = 1e-4);
        }
    }
}

#[test]
fn matches_glam_rotation() {
    for q in random_quaternions(50) {
        let g: glam::Quat = q.into();

        let r = q.to_rotation_matrix();
        let m = glam::Mat3::from_quat(g);
        for (i, row) in r.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                assert_relative_eq!(*value, m.col(j)[i], epsilon = TOL);
            }
        }

        let p = [0.5, -1.5, 2.0];
        let ours = q.transform_point(p, true);
        let theirs = g.mul_vec3(glam::Vec3::from_array(p));
        assert_relative_eq!(ours[0], theirs.x, epsilon = TOL);
        assert_relative_eq!(ours[1], theirs.y, epsilon = TOL);
        assert_relative_eq!(ours[2], theirs.z, epsilon = TOL);
    }
}
