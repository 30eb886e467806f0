use argh::FromArgs;
use env_logger::{Builder, Env};

use versor::{euler_to_quaternion, Quaternion};

#[derive(FromArgs)]
/// Compose two rotations, apply them to a point and build a rotation from Euler angles
struct Args {
    /// x coordinate of the point
    #[argh(option, short = 'x', default = "1.0")]
    x: f32,

    /// y coordinate of the point
    #[argh(option, short = 'y', default = "2.0")]
    y: f32,

    /// z coordinate of the point
    #[argh(option, short = 'z', default = "3.0")]
    z: f32,

    /// euler sequence, a permutation of XYZ
    #[argh(option, short = 's', default = "String::from(\"ZYX\")")]
    sequence: String,

    /// transform from world to local instead
    #[argh(switch)]
    inverse: bool,
}

// roll, pitch, yaw in radians
const EULER_ANGLES: [f32; 3] = [-0.645_771_8, 0.279_252_68, -0.436_332_3];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    let q1 = Quaternion::new(0.8, 0.0, 0.0, 1.0);
    let q2 = Quaternion::new(0.11, 0.66, 0.0, 1.0);
    let q3 = q1 * q2;
    log::info!("q1 * q2 = {q3}");

    let point = [args.x, args.y, args.z];
    let transformed = q3.transform_point(point, !args.inverse);
    log::info!("Transformed point: {point:?} -> {transformed:?}");

    let q4 = euler_to_quaternion(EULER_ANGLES, &args.sequence)?;
    let q5 = Quaternion::from_euler(EULER_ANGLES, &args.sequence)?;
    log::info!("Is {q4} equal to {q5}? {}", q4.equals(&q5));

    log::info!("Identity: {}", Quaternion::identity());

    Ok(())
}
