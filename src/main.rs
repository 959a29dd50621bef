use std::process;

use rotators::{
    AngleAxis,
    Config,
    QuaternionRotation,
    Representation,
    RotationMatrix,
    Rotator,
    Vec3,
};

fn main() {
    env_logger::init();

    let cfg = match Config::new(std::env::args().skip(1).collect()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    log::info!("{cfg}");

    let mut aa = AngleAxis::new(cfg.angle, cfg.axis);
    if cfg.normalize {
        aa = aa.normalized();
    }

    if cfg.repr.includes(Representation::AngleAxis) {
        report("Angle-axis", &aa, &cfg.vectors);
    }
    if cfg.repr.includes(Representation::Matrix) {
        report("Rotation matrix", &RotationMatrix::from(aa), &cfg.vectors);
    }
    if cfg.repr.includes(Representation::Quaternion) {
        report("Quaternion", &QuaternionRotation::from(aa), &cfg.vectors);
    }
}

fn report<R>(name: &str, rot: &R, vectors: &[Vec3<f64>])
where R: Rotator<f64> + std::fmt::Display {
    println!("{name}: {rot}");
    for vec in vectors.iter() {
        let rotated = rot.rotate(*vec);
        println!("  {vec} -> {rotated}  |v|^2 = {}", rotated.len_sq());
        println!("  unrotated: {}", rot.unrotate(rotated));
    }
}
