use std::fmt;

use crate::{
    error::ConfigError,
    vector::Vec3,
};


/// Parsing states.
enum Parse {
    None,
    Angle,
    Axis,
    Vector,
    Repr,
}
impl Parse {
    fn flag(&self) -> &'static str {
        match self {
            Parse::None   => "",
            Parse::Angle  => "-angle",
            Parse::Axis   => "-axis",
            Parse::Vector => "-vec",
            Parse::Repr   => "-repr",
        }
    }
}


/// Which rotation representations the demo runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Representation {
    AngleAxis,
    Matrix,
    Quaternion,
    All,
}
impl Representation {
    pub fn includes(&self, other: Representation) -> bool {
        *self == Representation::All || *self == other
    }
}
impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::AngleAxis  => write!(f, "angle-axis"),
            Representation::Matrix     => write!(f, "matrix"),
            Representation::Quaternion => write!(f, "quaternion"),
            Representation::All        => write!(f, "all"),
        }
    }
}


/// User defined configuration settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub angle: f64,
    pub axis: Vec3<f64>,
    pub vectors: Vec<Vec3<f64>>,
    pub repr: Representation,
    pub normalize: bool,
}
impl Config {
    /// Create a new Config with the specified command line arguments.
    pub fn new(args: Vec<String>) -> Result<Config, ConfigError> {
        let mut parser   = Parse::None;
        let mut cfg      = Config::default();
        let mut vectors  = Vec::new();
        let mut awaiting = false;

        for arg in args.into_iter() {
            let next = match arg.as_str() {
                "-angle"     => Some(Parse::Angle),
                "-axis"      => Some(Parse::Axis),
                "-vec"       => Some(Parse::Vector),
                "-repr"      => Some(Parse::Repr),
                "-normalize" => Some(Parse::None),
                _ => None,
            };
            if let Some(next) = next {
                // Previous flag never got its value
                if awaiting {
                    return Err(ConfigError::MissingValue(parser.flag()));
                }
                if arg == "-normalize" {
                    cfg.normalize = true;
                }
                else {
                    awaiting = true;
                }
                parser = next;
                continue;
            }
            match parser {
                Parse::Angle => {
                    cfg.angle = parse_number(&arg)?;
                }
                Parse::Axis => {
                    cfg.axis = parse_vector(&arg)?;
                }
                Parse::Vector => {
                    vectors.push(parse_vector(&arg)?);
                }
                Parse::Repr => {
                    cfg.repr = parse_representation(&arg)?;
                }
                Parse::None => {
                    log::warn!("ignoring argument {arg}");
                }
            }
            awaiting = false;
        }
        if awaiting {
            return Err(ConfigError::MissingValue(parser.flag()));
        }
        if !vectors.is_empty() {
            cfg.vectors = vectors;
        }
        Ok(cfg)
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "
            \rRotation
            \r=============================================================
            \rAngle: {} rad
            \rAxis: {}
            \rNormalize: {}
            \rRepresentation: {}",
            self.angle,
            self.axis,
            self.normalize,
            self.repr,
        )?;
        for (i, vec) in self.vectors.iter().enumerate() {
            write!(f, "
                \rVector {i}: {vec}",
            )?;
        }
        writeln!(f)
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            angle: 2.0943951,
            axis: Vec3::new(1.0, 1.0, 1.0),
            vectors: vec![Vec3::new(2.0, 3.0, 4.0)],
            repr: Representation::All,
            normalize: false,
        }
    }
}

fn parse_number(arg: &str) -> Result<f64, ConfigError> {
    arg.trim().parse::<f64>().map_err(|_| ConfigError::InvalidNumber(arg.to_string()))
}

fn parse_vector(arg: &str) -> Result<Vec3<f64>, ConfigError> {
    let parts = arg
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| ConfigError::InvalidVector(arg.to_string()))?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(ConfigError::InvalidVector(arg.to_string())),
    }
}

fn parse_representation(arg: &str) -> Result<Representation, ConfigError> {
    match arg {
        "angle-axis" | "aa" => Ok(Representation::AngleAxis),
        "matrix"            => Ok(Representation::Matrix),
        "quaternion" | "q"  => Ok(Representation::Quaternion),
        "all"               => Ok(Representation::All),
        _ => Err(ConfigError::InvalidRepresentation(arg.to_string())),
    }
}


#[cfg(test)]
fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

#[test]
fn defaults_without_arguments() {
    let cfg = Config::new(Vec::new()).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.vectors, vec![Vec3::new(2.0, 3.0, 4.0)]);
}

#[test]
fn parses_all_flags() {
    let cfg = Config::new(args("-angle 1.5 -axis 0,0,2 -vec 1,0,0 -vec 0,1,0 -repr matrix -normalize")).unwrap();
    assert_eq!(cfg.angle, 1.5);
    assert_eq!(cfg.axis, Vec3::new(0.0, 0.0, 2.0));
    assert_eq!(cfg.vectors, vec![Vec3::right(), Vec3::forward()]);
    assert_eq!(cfg.repr, Representation::Matrix);
    assert!(cfg.normalize);
}

#[test]
fn vec_flag_takes_several_values() {
    let cfg = Config::new(args("-vec 1,2,3 4,5,6")).unwrap();
    assert_eq!(cfg.vectors, vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
}

#[test]
fn rejects_bad_values() {
    assert_eq!(
        Config::new(args("-angle half")),
        Err(ConfigError::InvalidNumber("half".to_string())),
    );
    assert_eq!(
        Config::new(args("-axis 1,2")),
        Err(ConfigError::InvalidVector("1,2".to_string())),
    );
    assert_eq!(
        Config::new(args("-repr euler")),
        Err(ConfigError::InvalidRepresentation("euler".to_string())),
    );
    assert_eq!(
        Config::new(args("-angle 1.0 -vec")),
        Err(ConfigError::MissingValue("-vec")),
    );
    assert_eq!(
        Config::new(args("-axis -normalize")),
        Err(ConfigError::MissingValue("-axis")),
    );
}

#[test]
fn representation_selection() {
    assert!(Representation::All.includes(Representation::Matrix));
    assert!(Representation::Quaternion.includes(Representation::Quaternion));
    assert!(!Representation::AngleAxis.includes(Representation::Matrix));
}

#[test]
fn summary_lists_vectors() {
    let cfg = Config::new(args("-vec 1,0,0 0,1,0")).unwrap();
    let summary = cfg.to_string();
    assert!(summary.contains("Vector 1: (0, 1, 0)"));
    assert!(summary.ends_with('\n'));
}
