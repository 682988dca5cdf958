//! Rotation axes for Java element rotations.

use std::str::FromStr;

/// The three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of this axis in an `[x, y, z]` triple.
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Sign applied to a Java rotation angle around this axis when moving to
    /// Bedrock space. X is mirrored, so X and Y rotations flip direction.
    pub fn bedrock_angle_sign(&self) -> f32 {
        match self {
            Axis::X | Axis::Y => -1.0,
            Axis::Z => 1.0,
        }
    }
}

/// Java only recognises the lower-case names.
impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(format!("unknown axis: {}", s)),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}
