//! Euler angle sequences.

use std::fmt;
use std::str::FromStr;

use crate::error::{SequenceError, VersorError};
use crate::quaternion::{Point3, Quaternion};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit(self) -> Point3 {
        match self {
            Axis::X => [1.0, 0.0, 0.0],
            Axis::Y => [0.0, 1.0, 0.0],
            Axis::Z => [0.0, 0.0, 1.0],
        }
    }

    /// Position of the axis angle in an `[x, y, z]` angle array.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = SequenceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' => Ok(Axis::X),
            'Y' => Ok(Axis::Y),
            'Z' => Ok(Axis::Z),
            _ => Err(SequenceError::UnknownAxis(c)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        };
        write!(f, "{c}")
    }
}

/// Order in which the three elementary rotations are composed.
///
/// A sequence is a permutation of the three axes. For `ZYX` the resulting rotation is
/// `qz * qy * qx`, so a point is rotated about X first, then Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EulerSequence([Axis; 3]);

impl EulerSequence {
    /// Yaw, pitch, roll.
    pub const ZYX: Self = Self([Axis::Z, Axis::Y, Axis::X]);

    /// Roll, pitch, yaw.
    pub const XYZ: Self = Self([Axis::X, Axis::Y, Axis::Z]);

    /// Create a sequence, checking that every axis is used exactly once.
    pub fn new(axes: [Axis; 3]) -> Result<Self, VersorError> {
        Self::validate(axes).map_err(|reason| {
            let text: String = axes.iter().map(|a| a.to_string()).collect();
            VersorError::invalid_sequence(&text, reason)
        })
    }

    /// The axes in composition order.
    #[inline]
    pub fn axes(&self) -> [Axis; 3] {
        self.0
    }

    fn validate(axes: [Axis; 3]) -> Result<Self, SequenceError> {
        for (i, axis) in axes.iter().enumerate() {
            if axes[..i].contains(axis) {
                return Err(SequenceError::RepeatedAxis(*axis));
            }
        }
        Ok(Self(axes))
    }

    fn parse_axes(s: &str) -> Result<Self, SequenceError> {
        let count = s.chars().count();
        if count != 3 {
            return Err(SequenceError::Length(count));
        }

        let mut axes = [Axis::X; 3];
        for (slot, c) in axes.iter_mut().zip(s.chars()) {
            *slot = Axis::try_from(c)?;
        }
        Self::validate(axes)
    }
}

impl Default for EulerSequence {
    fn default() -> Self {
        Self::ZYX
    }
}

impl FromStr for EulerSequence {
    type Err = VersorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_axes(s).map_err(|reason| VersorError::invalid_sequence(s, reason))
    }
}

impl TryFrom<&str> for EulerSequence {
    type Error = VersorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for EulerSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}{b}{c}")
    }
}

/// Build a rotation from Euler angles in radians.
///
/// Free-function form of [`Quaternion::from_euler`], returning exactly the same value.
///
/// # Example
///
/// ```
/// use versor::{euler_to_quaternion, Quaternion};
///
/// let angles = [0.1, -0.2, 0.3];
/// let q = euler_to_quaternion(angles, "ZYX")?;
/// assert_eq!(q, Quaternion::from_euler(angles, "ZYX")?);
/// # Ok::<(), versor::VersorError>(())
/// ```
pub fn euler_to_quaternion(angles: [f32; 3], sequence: &str) -> Result<Quaternion, VersorError> {
    Quaternion::from_euler(angles, sequence)
}
