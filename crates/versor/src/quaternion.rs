//! Unit quaternion (single precision).
//!
//! A [`Quaternion`] stores the four components `(x, y, z, w)` of `w + xi + yj + zk` and is
//! kept at unit norm by its constructors, so every value represents a 3D rotation.
//!
//! Quaternions double cover the rotation group: `q` and `-q` are the same rotation. Use
//! [`Quaternion::equals`] to compare rotations; the derived `PartialEq` compares components.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::euler::EulerSequence;
use crate::VersorError;

/// Tolerance used for normalization and rotation equality.
pub const EPSILON: f32 = 1e-6;

/// A point or vector in 3D space.
pub type Point3 = [f32; 3];

/// A row-major 3x3 rotation matrix.
pub type RotationMatrix = [[f32; 3]; 3];

/// A rotation in 3D space represented as a unit quaternion.
///
/// # Invariant
///
/// After construction the norm is 1 within [`EPSILON`], unless the input norm was itself
/// `<= EPSILON`. Such degenerate values are passed through unchanged instead of being
/// divided by a near-zero norm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Create a new quaternion from its components and normalize it.
    ///
    /// # Arguments
    ///
    /// * `x`, `y`, `z` - The vector (imaginary) part.
    /// * `w` - The scalar (real) part.
    ///
    /// # Example
    ///
    /// ```
    /// use versor::Quaternion;
    ///
    /// let q = Quaternion::new(0.0, 0.0, 0.0, 2.0);
    /// assert_eq!(q, Quaternion::identity());
    /// ```
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        let mut q = Self { x, y, z, w };
        q.normalize();
        q
    }

    /// Returns the identity rotation, same as `Quaternion::new(0, 0, 0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a new quaternion from an `[x, y, z, w]` array.
    #[inline]
    pub fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Returns the components as an `[x, y, z, w]` array.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Build a rotation from Euler angles in radians.
    ///
    /// `angles[0]`, `angles[1]` and `angles[2]` are the rotations about X, Y and Z. The
    /// elementary rotations are composed in the order given by `sequence`, which must be a
    /// permutation of `"XYZ"` such as `"ZYX"`.
    ///
    /// # Errors
    ///
    /// Returns [`VersorError::InvalidSequence`] when `sequence` does not name each axis
    /// exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use versor::Quaternion;
    ///
    /// let q = Quaternion::from_euler([0.0, 0.0, std::f32::consts::FRAC_PI_2], "ZYX")?;
    /// let p = q.transform_point([1.0, 0.0, 0.0], true);
    /// assert!((p[1] - 1.0).abs() < 1e-6);
    ///
    /// assert!(Quaternion::from_euler([0.0; 3], "ZY").is_err());
    /// # Ok::<(), versor::VersorError>(())
    /// ```
    pub fn from_euler(angles: [f32; 3], sequence: &str) -> Result<Self, VersorError> {
        let sequence = sequence.parse::<EulerSequence>()?;
        Ok(Self::from_euler_sequence(angles, sequence))
    }

    /// Build a rotation from Euler angles in radians and an already validated sequence.
    pub fn from_euler_sequence(angles: [f32; 3], sequence: EulerSequence) -> Self {
        let [first, second, third] = sequence
            .axes()
            .map(|axis| Self::from_axis_angle(axis.unit(), angles[axis.index()]));
        first.multiply(&second).multiply(&third)
    }

    /// Rotation of `angle` radians about a unit `axis`.
    pub(crate) fn from_axis_angle(axis: Point3, angle: f32) -> Self {
        let (sin, cos) = (angle / 2.0).sin_cos();
        Self::new(axis[0] * sin, axis[1] * sin, axis[2] * sin, cos)
    }

    /// The x component of the vector part.
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// The y component of the vector part.
    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// The z component of the vector part.
    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    /// The scalar part.
    #[inline]
    pub fn w(&self) -> f32 {
        self.w
    }

    /// Euclidean norm of the four components.
    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scale the quaternion to unit norm in place.
    ///
    /// Does nothing when the norm is `<= EPSILON`.
    pub fn normalize(&mut self) {
        // prescale by the largest component so the sum of squares cannot overflow
        let scale = self
            .x
            .abs()
            .max(self.y.abs())
            .max(self.z.abs())
            .max(self.w.abs());
        let scaled = if scale > 0.0 {
            Self {
                x: self.x / scale,
                y: self.y / scale,
                z: self.z / scale,
                w: self.w / scale,
            }
        } else {
            *self
        };

        let norm = scaled.norm();
        if scale * norm <= EPSILON {
            log::trace!("skipping normalization of degenerate quaternion {self}");
            return;
        }
        self.x = scaled.x / norm;
        self.y = scaled.y / norm;
        self.z = scaled.z / norm;
        self.w = scaled.w / norm;
    }

    /// Returns a normalized copy, leaving `self` untouched.
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Hamilton product `self * other`.
    ///
    /// The product applies `other` first and then `self` when used to rotate points. It is
    /// not commutative. The result is renormalized.
    pub fn multiply(&self, other: &Self) -> Self {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let (ox, oy, oz, ow) = (other.x, other.y, other.z, other.w);
        Self::new(
            w * ox + x * ow + y * oz - z * oy,
            w * oy - x * oz + y * ow + z * ox,
            w * oz + x * oy - y * ox + z * ow,
            w * ow - x * ox - y * oy - z * oz,
        )
    }

    /// Composition of rotations. Same as [`Quaternion::multiply`], not a component-wise sum.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        self.multiply(other)
    }

    /// Composition with the reverse of `other`, i.e. `self * other.inverse()`.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Self {
        self.multiply(&other.inverse())
    }

    /// The conjugate, which for a unit quaternion is the reverse rotation.
    pub fn inverse(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Negate the vector part in place. The norm is not re-checked.
    pub fn inverse_in_place(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Returns true if both quaternions represent the same rotation within [`EPSILON`].
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.equals_eps(other, EPSILON)
    }

    /// Returns true if both quaternions represent the same rotation within `epsilon`.
    ///
    /// The difference rotation `self * other.inverse()` must be the identity, with either sign
    /// of the scalar part, so `q` and `-q` compare equal.
    pub fn equals_eps(&self, other: &Self, epsilon: f32) -> bool {
        let d = self.multiply(&other.inverse());
        d.x.abs() < epsilon
            && d.y.abs() < epsilon
            && d.z.abs() < epsilon
            && ((d.w - 1.0).abs() < epsilon || (d.w + 1.0).abs() < epsilon)
    }

    /// Row-major rotation matrix of a unit quaternion.
    pub fn to_rotation_matrix(&self) -> RotationMatrix {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        [
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - z * w),
                2.0 * (x * z + y * w),
            ],
            [
                2.0 * (x * y + z * w),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - x * w),
            ],
            [
                2.0 * (x * z - y * w),
                2.0 * (y * z + x * w),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ]
    }

    /// Rotate a point.
    ///
    /// # Arguments
    ///
    /// * `point` - The point to rotate.
    /// * `local_to_world` - Apply the rotation when true, its inverse when false.
    pub fn transform_point(&self, point: Point3, local_to_world: bool) -> Point3 {
        let rotation = if local_to_world {
            *self
        } else {
            // flip without renormalizing
            let mut inv = *self;
            inv.inverse_in_place();
            inv
        };

        let r = rotation.to_rotation_matrix();
        let [px, py, pz] = point;
        [
            r[0][0] * px + r[0][1] * py + r[0][2] * pz,
            r[1][0] * px + r[1][1] * py + r[1][2] * pz,
            r[2][0] * px + r[2][1] * py + r[2][2] * pz,
        ]
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x, self.y, self.z, self.w)
    }
}

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl From<glam::Quat> for Quaternion {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quaternion> for glam::Quat {
    #[inline]
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    /// Negates all four components. The result is the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl $trait<Quaternion> for Quaternion {
            type Output = Quaternion;

            #[inline]
            fn $fn(self, rhs: Quaternion) -> Self::Output {
                Quaternion::$method(&self, &rhs)
            }
        }

        impl $trait<&Quaternion> for &Quaternion {
            type Output = Quaternion;

            #[inline]
            fn $fn(self, rhs: &Quaternion) -> Self::Output {
                Quaternion::$method(self, rhs)
            }
        }
    };
}

impl_binary_op!(Mul, mul, multiply);
impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, subtract);
