#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Versor
//!
//! A small single precision quaternion type for representing 3D rotations.
//!
//! ## Key Features
//!
//! - **Always unit norm**: constructors normalize, so every value is a rotation
//! - **Hamilton product**: rotation composition through `*` (and `+`, `-` for composing with
//!   the reverse of a rotation)
//! - **Euler angles**: any permutation of the `X`, `Y`, `Z` axes, validated up front
//! - **Double cover aware equality**: `q` and `-q` compare as the same rotation
//!
//! ## Example
//!
//! ```rust
//! use versor::Quaternion;
//!
//! let q1 = Quaternion::new(0.8, 0.0, 0.0, 1.0);
//! let q2 = Quaternion::new(0.11, 0.66, 0.0, 1.0);
//!
//! // compose the rotations and apply them to a point
//! let q3 = q1 * q2;
//! let world = q3.transform_point([1.0, 2.0, 3.0], true);
//!
//! // and back again
//! let local = q3.transform_point(world, false);
//! assert!((local[2] - 3.0).abs() < 1e-5);
//!
//! let q4 = Quaternion::from_euler([0.1, 0.2, 0.3], "ZYX")?;
//! assert!(q4.equals(&-q4));
//! # Ok::<(), versor::VersorError>(())
//! ```

/// Error types for the versor crate.
pub mod error;

/// Euler angle sequences and conversion.
pub mod euler;

/// The quaternion value type.
pub mod quaternion;

pub use error::{SequenceError, VersorError};
pub use euler::{euler_to_quaternion, Axis, EulerSequence};
pub use quaternion::{Point3, Quaternion, RotationMatrix, EPSILON};
