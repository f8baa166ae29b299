pub mod polygon;
pub mod vector;

pub use vector::{construct_perpendicular, is_axis_aligned, AXIS_EPSILON};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Rigid motion (rotation followed by translation).
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// Unit quaternion rotation.
pub type Rotation3 = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance on the sine of the dihedral angle when classifying edges.
pub const ANGULAR_TOLERANCE: f64 = 1e-9;
