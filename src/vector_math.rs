//! Vector helpers layered on top of [`glam::Vec3`].
//!
//! Componentwise arithmetic, dot and cross products, and lengths come from
//! `glam` directly. This module adds the operations whose failure modes the
//! scene cares about: normalisation and axis rotation refuse a zero-length
//! direction instead of producing NaN.
use glam::Vec3;
use thiserror::Error;

/// World up axis.
pub const UP: Vec3 = Vec3::Y;
/// World down axis.
pub const DOWN: Vec3 = Vec3::NEG_Y;

/// Failure raised when a vector cannot serve as a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// The vector's length is zero or overflows, so it yields no direction.
    #[error("cannot derive a direction from a vector of zero or unbounded length")]
    DegenerateDirection,
    /// At least one component is NaN or infinite.
    #[error("vector has non-finite components")]
    NonFinite,
}

/// Returns `true` when the squared length is exactly zero.
///
/// No epsilon is applied, so `1e-20` in one component (squared, a non-zero
/// subnormal) is not zero. Components small enough for their square to
/// underflow, such as `1e-30`, count as zero.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use scene_hierarchy::vector_math::is_zero;
/// assert!(is_zero(Vec3::ZERO));
/// assert!(!is_zero(Vec3::new(0.0, 1e-20, 0.0)));
/// assert!(is_zero(Vec3::new(0.0, 1e-30, 0.0)));
/// ```
#[must_use]
pub fn is_zero(vector: Vec3) -> bool {
    vector.length_squared() == 0.0
}

/// Returns the unit vector pointing along `vector`.
///
/// # Errors
///
/// Returns [`VectorError::NonFinite`] if any component is NaN or infinite and
/// [`VectorError::DegenerateDirection`] when the length is zero or too large
/// to represent, so the result is always a unit vector.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use scene_hierarchy::vector_math::{normalize, VectorError};
/// let unit = normalize(Vec3::new(3.0, 0.0, 4.0)).unwrap();
/// assert!((unit - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
/// assert_eq!(normalize(Vec3::ZERO), Err(VectorError::DegenerateDirection));
/// ```
pub fn normalize(vector: Vec3) -> Result<Vec3, VectorError> {
    if !vector.is_finite() {
        return Err(VectorError::NonFinite);
    }
    vector
        .try_normalize()
        .ok_or(VectorError::DegenerateDirection)
}

/// Rotates `vector` about `axis` by `angle` radians using Rodrigues' formula.
///
/// `axis` need not be unit length; it is normalised first.
///
/// # Errors
///
/// Fails with the same errors as [`normalize`] when `axis` has no direction.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use scene_hierarchy::vector_math::rotate_about_axis;
/// let rotated = rotate_about_axis(Vec3::X, Vec3::Y, std::f32::consts::FRAC_PI_2).unwrap();
/// assert!((rotated - Vec3::NEG_Z).length() < 1e-6);
/// ```
pub fn rotate_about_axis(vector: Vec3, axis: Vec3, angle: f32) -> Result<Vec3, VectorError> {
    let unit_axis = normalize(axis)?;
    let (sin, cos) = angle.sin_cos();
    let parallel = unit_axis * unit_axis.dot(vector) * (1.0 - cos);
    Ok(vector * cos + unit_axis.cross(vector) * sin + parallel)
}
