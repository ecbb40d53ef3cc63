//! Unit-quaternion orientation type
//!
//! Orientations are composed by Hamilton product and kept at unit norm by
//! renormalizing after every composed rotation. Without that step the norm
//! drifts under repeated multiplication and rotated vectors slowly change
//! length, which shows up as silent geometric distortion rather than a
//! crash.

use crate::error::{Error, Result};
use crate::vector::Vector3;
use std::ops::Mul;

/// A quaternion `s + v.x·i + v.y·j + v.z·k`
///
/// Value type in pure functional style: every operation returns a new
/// quaternion. Rotation via the sandwich product is only a proper rotation
/// when the quaternion is unit-norm; callers guarantee that by
/// renormalizing after each composition rather than checking per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub s: f64,
    pub v: Vector3,
}

impl Quaternion {
    pub const fn new(s: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            s,
            v: Vector3::new(x, y, z),
        }
    }

    /// The identity rotation: facing +z with +y up and +x right
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Unit quaternion for a rotation of `angle` radians about `axis`
    ///
    /// `axis` must be unit length for the result to be unit-norm.
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        let half = angle / 2.0;
        Self {
            s: half.cos(),
            v: axis * half.sin(),
        }
    }

    /// The inverse rotation, for a unit quaternion
    pub fn conjugate(&self) -> Self {
        Self { s: self.s, v: -self.v }
    }

    pub fn norm_squared(&self) -> f64 {
        self.s * self.s + self.v.magnitude_squared()
    }

    /// Rescale to unit norm, bounding accumulated floating-point error
    ///
    /// Must be called after every command that composes a new rotation
    /// into the current orientation. An exactly-zero norm cannot arise
    /// from composing unit quaternions, so it is reported as an
    /// unrecoverable precondition violation.
    pub fn renormalize(&self) -> Result<Self> {
        let norm = self.norm_squared().sqrt();
        if norm == 0.0 {
            return Err(Error::InvalidOrientation);
        }
        Ok(Self {
            s: self.s / norm,
            v: self.v * (1.0 / norm),
        })
    }

    /// Apply this rotation to a vector via the sandwich product
    /// `q·(0,p)·q*`, returning the vector part
    pub fn rotate(&self, p: Vector3) -> Vector3 {
        let pure = Self { s: 0.0, v: p };
        (*self * pure * self.conjugate()).v
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product
    ///
    /// Non-commutative. To append an incremental rotation to the current
    /// orientation in the viewer's own frame, compute
    /// `increment * current`; the reverse order applies the increment in
    /// world frame and steers visibly wrong.
    fn mul(self, other: Self) -> Self {
        Self {
            s: self.s * other.s - self.v.dot(&other.v),
            v: self.v.cross(&other.v) + other.v * self.s + self.v * other.s,
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}
