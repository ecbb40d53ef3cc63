//! Pinhole projection from camera space to screen space
//!
//! Camera space places the eye at the origin looking down +z, with +y up
//! and +x right.

use crate::error::{Error, Result};
use crate::vector::{Vector2, Vector3};

/// Default screen width in pixels
pub const DEFAULT_SCREEN_WIDTH: u32 = 640;
/// Default screen height in pixels
pub const DEFAULT_SCREEN_HEIGHT: u32 = 480;
/// Default eye-to-screen distance in pixels; the sole zoom control
pub const DEFAULT_FOCAL_LENGTH: f64 = 500.0;
/// Default near-plane cutoff in camera-space units
pub const DEFAULT_NEAR_PLANE: f64 = 1.0;

/// Validated projection configuration
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    screen_width: u32,
    screen_height: u32,
    focal_length: f64,
    near_plane: f64,
}

impl Projection {
    /// Build a projection, rejecting degenerate dimensions up front so
    /// that per-frame projection never has to fail
    pub fn new(
        screen_width: u32,
        screen_height: u32,
        focal_length: f64,
        near_plane: f64,
    ) -> Result<Self> {
        if screen_width == 0 || screen_height == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "screen dimensions must be positive, got {}x{}",
                screen_width, screen_height
            )));
        }
        if focal_length <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "focal length must be positive, got {}",
                focal_length
            )));
        }
        Ok(Self {
            screen_width,
            screen_height,
            focal_length,
            near_plane,
        })
    }

    pub fn screen_width(&self) -> u32 {
        self.screen_width
    }

    pub fn screen_height(&self) -> u32 {
        self.screen_height
    }

    /// Whether a camera-space point is in front of the near plane
    ///
    /// Culling rejects points behind the viewer and keeps the projective
    /// division away from `z = 0`.
    pub fn is_visible(&self, p: &Vector3) -> bool {
        p.z >= self.near_plane
    }

    /// Project a camera-space point to screen coordinates
    ///
    /// Returns `None` for culled points; callers skip them and continue
    /// the pass.
    pub fn project(&self, p: &Vector3) -> Option<Vector2> {
        if !self.is_visible(p) {
            return None;
        }
        Some(Vector2::new(
            self.focal_length * p.x / p.z + f64::from(self.screen_width) / 2.0,
            -self.focal_length * p.y / p.z + f64::from(self.screen_height) / 2.0,
        ))
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            focal_length: DEFAULT_FOCAL_LENGTH,
            near_plane: DEFAULT_NEAR_PLANE,
        }
    }
}
