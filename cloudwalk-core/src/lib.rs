//! Cloudwalk Core Library - 3D geometry and orientation kernel
//!
//! Vector algebra, unit-quaternion orientation, perspective projection
//! with near-plane culling, and discrete first-person steering over a
//! static point cloud. The library performs no I/O; hosts feed it
//! commands and consume the screen points it produces.

pub mod cloud;
pub mod error;
pub mod projection;
pub mod quaternion;
pub mod render;
pub mod vector;
pub mod viewer;

// Re-export commonly used types
pub use cloud::{dot_sphere, PointCloud};
pub use error::{Error, Result};
pub use projection::Projection;
pub use quaternion::Quaternion;
pub use render::{Frame, PointSink};
pub use vector::{Vector2, Vector3};
pub use viewer::{Axis, Command, ViewerState};
