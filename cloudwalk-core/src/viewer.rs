//! Viewer position and orientation, driven by discrete commands

use crate::error::Result;
use crate::quaternion::Quaternion;
use crate::vector::Vector3;

/// Default angular increment per rotate command (~5 degrees), matching
/// the classic hardcoded small-step constants
pub const DEFAULT_STEP_ANGLE: f64 = 5.0 * std::f64::consts::PI / 180.0;

/// The discrete command set the hosting application feeds the kernel
///
/// Hosts map raw input events (keystrokes, gamepad, whatever) onto this
/// closed enumeration; the kernel never sees raw events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveForward,
    MoveBack,
    MoveRight,
    MoveLeft,
    MoveUp,
    MoveDown,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}

/// Body-frame rotation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Pitch,
    Yaw,
    Roll,
}

impl Axis {
    /// Unit vector of the axis in the viewer's body frame
    pub fn unit(&self) -> Vector3 {
        match self {
            Axis::Pitch => Vector3::new(1.0, 0.0, 0.0),
            Axis::Yaw => Vector3::new(0.0, 1.0, 0.0),
            Axis::Roll => Vector3::new(0.0, 0.0, 1.0),
        }
    }
}

/// Current eye position and orientation
///
/// An explicitly owned value passed to command handling and rendering;
/// there is no global viewer. Both fields are mutated only through the
/// command operations, and rendering always reads the post-mutation,
/// post-renormalization state.
#[derive(Debug, Clone, Copy)]
pub struct ViewerState {
    pub eye: Vector3,
    pub orientation: Quaternion,
    step_angle: f64,
}

impl ViewerState {
    /// Start at the origin facing +z, with the given angular increment
    /// per rotate command
    pub fn new(step_angle: f64) -> Self {
        Self {
            eye: Vector3::ZERO,
            orientation: Quaternion::identity(),
            step_angle,
        }
    }

    /// Move the eye one unit along a body-frame direction
    ///
    /// The world-frame displacement is the inverse rotation applied to
    /// the local direction: rotating the desired direction back into
    /// world coordinates is the opposite of rotating the world into the
    /// viewer's frame.
    pub fn translate_local(&mut self, direction: Vector3) {
        self.eye = self.eye + self.orientation.conjugate().rotate(direction);
    }

    /// Compose one fixed-angle rotation step onto the orientation
    ///
    /// Pre-multiply order: the increment acts in the viewer's own frame,
    /// not world frame. Renormalizes afterwards to hold the unit-norm
    /// invariant.
    pub fn rotate_increment(&mut self, axis: Axis, sign: f64) -> Result<()> {
        let step = Quaternion::from_axis_angle(axis.unit(), sign.signum() * self.step_angle);
        self.orientation = (step * self.orientation).renormalize()?;
        Ok(())
    }

    /// Apply one command; translation steps are one unit long
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::MoveForward => self.translate_local(Vector3::new(0.0, 0.0, 1.0)),
            Command::MoveBack => self.translate_local(Vector3::new(0.0, 0.0, -1.0)),
            Command::MoveRight => self.translate_local(Vector3::new(1.0, 0.0, 0.0)),
            Command::MoveLeft => self.translate_local(Vector3::new(-1.0, 0.0, 0.0)),
            Command::MoveUp => self.translate_local(Vector3::new(0.0, 1.0, 0.0)),
            Command::MoveDown => self.translate_local(Vector3::new(0.0, -1.0, 0.0)),
            Command::PitchUp => self.rotate_increment(Axis::Pitch, -1.0)?,
            Command::PitchDown => self.rotate_increment(Axis::Pitch, 1.0)?,
            Command::YawLeft => self.rotate_increment(Axis::Yaw, 1.0)?,
            Command::YawRight => self.rotate_increment(Axis::Yaw, -1.0)?,
            Command::RollLeft => self.rotate_increment(Axis::Roll, -1.0)?,
            Command::RollRight => self.rotate_increment(Axis::Roll, 1.0)?,
        }
        Ok(())
    }

    /// Back to identity orientation at the origin
    pub fn reset(&mut self) {
        self.eye = Vector3::ZERO;
        self.orientation = Quaternion::identity();
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_ANGLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL_COMMANDS: [Command; 12] = [
        Command::MoveForward,
        Command::MoveBack,
        Command::MoveRight,
        Command::MoveLeft,
        Command::MoveUp,
        Command::MoveDown,
        Command::PitchUp,
        Command::PitchDown,
        Command::YawLeft,
        Command::YawRight,
        Command::RollLeft,
        Command::RollRight,
    ];

    #[test]
    fn test_forward_at_identity_moves_along_z() {
        let mut viewer = ViewerState::default();
        viewer.translate_local(Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(viewer.eye, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_forward_tracks_facing_after_yaw() {
        let mut viewer = ViewerState::new(std::f64::consts::FRAC_PI_2);
        viewer.rotate_increment(Axis::Yaw, 1.0).unwrap();
        viewer.apply(Command::MoveForward).unwrap();
        // after a quarter yaw the body-frame +z points along world -x
        assert_relative_eq!(viewer.eye.x, -1.0, epsilon = 1e-9);
        assert_relative_eq!(viewer.eye.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(viewer.eye.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unit_norm_after_each_increment() {
        let mut viewer = ViewerState::default();
        for axis in [Axis::Pitch, Axis::Yaw, Axis::Roll] {
            for sign in [1.0, -1.0] {
                viewer.rotate_increment(axis, sign).unwrap();
                assert!((viewer.orientation.norm_squared() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_norm_stays_bounded_over_long_sessions() {
        let mut viewer = ViewerState::default();
        for i in 0..1000 {
            let axis = match i % 3 {
                0 => Axis::Pitch,
                1 => Axis::Yaw,
                _ => Axis::Roll,
            };
            viewer.rotate_increment(axis, if i % 2 == 0 { 1.0 } else { -1.0 }).unwrap();
        }
        assert!((viewer.orientation.norm_squared().sqrt() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_increments_cancel() {
        let mut viewer = ViewerState::default();
        viewer.rotate_increment(Axis::Pitch, 1.0).unwrap();
        viewer.rotate_increment(Axis::Pitch, -1.0).unwrap();
        let p = Vector3::new(1.0, 2.0, 3.0);
        let r = viewer.orientation.rotate(p);
        assert_relative_eq!(r.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(r.y, p.y, epsilon = 1e-9);
        assert_relative_eq!(r.z, p.z, epsilon = 1e-9);
    }

    #[test]
    fn test_every_command_applies() {
        let mut viewer = ViewerState::default();
        for command in ALL_COMMANDS {
            viewer.apply(command).unwrap();
        }
        assert!((viewer.orientation.norm_squared() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut viewer = ViewerState::default();
        viewer.apply(Command::MoveForward).unwrap();
        viewer.apply(Command::YawLeft).unwrap();
        viewer.reset();
        assert_eq!(viewer.eye, Vector3::ZERO);
        assert_eq!(viewer.orientation, Quaternion::identity());
    }
}
