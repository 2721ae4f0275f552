//! Transform component and utilities for spatial positioning.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// A 3D transform representing position, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Get the forward direction (negative Z in right-handed coordinates).
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Rotate around the Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = Quat::from_rotation_y(angle) * self.rotation;
    }

    /// Look at a target position.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = (target - self.position).normalize_or_zero();
        if forward.length_squared() > 0.0001 {
            self.rotation = Quat::from_mat4(&Mat4::look_at_rh(self.position, target, up)).inverse();
        }
    }
}

/// Heading of a rotation around the world Y axis, in radians.
///
/// Decomposes as yaw, then pitch, then roll (Y-X-Z), the order a head-mounted
/// rig uses, so pitch and roll never leak into the result.
pub fn yaw_of(rotation: Quat) -> f32 {
    let (yaw, _pitch, _roll) = rotation.to_euler(EulerRot::YXZ);
    yaw
}

/// Strip pitch and roll from a rotation, keeping only its yaw.
pub fn leveled(rotation: Quat) -> Quat {
    Quat::from_rotation_y(yaw_of(rotation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn forward_is_negative_z() {
        let t = Transform::default();
        assert!((t.forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn leveled_keeps_yaw_drops_pitch_and_roll() {
        let tilted = Quat::from_euler(EulerRot::YXZ, 0.7, 0.4, -0.3);
        let level = leveled(tilted);
        let (yaw, pitch, roll) = level.to_euler(EulerRot::YXZ);
        assert!((yaw - 0.7).abs() < 1e-5);
        assert!(pitch.abs() < 1e-5);
        assert!(roll.abs() < 1e-5);
    }

    #[test]
    fn leveled_is_noop_on_pure_yaw() {
        let q = Quat::from_rotation_y(-FRAC_PI_4);
        assert!(leveled(q).angle_between(q) < 1e-5);
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut t = Transform::from_position(Vec3::new(0.0, 1.0, 0.0));
        t.look_at(Vec3::new(0.0, 1.0, -10.0), Vec3::Y);
        assert!((t.forward() - Vec3::NEG_Z).length() < 1e-5);
    }
}
