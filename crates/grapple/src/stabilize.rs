//! Detachment and stabilization.
//!
//! Release drops all swing momentum on purpose: linear and angular velocity
//! go to zero, damping returns to its pre-swing value, and the body is turned
//! upright keeping only its heading.

use crate::backend::PhysicsBackend;
use crate::gun::GrappleGun;
use engine_core::{leveled, Vec3};

/// Result of a release press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// The spring is gone and the body has been stabilized.
    Detached { anchor: Vec3 },
    /// Nothing was attached; the press is ignored.
    NotAttached,
}

impl<P: PhysicsBackend> GrappleGun<P> {
    /// Remove the spring and reset the player body.
    pub fn detach(&mut self, physics: &mut P) -> ReleaseOutcome {
        let Some(released) = self.release_constraint(physics) else {
            log::debug!("[Grapple] Release ignored, not attached");
            return ReleaseOutcome::NotAttached;
        };

        physics.set_linear_velocity(self.body, Vec3::ZERO);
        physics.set_angular_velocity(self.body, Vec3::ZERO);
        physics.set_linear_damping(self.body, released.original_linear_damping);
        if let Some(rotation) = physics.body_rotation(self.body) {
            physics.set_body_rotation(self.body, leveled(rotation));
        }

        log::info!("[Grapple] Detached and stabilized");
        ReleaseOutcome::Detached {
            anchor: released.anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrappleConfig;
    use crate::mock::{MockInput, MockPhysics};
    use engine_core::{EulerRot, Quat, Transform};

    #[test]
    fn release_resets_body() {
        let mut physics = MockPhysics::with_wall_at(10.0);
        physics.body.damping = 0.05;
        let mut gun = GrappleGun::new(GrappleConfig::default(), Some(MockPhysics::PLAYER), &physics).unwrap();
        let mut input = MockInput::default();
        gun.try_hook(&Transform::default(), &mut input, &mut physics);
        assert_eq!(physics.body.damping, 2.5);

        // Mid-swing: moving, spinning, tilted.
        physics.body.linvel = Vec3::new(4.0, -2.0, 1.0);
        physics.body.angvel = Vec3::new(0.5, 1.5, -0.7);
        physics.body.rotation = Quat::from_euler(EulerRot::YXZ, 1.2, 0.35, -0.25);

        let outcome = gun.detach(&mut physics);
        assert_eq!(
            outcome,
            ReleaseOutcome::Detached {
                anchor: Vec3::new(0.0, 0.0, -10.0)
            }
        );
        assert_eq!(physics.body.linvel, Vec3::ZERO);
        assert_eq!(physics.body.angvel, Vec3::ZERO);
        assert_eq!(physics.body.damping, 0.05);

        let (yaw, pitch, roll) = physics.body.rotation.to_euler(EulerRot::YXZ);
        assert!((yaw - 1.2).abs() < 1e-4);
        assert!(pitch.abs() < 1e-5);
        assert!(roll.abs() < 1e-5);

        assert!(!gun.is_attached());
        assert!(gun.state().constraint().is_none());
        assert_eq!(physics.live_constraints(), 0);
    }

    #[test]
    fn release_while_unattached_is_noop() {
        let mut physics = MockPhysics::with_wall_at(10.0);
        physics.body.linvel = Vec3::new(1.0, 0.0, 0.0);
        let mut gun = GrappleGun::new(GrappleConfig::default(), Some(MockPhysics::PLAYER), &physics).unwrap();

        assert_eq!(gun.detach(&mut physics), ReleaseOutcome::NotAttached);
        assert_eq!(gun.detach(&mut physics), ReleaseOutcome::NotAttached);
        assert_eq!(physics.body.linvel, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn damping_restored_per_attachment() {
        let mut physics = MockPhysics::with_wall_at(10.0);
        let mut gun = GrappleGun::new(GrappleConfig::default(), Some(MockPhysics::PLAYER), &physics).unwrap();
        let mut input = MockInput::default();

        physics.body.damping = 0.2;
        gun.try_hook(&Transform::default(), &mut input, &mut physics);
        gun.detach(&mut physics);
        assert_eq!(physics.body.damping, 0.2);

        // Something else changes damping between swings.
        physics.body.damping = 0.7;
        gun.try_hook(&Transform::default(), &mut input, &mut physics);
        gun.detach(&mut physics);
        assert_eq!(physics.body.damping, 0.7);
    }
}
