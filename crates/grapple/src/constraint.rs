//! Swing constraint manager: creates and tears down the spring between the
//! player body and the anchor.

use crate::backend::{PhysicsBackend, SpringParams};
use crate::config::GrappleConfig;
use crate::gun::GrappleGun;
use crate::state::Attachment;
use engine_core::Vec3;

/// Spring parameters for a hook `distance` meters from the player body.
///
/// The rope starts a little shorter than the real distance so it is taut at
/// once. The upper bound never starts below the shortest rope length.
pub fn spring_params(distance: f32, config: &GrappleConfig) -> SpringParams {
    let max_distance = (distance * config.max_length_ratio).max(config.min_rope_length);
    let min_distance = (distance * config.min_length_ratio).min(max_distance);
    SpringParams {
        max_distance,
        min_distance,
        stiffness: config.feel.stiffness,
        damping: config.feel.damping,
        mass_scale: config.feel.mass_scale,
        preprocessing: false,
    }
}

/// What is left of an attachment once its constraint is gone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Released {
    pub anchor: Vec3,
    pub original_linear_damping: f32,
}

impl<P: PhysicsBackend> GrappleGun<P> {
    /// Create the spring to `anchor` and raise the swing damping.
    /// Returns `None` when the player body no longer exists.
    pub(crate) fn attach(&mut self, anchor: Vec3, physics: &mut P) -> Option<&Attachment<P::Constraint>> {
        debug_assert!(!self.state.is_attached(), "attach while already attached");
        let position = physics.body_position(self.body)?;
        let original_linear_damping = physics.linear_damping(self.body)?;

        let params = spring_params(position.distance(anchor), &self.config);
        let constraint = physics.create_spring_constraint(self.body, anchor, &params);
        physics.set_linear_damping(self.body, self.config.swing_linear_damping);

        self.state.attachment = Some(Attachment::new(
            anchor,
            constraint,
            params.max_distance,
            params.min_distance,
            original_linear_damping,
        ));
        self.state.attachment.as_ref()
    }

    /// Destroy the live spring, if any, and clear the attachment.
    pub(crate) fn release_constraint(&mut self, physics: &mut P) -> Option<Released> {
        let (constraint, anchor, original_linear_damping) = self.state.attachment.take()?.into_parts();
        physics.destroy_constraint(constraint);
        Some(Released {
            anchor,
            original_linear_damping,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeelProfile;
    use crate::mock::MockPhysics;

    #[test]
    fn params_scale_with_distance() {
        let params = spring_params(10.0, &GrappleConfig::default());
        assert!((params.max_distance - 9.0).abs() < 1e-5);
        assert!((params.min_distance - 4.0).abs() < 1e-5);
        assert!(!params.preprocessing);
    }

    #[test]
    fn params_follow_feel_profile() {
        let config = GrappleConfig::default().with_feel(FeelProfile::stiff());
        let params = spring_params(10.0, &config);
        assert_eq!(params.stiffness, FeelProfile::stiff().stiffness);
        assert_eq!(params.damping, FeelProfile::stiff().damping);
        assert_eq!(params.mass_scale, FeelProfile::stiff().mass_scale);
    }

    #[test]
    fn close_hook_keeps_rope_floor() {
        let params = spring_params(0.5, &GrappleConfig::default());
        assert_eq!(params.max_distance, 1.0);
        assert!(params.min_distance <= params.max_distance);

        let params = spring_params(0.0, &GrappleConfig::default());
        assert_eq!(params.max_distance, 1.0);
        assert_eq!(params.min_distance, 0.0);
    }

    #[test]
    fn attach_measures_from_body_not_muzzle() {
        let mut physics = MockPhysics::with_wall_at(10.0);
        physics.body.position = Vec3::new(0.0, 0.0, 10.0);
        let mut gun = GrappleGun::new(GrappleConfig::default(), Some(MockPhysics::PLAYER), &physics).unwrap();

        let attachment = gun.attach(Vec3::new(0.0, 0.0, -10.0), &mut physics).unwrap();
        assert!((attachment.max_length() - 18.0).abs() < 1e-4);
        assert!((attachment.min_distance() - 8.0).abs() < 1e-4);
        gun.release_constraint(&mut physics);
    }

    #[test]
    fn attach_raises_damping_and_remembers_original() {
        let mut physics = MockPhysics::with_wall_at(10.0);
        physics.body.damping = 0.3;
        let mut gun = GrappleGun::new(GrappleConfig::default(), Some(MockPhysics::PLAYER), &physics).unwrap();

        let attachment = gun.attach(Vec3::new(0.0, 0.0, -10.0), &mut physics).unwrap();
        assert_eq!(attachment.original_linear_damping(), 0.3);
        assert_eq!(physics.body.damping, 2.5);

        let released = gun.release_constraint(&mut physics).unwrap();
        assert_eq!(released.original_linear_damping, 0.3);
        assert_eq!(physics.live_constraints(), 0);
        assert!(gun.release_constraint(&mut physics).is_none());
    }
}
