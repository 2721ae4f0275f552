//! Seams to the collaborators the mechanic does not own: the controller
//! runtime and the physics engine.

use engine_core::{Quat, Vec3};
use input::{Hand, HapticPulse};
use std::fmt::Debug;

/// Controller signals for one gun, sampled once per frame.
pub trait GrappleInput {
    /// Fire control went down this frame.
    fn fire_edge(&self) -> bool;
    /// Release control went down this frame.
    fn release_edge(&self) -> bool;
    /// Analog fire value (0..=1), drives the aim laser.
    fn fire_analog(&self) -> f32;
    /// Analog grip value (0..=1), drives reeling.
    fn grip_analog(&self) -> f32;
    /// Controller the gun is held in. Haptics for the gun go here.
    fn gun_hand(&self) -> Hand;
    /// Request a vibration on one controller.
    fn vibrate(&mut self, hand: Hand, pulse: HapticPulse);
}

/// A ray query hit.
#[derive(Debug, Clone, PartialEq)]
pub struct GrappleHit {
    pub point: Vec3,
    pub distance: f32,
    /// Display name of the struck object, for diagnostics.
    pub object_name: String,
}

/// Parameters for the swing spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Upper distance bound; the spring pulls back beyond it.
    pub max_distance: f32,
    /// Lower distance bound; keeps the player off the anchor.
    pub min_distance: f32,
    pub stiffness: f32,
    pub damping: f32,
    /// Multiplier on the spring response.
    pub mass_scale: f32,
    /// Whether the solver may pre-process (predict) the constraint. Always
    /// `false` for the grapple: the spring reacts to the integrated state only.
    pub preprocessing: bool,
}

/// Physics services the grapple needs.
///
/// Body accessors return `None` (or do nothing) for a body that no longer
/// exists; the mechanic treats that as "nothing to do" rather than a fault.
pub trait PhysicsBackend {
    /// Handle to a rigid body.
    type Body: Copy + Debug + PartialEq;
    /// Owning reference to a live spring constraint. Consumed on destroy.
    type Constraint: Debug;

    /// First hit along `direction` within `max_distance`, seeing only `layers`.
    fn hook_raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: u32,
    ) -> Option<GrappleHit>;

    /// Create a spring between `body` and the fixed world point `anchor`.
    fn create_spring_constraint(
        &mut self,
        body: Self::Body,
        anchor: Vec3,
        params: &SpringParams,
    ) -> Self::Constraint;

    /// Move the distance bounds of a live spring.
    fn set_constraint_range(
        &mut self,
        constraint: &Self::Constraint,
        min_distance: f32,
        max_distance: f32,
    );

    /// Destroy a spring.
    fn destroy_constraint(&mut self, constraint: Self::Constraint);

    fn has_body(&self, body: Self::Body) -> bool;
    fn body_position(&self, body: Self::Body) -> Option<Vec3>;
    fn body_rotation(&self, body: Self::Body) -> Option<Quat>;
    fn set_body_rotation(&mut self, body: Self::Body, rotation: Quat);
    fn linear_velocity(&self, body: Self::Body) -> Option<Vec3>;
    fn set_linear_velocity(&mut self, body: Self::Body, velocity: Vec3);
    fn angular_velocity(&self, body: Self::Body) -> Option<Vec3>;
    fn set_angular_velocity(&mut self, body: Self::Body, velocity: Vec3);
    fn linear_damping(&self, body: Self::Body) -> Option<f32>;
    fn set_linear_damping(&mut self, body: Self::Body, damping: f32);

    /// Accelerate `body` over the current step of `dt` seconds, independent of its mass.
    fn add_acceleration(&mut self, body: Self::Body, acceleration: Vec3, dt: f32);
}
