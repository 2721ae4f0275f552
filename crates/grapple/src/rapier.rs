//! [`PhysicsBackend`] for the Rapier world.

use crate::backend::{GrappleHit, PhysicsBackend, SpringParams};
use engine_core::{Quat, Vec3};
use physics::{PhysicsWorld, RigidBodyHandle, SpringHandle, SpringSettings};

impl PhysicsBackend for PhysicsWorld {
    type Body = RigidBodyHandle;
    type Constraint = SpringHandle;

    fn hook_raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: u32,
    ) -> Option<GrappleHit> {
        self.raycast_layers(origin, direction, max_distance, layers)
            .map(|hit| GrappleHit {
                point: hit.point,
                distance: hit.distance,
                object_name: self
                    .collider_name(hit.collider)
                    .map(str::to_owned)
                    .unwrap_or_else(|| format!("{:?}", hit.collider)),
            })
    }

    // Rapier joints have no per-joint mass scaling, so it scales the motor gains.
    fn create_spring_constraint(
        &mut self,
        body: RigidBodyHandle,
        anchor: Vec3,
        params: &SpringParams,
    ) -> SpringHandle {
        let settings = SpringSettings {
            min_distance: params.min_distance,
            max_distance: params.max_distance,
            stiffness: params.stiffness * params.mass_scale,
            damping: params.damping * params.mass_scale,
        };
        self.insert_spring(body, anchor, &settings)
    }

    fn set_constraint_range(&mut self, constraint: &SpringHandle, min_distance: f32, max_distance: f32) {
        self.set_spring_range(constraint, min_distance, max_distance);
    }

    fn destroy_constraint(&mut self, constraint: SpringHandle) {
        self.remove_spring(constraint);
    }

    fn has_body(&self, body: RigidBodyHandle) -> bool {
        self.contains_body(body)
    }

    fn body_position(&self, body: RigidBodyHandle) -> Option<Vec3> {
        PhysicsWorld::body_position(self, body)
    }

    fn body_rotation(&self, body: RigidBodyHandle) -> Option<Quat> {
        PhysicsWorld::body_rotation(self, body)
    }

    fn set_body_rotation(&mut self, body: RigidBodyHandle, rotation: Quat) {
        PhysicsWorld::set_body_rotation(self, body, rotation);
    }

    fn linear_velocity(&self, body: RigidBodyHandle) -> Option<Vec3> {
        PhysicsWorld::linear_velocity(self, body)
    }

    fn set_linear_velocity(&mut self, body: RigidBodyHandle, velocity: Vec3) {
        PhysicsWorld::set_linear_velocity(self, body, velocity);
    }

    fn angular_velocity(&self, body: RigidBodyHandle) -> Option<Vec3> {
        PhysicsWorld::angular_velocity(self, body)
    }

    fn set_angular_velocity(&mut self, body: RigidBodyHandle, velocity: Vec3) {
        PhysicsWorld::set_angular_velocity(self, body, velocity);
    }

    fn linear_damping(&self, body: RigidBodyHandle) -> Option<f32> {
        PhysicsWorld::linear_damping(self, body)
    }

    fn set_linear_damping(&mut self, body: RigidBodyHandle, damping: f32) {
        PhysicsWorld::set_linear_damping(self, body, damping);
    }

    fn add_acceleration(&mut self, body: RigidBodyHandle, acceleration: Vec3, dt: f32) {
        self.apply_acceleration(body, acceleration, dt);
    }
}
