//! Rigid body state accessors in glam types.
//!
//! Every accessor is a no-op (or `None`) for a handle that no longer exists,
//! so per-frame callers never have to special-case a removed body.

use crate::PhysicsWorld;
use engine_core::{Quat, Vec3};
use rapier3d::na::{Quaternion, UnitQuaternion};
use rapier3d::prelude::*;

impl PhysicsWorld {
    /// Whether the handle refers to a live rigid body.
    pub fn contains_body(&self, handle: RigidBodyHandle) -> bool {
        self.rigid_body_set.contains(handle)
    }

    /// World position of a body's origin.
    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.rigid_body_set.get(handle).map(|body| {
            let t = body.translation();
            Vec3::new(t.x, t.y, t.z)
        })
    }

    pub fn body_rotation(&self, handle: RigidBodyHandle) -> Option<Quat> {
        self.rigid_body_set.get(handle).map(|body| {
            let r = body.rotation();
            Quat::from_xyzw(r.i, r.j, r.k, r.w)
        })
    }

    pub fn set_body_rotation(&mut self, handle: RigidBodyHandle, rotation: Quat) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            let q = UnitQuaternion::new_normalize(Quaternion::new(
                rotation.w, rotation.x, rotation.y, rotation.z,
            ));
            body.set_rotation(q, true);
        }
    }

    pub fn linear_velocity(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.rigid_body_set.get(handle).map(|body| {
            let v = body.linvel();
            Vec3::new(v.x, v.y, v.z)
        })
    }

    pub fn set_linear_velocity(&mut self, handle: RigidBodyHandle, velocity: Vec3) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_linvel(vector![velocity.x, velocity.y, velocity.z], true);
        }
    }

    pub fn angular_velocity(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.rigid_body_set.get(handle).map(|body| {
            let w = body.angvel();
            Vec3::new(w.x, w.y, w.z)
        })
    }

    pub fn set_angular_velocity(&mut self, handle: RigidBodyHandle, velocity: Vec3) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_angvel(vector![velocity.x, velocity.y, velocity.z], true);
        }
    }

    pub fn linear_damping(&self, handle: RigidBodyHandle) -> Option<f32> {
        self.rigid_body_set.get(handle).map(|body| body.linear_damping())
    }

    pub fn set_linear_damping(&mut self, handle: RigidBodyHandle, damping: f32) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_linear_damping(damping);
        }
    }

    /// Accelerate a body over a step of `dt` seconds, independent of its mass.
    ///
    /// Rapier user forces persist until reset, so the acceleration is applied as
    /// the velocity change it produces over the step.
    pub fn apply_acceleration(&mut self, handle: RigidBodyHandle, acceleration: Vec3, dt: f32) {
        debug_assert!(
            (dt - self.integration_parameters.dt).abs() < 1e-4,
            "acceleration step {} differs from integration step {}",
            dt,
            self.integration_parameters.dt
        );
        let dv = acceleration * dt;
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            let v = *body.linvel() + vector![dv.x, dv.y, dv.z];
            body.set_linvel(v, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceleration_is_mass_independent() {
        let mut world = PhysicsWorld::new();
        world.set_timestep(0.5);
        let light = world.add_dynamic_body(Vec3::ZERO);
        world.add_box_collider(light, Vec3::splat(0.1));
        let heavy = world.add_dynamic_body(Vec3::new(5.0, 0.0, 0.0));
        world.add_box_collider(heavy, Vec3::splat(1.0));

        world.apply_acceleration(light, Vec3::X * 4.0, 0.5);
        world.apply_acceleration(heavy, Vec3::X * 4.0, 0.5);

        let vl = world.linear_velocity(light).unwrap();
        let vh = world.linear_velocity(heavy).unwrap();
        assert!((vl.x - 2.0).abs() < 1e-3);
        assert!((vh.x - 2.0).abs() < 1e-3);
    }

    #[test]
    fn acceleration_scales_with_step() {
        let mut world = PhysicsWorld::new();
        world.set_timestep(1.0 / 30.0);
        let body = world.add_dynamic_body(Vec3::ZERO);
        world.apply_acceleration(body, Vec3::NEG_Z * 10.0, 1.0 / 30.0);
        let v = world.linear_velocity(body).unwrap();
        assert!((v.z + 10.0 / 30.0).abs() < 1e-5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "differs from integration step")]
    fn acceleration_step_must_match_world_step() {
        let mut world = PhysicsWorld::new();
        world.set_timestep(1.0 / 60.0);
        let body = world.add_dynamic_body(Vec3::ZERO);
        world.apply_acceleration(body, Vec3::X, 1.0 / 30.0);
    }

    #[test]
    fn velocity_round_trip_and_removed_body() {
        let mut world = PhysicsWorld::new();
        let body = world.add_dynamic_body(Vec3::ZERO);
        world.add_box_collider(body, Vec3::splat(0.5));
        world.set_angular_velocity(body, Vec3::new(0.0, 3.0, 1.0));
        assert_eq!(world.angular_velocity(body), Some(Vec3::new(0.0, 3.0, 1.0)));

        world.remove_body(body);
        assert!(!world.contains_body(body));
        assert_eq!(world.linear_velocity(body), None);
        world.set_linear_damping(body, 1.0);
    }

    #[test]
    fn rotation_round_trip() {
        let mut world = PhysicsWorld::new();
        let body = world.add_dynamic_body(Vec3::ZERO);
        let q = Quat::from_rotation_y(0.8) * Quat::from_rotation_x(0.3);
        world.set_body_rotation(body, q);
        let back = world.body_rotation(body).unwrap();
        assert!(back.angle_between(q) < 1e-4);
    }
}
