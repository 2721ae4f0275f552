//! Deterministic backend and input for unit tests.

use crate::backend::{GrappleHit, GrappleInput, PhysicsBackend, SpringParams};
use engine_core::{Quat, Vec3};
use input::{Hand, HapticPulse};
use physics::CollisionGroup;
use std::collections::HashMap;

/// Infinite one-sided plane, hit only from the side its normal faces.
#[derive(Debug, Clone)]
pub struct MockSurface {
    pub name: String,
    pub point: Vec3,
    pub normal: Vec3,
    pub layers: u32,
}

#[derive(Debug, Clone)]
pub struct MockBody {
    pub position: Vec3,
    pub rotation: Quat,
    pub linvel: Vec3,
    pub angvel: Vec3,
    pub damping: f32,
    pub accelerations: Vec<Vec3>,
    pub acceleration_steps: Vec<f32>,
}

impl Default for MockBody {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            linvel: Vec3::ZERO,
            angvel: Vec3::ZERO,
            damping: 0.1,
            accelerations: Vec::new(),
            acceleration_steps: Vec::new(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct MockSpring(pub u32);

#[derive(Debug, Clone)]
pub struct MockSpringState {
    pub anchor: Vec3,
    pub params: SpringParams,
    pub range: [f32; 2],
}

#[derive(Debug, Default)]
pub struct MockPhysics {
    pub body: MockBody,
    pub surfaces: Vec<MockSurface>,
    pub springs: HashMap<u32, MockSpringState>,
    pub springs_created: u32,
}

impl MockPhysics {
    pub const PLAYER: u32 = 1;

    /// Player at the origin facing a wall `distance` meters down -Z.
    pub fn with_wall_at(distance: f32) -> Self {
        let mut physics = Self::default();
        physics.add_surface("Wall", Vec3::new(0.0, 0.0, -distance), Vec3::Z, CollisionGroup::Environment.bits());
        physics
    }

    pub fn add_surface(&mut self, name: &str, point: Vec3, normal: Vec3, layers: u32) {
        self.surfaces.push(MockSurface {
            name: name.to_string(),
            point,
            normal: normal.normalize(),
            layers,
        });
    }

    pub fn live_constraints(&self) -> usize {
        self.springs.len()
    }

    pub fn only_spring(&self) -> &MockSpringState {
        assert_eq!(self.springs.len(), 1, "expected exactly one live spring");
        self.springs.values().next().unwrap()
    }
}

impl PhysicsBackend for MockPhysics {
    type Body = u32;
    type Constraint = MockSpring;

    fn hook_raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: u32,
    ) -> Option<GrappleHit> {
        let dir = direction.normalize_or_zero();
        self.surfaces
            .iter()
            .filter(|s| s.layers & layers != 0)
            .filter_map(|s| {
                let denom = dir.dot(s.normal);
                if denom >= 0.0 {
                    return None;
                }
                let t = (s.point - origin).dot(s.normal) / denom;
                (t >= 0.0 && t <= max_distance).then(|| GrappleHit {
                    point: origin + dir * t,
                    distance: t,
                    object_name: s.name.clone(),
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    fn create_spring_constraint(&mut self, body: u32, anchor: Vec3, params: &SpringParams) -> MockSpring {
        assert_eq!(body, Self::PLAYER);
        self.springs_created += 1;
        let id = self.springs_created;
        self.springs.insert(
            id,
            MockSpringState {
                anchor,
                params: *params,
                range: [params.min_distance, params.max_distance],
            },
        );
        MockSpring(id)
    }

    fn set_constraint_range(&mut self, constraint: &MockSpring, min_distance: f32, max_distance: f32) {
        let spring = self
            .springs
            .get_mut(&constraint.0)
            .expect("range set on a destroyed spring");
        spring.range = [min_distance, max_distance];
    }

    fn destroy_constraint(&mut self, constraint: MockSpring) {
        assert!(self.springs.remove(&constraint.0).is_some(), "spring destroyed twice");
    }

    fn has_body(&self, body: u32) -> bool {
        body == Self::PLAYER
    }

    fn body_position(&self, body: u32) -> Option<Vec3> {
        self.has_body(body).then_some(self.body.position)
    }

    fn body_rotation(&self, body: u32) -> Option<Quat> {
        self.has_body(body).then_some(self.body.rotation)
    }

    fn set_body_rotation(&mut self, _body: u32, rotation: Quat) {
        self.body.rotation = rotation;
    }

    fn linear_velocity(&self, body: u32) -> Option<Vec3> {
        self.has_body(body).then_some(self.body.linvel)
    }

    fn set_linear_velocity(&mut self, _body: u32, velocity: Vec3) {
        self.body.linvel = velocity;
    }

    fn angular_velocity(&self, body: u32) -> Option<Vec3> {
        self.has_body(body).then_some(self.body.angvel)
    }

    fn set_angular_velocity(&mut self, _body: u32, velocity: Vec3) {
        self.body.angvel = velocity;
    }

    fn linear_damping(&self, body: u32) -> Option<f32> {
        self.has_body(body).then_some(self.body.damping)
    }

    fn set_linear_damping(&mut self, _body: u32, damping: f32) {
        self.body.damping = damping;
    }

    fn add_acceleration(&mut self, _body: u32, acceleration: Vec3, dt: f32) {
        self.body.accelerations.push(acceleration);
        self.body.acceleration_steps.push(dt);
    }
}

/// One frame of controller signals, plus every haptic request received.
#[derive(Debug, Default, Clone)]
pub struct MockInput {
    pub hand: Hand,
    pub fire_edge: bool,
    pub release_edge: bool,
    pub fire: f32,
    pub grip: f32,
    pub haptics: Vec<(Hand, HapticPulse)>,
}

impl GrappleInput for MockInput {
    fn fire_edge(&self) -> bool {
        self.fire_edge
    }

    fn release_edge(&self) -> bool {
        self.release_edge
    }

    fn fire_analog(&self) -> f32 {
        self.fire
    }

    fn grip_analog(&self) -> f32 {
        self.grip
    }

    fn gun_hand(&self) -> Hand {
        self.hand
    }

    fn vibrate(&mut self, hand: Hand, pulse: HapticPulse) {
        self.haptics.push((hand, pulse));
    }
}
