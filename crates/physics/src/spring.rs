//! Damped distance springs between a body and a fixed world point.
//!
//! The world point is a transient fixed body created with the spring and
//! removed with it. The distance between the two anchors is one coupled
//! linear axis. Between `min_distance` and `max_distance` the rope is slack
//! and the joint applies nothing; outside that band a force-based position
//! motor pulls the distance back to the nearest bound. The band check runs
//! before every [`PhysicsWorld::step`].

use crate::PhysicsWorld;
use engine_core::Vec3;
use rapier3d::prelude::*;

/// Parameters of a spring anchored in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSettings {
    pub min_distance: f32,
    pub max_distance: f32,
    pub stiffness: f32,
    pub damping: f32,
}

/// Owning reference to a live spring. Not `Clone`: it is consumed by
/// [`PhysicsWorld::remove_spring`], so it cannot outlive its joint.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a spring leaks its joint and anchor body unless passed to remove_spring"]
pub struct SpringHandle {
    joint: ImpulseJointHandle,
    anchor_body: RigidBodyHandle,
}

impl SpringHandle {
    pub fn anchor_body(&self) -> RigidBodyHandle {
        self.anchor_body
    }
}

/// World-side record of a live spring.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Spring {
    body: RigidBodyHandle,
    anchor_body: RigidBodyHandle,
    settings: SpringSettings,
}

/// Distance the spring pulls toward, or `None` while `distance` is inside
/// `[min, max]` and the rope is slack.
pub fn spring_target(distance: f32, min: f32, max: f32) -> Option<f32> {
    if distance > max {
        Some(max)
    } else if distance < min {
        Some(min)
    } else {
        None
    }
}

fn spring_joint() -> GenericJoint {
    GenericJointBuilder::new(JointAxesMask::empty())
        .coupled_axes(JointAxesMask::LIN_AXES)
        .motor_model(JointAxis::LinX, MotorModel::ForceBased)
        .build()
}

/// Engage or release the motor for the current distance. Returns whether it is engaged.
fn apply_band(joint: &mut GenericJoint, distance: f32, settings: &SpringSettings) -> bool {
    match spring_target(distance, settings.min_distance, settings.max_distance) {
        Some(target) => {
            joint.set_motor_position(JointAxis::LinX, target, settings.stiffness, settings.damping);
            true
        }
        None => {
            joint.motor_axes.remove(JointAxesMask::LIN_X);
            false
        }
    }
}

impl PhysicsWorld {
    /// Connect `body` to a fixed point in world space with a damped spring.
    pub fn insert_spring(
        &mut self,
        body: RigidBodyHandle,
        anchor: Vec3,
        settings: &SpringSettings,
    ) -> SpringHandle {
        let anchor_body = self.add_static_body(anchor);
        let joint = self
            .impulse_joint_set
            .insert(body, anchor_body, spring_joint(), true);
        self.springs.insert(
            joint,
            Spring {
                body,
                anchor_body,
                settings: *settings,
            },
        );
        self.refresh_spring(joint);
        log::debug!(
            "spring inserted: anchor={:?} range=[{:.2}, {:.2}]",
            anchor,
            settings.min_distance,
            settings.max_distance
        );
        SpringHandle { joint, anchor_body }
    }

    /// Move the distance band of a live spring.
    pub fn set_spring_range(&mut self, spring: &SpringHandle, min_distance: f32, max_distance: f32) {
        if let Some(record) = self.springs.get_mut(&spring.joint) {
            record.settings.min_distance = min_distance;
            record.settings.max_distance = max_distance;
        }
        self.refresh_spring(spring.joint);
    }

    /// Current `[min, max]` distance band of a live spring.
    pub fn spring_range(&self, spring: &SpringHandle) -> Option<[f32; 2]> {
        self.springs
            .get(&spring.joint)
            .map(|record| [record.settings.min_distance, record.settings.max_distance])
    }

    /// Whether the spring is currently pulling (its anchors are outside the band).
    pub fn is_spring_engaged(&self, spring: &SpringHandle) -> bool {
        self.impulse_joint_set
            .get(spring.joint)
            .is_some_and(|joint| joint.data.motor_axes.contains(JointAxesMask::LIN_X))
    }

    /// Remove a spring and its anchor body.
    pub fn remove_spring(&mut self, spring: SpringHandle) {
        self.springs.remove(&spring.joint);
        self.impulse_joint_set.remove(spring.joint, true);
        self.remove_body(spring.anchor_body);
    }

    /// Re-check every spring against its band. Called at the start of each step.
    pub(crate) fn update_springs(&mut self) {
        let joints: Vec<ImpulseJointHandle> = self.springs.keys().copied().collect();
        for joint in joints {
            self.refresh_spring(joint);
        }
    }

    fn refresh_spring(&mut self, handle: ImpulseJointHandle) {
        let Some(spring) = self.springs.get(&handle).copied() else {
            return;
        };
        let (Some(body), Some(anchor)) = (
            self.rigid_body_set.get(spring.body),
            self.rigid_body_set.get(spring.anchor_body),
        ) else {
            return;
        };
        let distance = (body.translation() - anchor.translation()).norm();

        let Some(joint) = self.impulse_joint_set.get_mut(handle) else {
            return;
        };
        let was_engaged = joint.data.motor_axes.contains(JointAxesMask::LIN_X);
        let engaged = apply_band(&mut joint.data, distance, &spring.settings);
        if engaged && !was_engaged {
            if let Some(body) = self.rigid_body_set.get_mut(spring.body) {
                body.wake_up(true);
            }
        }
    }
}
