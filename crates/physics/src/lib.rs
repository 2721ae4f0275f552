//! Physics system using Rapier3D for the grapple sandbox.

pub mod body;
pub mod collision;
pub mod physics_world;
pub mod raycast;
pub mod spring;

pub use collision::*;
pub use physics_world::*;
pub use raycast::*;
pub use spring::*;

// Re-export Rapier for downstream crates
pub use rapier3d;

// Re-export common Rapier types
pub use rapier3d::prelude::{ColliderHandle, ImpulseJointHandle, RigidBodyHandle};
