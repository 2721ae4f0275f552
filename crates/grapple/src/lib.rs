//! VR grapple gun: fire a hook at a surface, swing on a damped spring rope,
//! reel in, and detach with a physics reset.
//!
//! The mechanic talks to the outside world only through two traits:
//! [`GrappleInput`] for controller signals and haptics, and
//! [`PhysicsBackend`] for ray queries, the spring constraint, and the player
//! body. [`PhysicsWorld`](physics::PhysicsWorld) implements the latter with
//! Rapier; [`HandBinding`] adapts [`input::InputState`] to the former.
//!
//! Per frame, call [`GrappleGun::update`] once (edge-triggered fire/release,
//! then visuals) and [`GrappleGun::fixed_update`] once per physics step (reel).

pub mod acquisition;
pub mod backend;
pub mod binding;
pub mod config;
pub mod constraint;
pub mod error;
pub mod gun;
pub mod rapier;
pub mod reel;
pub mod stabilize;
pub mod state;
pub mod visuals;

#[cfg(test)]
mod mock;

pub use acquisition::FireOutcome;
pub use backend::{GrappleHit, GrappleInput, PhysicsBackend, SpringParams};
pub use binding::HandBinding;
pub use config::{FeelProfile, GrappleConfig, LineStyle};
pub use error::GrappleError;
pub use gun::{FrameReport, GrappleGun};
pub use reel::ReelOutcome;
pub use stabilize::ReleaseOutcome;
pub use state::{Attachment, GrappleState};
pub use visuals::{AimTarget, LineSegment, Visuals};

pub use input::{Hand, HapticPulse};
