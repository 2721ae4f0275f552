//! Reel controller: shortens the rope while the grip is held and pulls the
//! player toward the anchor. Runs on the fixed physics step.

use crate::backend::PhysicsBackend;
use crate::gun::GrappleGun;

/// Result of one fixed step of the reel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReelOutcome {
    /// Not attached, or grip below threshold. Pure spring pendulum.
    Idle,
    /// Rope shortened to `length`.
    Reeling { length: f32 },
    /// Rope is at its shortest; only the pull is applied.
    AtFloor { length: f32 },
}

/// Rope length after reeling for `dt` seconds, never below `floor`.
pub fn reeled_length(current: f32, reel_speed: f32, dt: f32, floor: f32) -> f32 {
    (current - reel_speed * dt).max(floor)
}

impl<P: PhysicsBackend> GrappleGun<P> {
    /// One fixed step of reeling for a grip value of `grip`.
    pub fn reel(&mut self, grip: f32, physics: &mut P, dt: f32) -> ReelOutcome {
        let Some(attachment) = self.state.attachment.as_mut() else {
            return ReelOutcome::Idle;
        };
        if grip.is_nan() || grip <= self.config.reel_threshold {
            return ReelOutcome::Idle;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let floor = self.config.min_rope_length;
        let current = attachment.max_length();
        let length = reeled_length(current, self.config.reel_speed, dt, floor);
        if length < current {
            attachment.set_max_length(length);
            physics.set_constraint_range(attachment.constraint(), attachment.min_distance(), length);
            if length <= floor {
                log::debug!("[Grapple] Reel reached minimum rope length {:.2}", floor);
            }
        }

        if let Some(position) = physics.body_position(self.body) {
            let toward_anchor = (attachment.anchor() - position).normalize_or_zero();
            physics.add_acceleration(self.body, toward_anchor * self.config.pull_force, dt);
        }

        if length <= floor {
            ReelOutcome::AtFloor { length }
        } else {
            ReelOutcome::Reeling { length }
        }
    }
}
