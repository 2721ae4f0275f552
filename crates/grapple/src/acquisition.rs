//! Hook acquisition: the forward ray from the muzzle that decides whether a
//! fire press grabs a surface.

use crate::backend::{GrappleInput, PhysicsBackend};
use crate::gun::GrappleGun;
use engine_core::{Transform, Vec3};

/// Result of a fire press.
#[derive(Debug, Clone, PartialEq)]
pub enum FireOutcome {
    /// The hook struck a surface and the spring is live.
    Hooked {
        anchor: Vec3,
        object_name: String,
        max_distance: f32,
        min_distance: f32,
    },
    /// Nothing hookable within range. Normal outcome, no state change.
    Miss,
    /// Already hooked; the press is ignored.
    AlreadyAttached,
    /// The player body has gone away; nothing to attach.
    NoBody,
}

impl<P: PhysicsBackend> GrappleGun<P> {
    /// Cast from the muzzle along its forward axis and attach on a hit.
    pub fn try_hook(
        &mut self,
        muzzle: &Transform,
        input: &mut impl GrappleInput,
        physics: &mut P,
    ) -> FireOutcome {
        if self.state.is_attached() {
            log::debug!("[Grapple] Fire ignored, already attached");
            return FireOutcome::AlreadyAttached;
        }

        let Some(hit) = physics.hook_raycast(
            muzzle.position,
            muzzle.forward(),
            self.config.max_distance,
            self.config.layers,
        ) else {
            log::debug!("[Grapple] Missed");
            return FireOutcome::Miss;
        };

        let Some(attachment) = self.attach(hit.point, physics) else {
            log::warn!("[Grapple] Player body missing, cannot attach");
            return FireOutcome::NoBody;
        };
        let (max_distance, min_distance) = (attachment.max_length(), attachment.min_distance());

        let hand = input.gun_hand();
        input.vibrate(hand, self.config.hook_haptic);
        log::info!("[Grapple] Hooked to {}", hit.object_name);

        FireOutcome::Hooked {
            anchor: hit.point,
            object_name: hit.object_name,
            max_distance,
            min_distance,
        }
    }
}
