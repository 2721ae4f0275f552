//! The grapple gun and its two per-frame passes.

use crate::acquisition::FireOutcome;
use crate::backend::{GrappleInput, PhysicsBackend};
use crate::binding::HandBinding;
use crate::config::GrappleConfig;
use crate::error::GrappleError;
use crate::reel::ReelOutcome;
use crate::stabilize::ReleaseOutcome;
use crate::state::GrappleState;
use crate::visuals::Visuals;
use engine_core::Transform;
use input::InputState;

/// What happened during one variable-rate frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Outcome of a fire edge, if one arrived.
    pub fired: Option<FireOutcome>,
    /// Outcome of a release edge, if one arrived.
    pub released: Option<ReleaseOutcome>,
    /// Lines to draw this frame.
    pub visuals: Visuals,
}

/// One equipped grapple gun bound to a player body.
pub struct GrappleGun<P: PhysicsBackend> {
    pub(crate) config: GrappleConfig,
    pub(crate) body: P::Body,
    pub(crate) state: GrappleState<P::Constraint>,
}

impl<P: PhysicsBackend> GrappleGun<P> {
    /// Create an unattached gun. Refuses to activate without a live player body
    /// or with settings that fail validation.
    pub fn new(
        config: GrappleConfig,
        player_body: Option<P::Body>,
        physics: &P,
    ) -> Result<Self, GrappleError> {
        config.validate()?;
        let body = player_body.ok_or(GrappleError::MissingPlayerBody)?;
        if !physics.has_body(body) {
            return Err(GrappleError::UnknownPlayerBody(format!("{:?}", body)));
        }
        log::info!(
            "[Grapple] Ready on {:?} (range {:.1} m, stiffness {:.1})",
            config.hand,
            config.max_distance,
            config.feel.stiffness
        );
        Ok(Self {
            config,
            body,
            state: GrappleState::default(),
        })
    }

    pub fn config(&self) -> &GrappleConfig {
        &self.config
    }

    pub fn body(&self) -> P::Body {
        self.body
    }

    pub fn state(&self) -> &GrappleState<P::Constraint> {
        &self.state
    }

    pub fn is_attached(&self) -> bool {
        self.state.is_attached()
    }

    /// Controller signals for this gun, with the gun on the configured hand.
    pub fn bind<'a>(&self, input: &'a mut InputState) -> HandBinding<'a> {
        HandBinding::new(input, self.config.hand)
    }

    /// Variable-rate pass: react to fire/release edges, then compute visuals.
    /// `muzzle` is the gun tip this frame (forward = aim direction).
    pub fn update(
        &mut self,
        muzzle: &Transform,
        input: &mut impl GrappleInput,
        physics: &mut P,
    ) -> FrameReport {
        let fired = input
            .fire_edge()
            .then(|| self.try_hook(muzzle, input, physics));
        let released = input.release_edge().then(|| self.detach(physics));
        let visuals = self.visuals(muzzle, input.fire_analog(), physics);
        FrameReport {
            fired,
            released,
            visuals,
        }
    }

    /// Fixed-rate pass, once per physics step of `dt` seconds.
    pub fn fixed_update(&mut self, input: &impl GrappleInput, physics: &mut P, dt: f32) -> ReelOutcome {
        self.reel(input.grip_analog(), physics, dt)
    }

    /// Release any live constraint before the gun or the world goes away.
    pub fn shutdown(&mut self, physics: &mut P) -> ReleaseOutcome {
        self.detach(physics)
    }
}

impl<P: PhysicsBackend> Drop for GrappleGun<P> {
    fn drop(&mut self) {
        if self.state.is_attached() {
            log::warn!("[Grapple] Gun dropped while attached; call shutdown() to release the constraint");
        }
    }
}
