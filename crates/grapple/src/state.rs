//! Per-gun grapple state.
//!
//! Everything that exists only while hooked lives in one [`Attachment`], so
//! "attached" and "holds a constraint" cannot disagree.

use engine_core::Vec3;

/// A live hook: the anchor, the spring that holds the player to it, and what
/// must be restored on release.
#[derive(Debug)]
pub struct Attachment<C> {
    anchor: Vec3,
    constraint: C,
    max_length: f32,
    min_distance: f32,
    original_linear_damping: f32,
}

impl<C> Attachment<C> {
    pub(crate) fn new(
        anchor: Vec3,
        constraint: C,
        max_length: f32,
        min_distance: f32,
        original_linear_damping: f32,
    ) -> Self {
        Self {
            anchor,
            constraint,
            max_length,
            min_distance,
            original_linear_damping,
        }
    }

    /// World point the rope is fixed to. Never changes during an attachment.
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Current upper bound of the rope.
    pub fn max_length(&self) -> f32 {
        self.max_length
    }

    /// Lower bound of the rope, never above the upper bound.
    pub fn min_distance(&self) -> f32 {
        self.min_distance.min(self.max_length)
    }

    /// Player damping captured just before this attachment.
    pub fn original_linear_damping(&self) -> f32 {
        self.original_linear_damping
    }

    pub(crate) fn set_max_length(&mut self, length: f32) {
        self.max_length = length;
    }

    pub(crate) fn into_parts(self) -> (C, Vec3, f32) {
        (self.constraint, self.anchor, self.original_linear_damping)
    }
}

/// Grapple state owned by one gun.
#[derive(Debug)]
pub struct GrappleState<C> {
    pub(crate) attachment: Option<Attachment<C>>,
}

impl<C> Default for GrappleState<C> {
    fn default() -> Self {
        Self { attachment: None }
    }
}

impl<C> GrappleState<C> {
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    pub fn attachment(&self) -> Option<&Attachment<C>> {
        self.attachment.as_ref()
    }

    pub fn anchor_point(&self) -> Option<Vec3> {
        self.attachment.as_ref().map(Attachment::anchor)
    }

    pub fn constraint(&self) -> Option<&C> {
        self.attachment.as_ref().map(Attachment::constraint)
    }

    pub fn current_max_length(&self) -> Option<f32> {
        self.attachment.as_ref().map(Attachment::max_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unattached() {
        let state: GrappleState<u8> = GrappleState::default();
        assert!(!state.is_attached());
        assert!(state.constraint().is_none());
        assert!(state.anchor_point().is_none());
    }

    #[test]
    fn min_distance_never_exceeds_max_length() {
        let mut a = Attachment::new(Vec3::ZERO, 7u8, 9.0, 4.0, 0.1);
        assert_eq!(a.min_distance(), 4.0);
        a.set_max_length(2.0);
        assert_eq!(a.min_distance(), 2.0);
    }
}
