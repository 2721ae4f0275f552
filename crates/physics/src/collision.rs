//! Collision groups and filtering.

use rapier3d::prelude::*;

/// Collision groups for different collider roles. Also used as the layer
/// mask for grapple ray queries.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroup {
    /// Static environment (terrain, walls)
    Environment = 1 << 0,
    /// Player character
    Player = 1 << 1,
    /// Surfaces that accept a grapple hook but are not general environment
    Hookable = 1 << 2,
    /// Debris and loose physics objects
    Debris = 1 << 5,
}

impl CollisionGroup {
    /// Raw bit of this group.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Combine several groups into one layer mask.
    pub fn mask(groups: &[CollisionGroup]) -> u32 {
        groups.iter().fold(0, |acc, g| acc | g.bits())
    }

    /// Create a collision group for environment.
    pub fn environment() -> (Group, Group) {
        let membership = Group::from_bits_retain(Self::Environment as u32);
        let filter = Group::ALL;
        (membership, filter)
    }

    /// Create a collision group for hookable surfaces (behave like environment).
    pub fn hookable() -> (Group, Group) {
        let membership = Group::from_bits_retain(Self::Hookable as u32);
        let filter = Group::ALL;
        (membership, filter)
    }

    /// Create a collision group for player.
    pub fn player() -> (Group, Group) {
        let membership = Group::from_bits_retain(Self::Player as u32);
        let filter = Group::from_bits_retain(
            Self::Environment as u32 | Self::Hookable as u32 | Self::Debris as u32,
        );
        (membership, filter)
    }

    /// Interaction groups used by a query that only sees colliders in `layers`.
    pub fn query_groups(layers: u32) -> InteractionGroups {
        InteractionGroups::new(Group::ALL, Group::from_bits_truncate(layers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_combines_bits() {
        let mask = CollisionGroup::mask(&[CollisionGroup::Environment, CollisionGroup::Hookable]);
        assert_eq!(mask, 0b101);
    }

    #[test]
    fn query_groups_reject_player() {
        let query = CollisionGroup::query_groups(CollisionGroup::Environment.bits());
        let (pm, pf) = CollisionGroup::player();
        let (em, ef) = CollisionGroup::environment();
        assert!(!query.test(InteractionGroups::new(pm, pf)));
        assert!(query.test(InteractionGroups::new(em, ef)));
    }
}
