//! Test course: flat ground, an overhead beam to swing from, a wall, and a
//! loose crate the hook should ignore.

use engine_core::Vec3;
use physics::rapier3d::prelude::InteractionGroups;
use physics::{CollisionGroup, PhysicsWorld, RigidBodyHandle};

pub const PLAYER_START: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Body mass in kg. The feel presets are tuned against it.
pub const PLAYER_MASS_KG: f32 = 10.0;
/// Muzzle offset from the player body (right hand, chest height, slightly forward).
pub const MUZZLE_OFFSET: Vec3 = Vec3::new(0.25, 0.5, -0.3);
/// Point on the underside of the beam the demo aims at.
pub const BEAM_TARGET: Vec3 = Vec3::new(0.0, 7.75, -6.0);

pub struct Scene {
    pub world: PhysicsWorld,
    pub player: RigidBodyHandle,
}

pub fn build(fixed_dt: f32) -> Scene {
    let mut world = PhysicsWorld::new();
    world.set_timestep(fixed_dt);

    let ground = world.add_ground_plane();
    world.set_collider_name(ground, "Ground");

    let (membership, filter) = CollisionGroup::hookable();
    let beam = world.add_static_cuboid_in_groups(
        Vec3::new(0.0, 8.0, -6.0),
        0.0,
        Vec3::new(4.0, 0.25, 0.25),
        InteractionGroups::new(membership, filter),
    );
    world.set_collider_name(beam, "Beam");

    let wall = world.add_static_cuboid(Vec3::new(0.0, 3.0, -14.0), 0.0, Vec3::new(6.0, 3.0, 0.5));
    world.set_collider_name(wall, "Wall");

    let crate_body = world.add_dynamic_body(Vec3::new(2.0, 0.5, -2.0));
    let crate_collider = world.add_box_collider(crate_body, Vec3::splat(0.5));
    world.set_collider_name(crate_collider, "Crate");

    let (player, _) = world.add_player_body(PLAYER_START, 0.6, 0.3, PLAYER_MASS_KG, 0.1);
    world.update_query_pipeline();

    log::info!(
        "Scene ready: {} bodies, {} colliders",
        world.rigid_body_set.len(),
        world.collider_set.len()
    );
    Scene { world, player }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beam_is_reachable_from_start() {
        let scene = build(1.0 / 60.0);
        let muzzle = PLAYER_START + MUZZLE_OFFSET;
        let hit = scene
            .world
            .raycast_layers(
                muzzle,
                BEAM_TARGET - muzzle,
                25.0,
                CollisionGroup::mask(&[CollisionGroup::Environment, CollisionGroup::Hookable]),
            )
            .expect("beam in range");
        assert_eq!(scene.world.collider_name(hit.collider), Some("Beam"));
    }
}
