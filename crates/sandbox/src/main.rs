//! Grapple sandbox: headless run of the grapple gun against a Rapier scene,
//! driven by a scripted controller timeline.

mod scene;
mod script;

use anyhow::{Context, Result};
use engine_core::{Time, Transform};
use grapple::{FireOutcome, GrappleConfig, GrappleGun, ReelOutcome, ReleaseOutcome};
use input::InputState;
use script::Script;
use std::path::PathBuf;
use std::time::Duration;

/// Headset refresh rate the sandbox pretends to render at.
const FRAME_RATE_HZ: f64 = 90.0;
const PHYSICS_RATE_HZ: f64 = 60.0;
/// Keep simulating after the last cue so the post-release settle is visible.
const SETTLE_SECONDS: f32 = 1.0;

fn config_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("grapple.ron")
        })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = config_path();
    let config = GrappleConfig::load(&path);
    log::info!("Starting grapple sandbox (config {:?})", path);

    let mut time = Time::new();
    time.set_fixed_rate(PHYSICS_RATE_HZ);
    let scene::Scene { mut world, player } = scene::build(time.fixed_timestep_seconds());

    let mut gun = GrappleGun::new(config, Some(player), &world).context("failed to equip grapple")?;
    let mut input = InputState::new();
    let mut script = Script::swing_demo();
    let frame = Duration::from_secs_f64(1.0 / FRAME_RATE_HZ);
    let end = script.end_time() + SETTLE_SECONDS;

    let mut hooks = 0u32;
    let mut shortest_rope = f32::INFINITY;
    while time.elapsed_seconds() < end {
        time.advance(frame);
        input.begin_frame();
        script.apply_due(time.elapsed_seconds(), &mut input);

        let body = world
            .get_body_transform(player)
            .context("player body vanished")?;
        let mut muzzle = Transform::from_position(body.position + scene::MUZZLE_OFFSET);
        muzzle.look_at(scene::BEAM_TARGET, glam::Vec3::Y);

        let mut binding = gun.bind(&mut input);
        let report = gun.update(&muzzle, &mut binding, &mut world);
        match report.fired {
            Some(FireOutcome::Hooked { .. }) => hooks += 1,
            Some(other) => log::info!("Fire: {:?}", other),
            None => {}
        }
        if let Some(ReleaseOutcome::Detached { anchor }) = report.released {
            log::info!(
                "Released from {:?} at t={:.2}s, player at {:?}",
                anchor,
                time.elapsed_seconds(),
                body.position
            );
        }
        if let Some(laser) = report.visuals.laser() {
            log::trace!("laser {:.2} m", laser.length());
        }

        while time.should_fixed_update() {
            let dt = time.fixed_timestep_seconds();
            if let ReelOutcome::Reeling { length } | ReelOutcome::AtFloor { length } =
                gun.fixed_update(&binding, &mut world, dt)
            {
                shortest_rope = shortest_rope.min(length);
            }
            world.step();
        }

        for request in input.take_haptics() {
            log::info!(
                "Haptic {:?}: frequency {:.2}, amplitude {:.2}, {:.2}s",
                request.hand,
                request.pulse.frequency,
                request.pulse.amplitude,
                request.pulse.duration
            );
        }
    }

    gun.shutdown(&mut world);
    let final_position = world
        .get_body_transform(player)
        .map(|t| t.position)
        .context("player body vanished")?;
    log::info!(
        "Done after {} frames: {} hook(s), shortest rope {}, player at {:?}, {} joint(s) left",
        time.frame_count(),
        hooks,
        if shortest_rope.is_finite() {
            format!("{:.2} m", shortest_rope)
        } else {
            "n/a".to_string()
        },
        final_position,
        world.impulse_joint_set.len()
    );
    Ok(())
}
