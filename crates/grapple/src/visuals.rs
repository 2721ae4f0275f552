//! Rope and aim-laser geometry. Read-only: nothing here mutates the gun or
//! the world.

use crate::backend::PhysicsBackend;
use crate::config::LineStyle;
use crate::gun::GrappleGun;
use engine_core::{Transform, Vec3};

/// A straight two-point line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Where the aim laser ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AimTarget {
    /// On a hookable surface.
    Surface,
    /// At maximum range; a fire now would miss.
    MaxRange,
}

/// Lines to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visuals {
    Hidden,
    Aiming {
        laser: LineSegment,
        target: AimTarget,
        style: LineStyle,
    },
    Attached {
        rope: LineSegment,
        style: LineStyle,
    },
}

impl Visuals {
    /// The rope line, if one is drawn.
    pub fn rope(&self) -> Option<LineSegment> {
        match self {
            Visuals::Attached { rope, .. } => Some(*rope),
            _ => None,
        }
    }

    /// The aim laser line, if one is drawn.
    pub fn laser(&self) -> Option<LineSegment> {
        match self {
            Visuals::Aiming { laser, .. } => Some(*laser),
            _ => None,
        }
    }
}

impl<P: PhysicsBackend> GrappleGun<P> {
    /// Lines for the current state. `fire_analog` is the partial fire pull.
    pub fn visuals(&self, muzzle: &Transform, fire_analog: f32, physics: &P) -> Visuals {
        if let Some(anchor) = self.state.anchor_point() {
            return Visuals::Attached {
                rope: LineSegment {
                    start: muzzle.position,
                    end: anchor,
                },
                style: self.config.rope_style,
            };
        }

        if !self.config.feel.include_aim_laser
            || fire_analog.is_nan()
            || fire_analog <= self.config.aim_threshold
        {
            return Visuals::Hidden;
        }

        let origin = muzzle.position;
        let direction = muzzle.forward();
        let (end, target) = match physics.hook_raycast(
            origin,
            direction,
            self.config.max_distance,
            self.config.layers,
        ) {
            Some(hit) => (hit.point, AimTarget::Surface),
            None => (origin + direction * self.config.max_distance, AimTarget::MaxRange),
        };
        Visuals::Aiming {
            laser: LineSegment { start: origin, end },
            target,
            style: self.config.aim_style,
        }
    }
}
