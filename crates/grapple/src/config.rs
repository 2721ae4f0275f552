//! Grapple tuning. Loaded from a RON file at startup.

use crate::error::GrappleError;
use input::{Hand, HapticPulse};
use physics::CollisionGroup;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the swing feels: spring response and whether the aim laser is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeelProfile {
    /// Spring stiffness.
    pub stiffness: f32,
    /// Spring damping.
    pub damping: f32,
    /// Multiplier on the spring response.
    pub mass_scale: f32,
    /// Draw the aiming laser while the fire control is partially held.
    pub include_aim_laser: bool,
}

impl FeelProfile {
    /// Soft, floaty swing with an aiming laser.
    pub fn soft() -> Self {
        Self {
            stiffness: 50.0,
            damping: 10.0,
            mass_scale: 4.5,
            include_aim_laser: true,
        }
    }

    /// Stiff, snappy swing without a laser.
    pub fn stiff() -> Self {
        Self {
            stiffness: 120.0,
            damping: 25.0,
            mass_scale: 6.0,
            include_aim_laser: false,
        }
    }
}

impl Default for FeelProfile {
    fn default() -> Self {
        Self::soft()
    }
}

/// Color and width of a drawn line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Linear RGBA.
    pub color: [f32; 4],
    /// Width in meters.
    pub width: f32,
}

/// Grapple gun settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrappleConfig {
    /// Longest hook shot in meters.
    #[serde(default = "default_max_distance")]
    pub max_distance: f32,
    /// Collision-group bitmask of surfaces the hook can grab.
    #[serde(default = "default_layers")]
    pub layers: u32,
    #[serde(default)]
    pub feel: FeelProfile,
    /// Reel-in rate in m/s.
    #[serde(default = "default_reel_speed")]
    pub reel_speed: f32,
    /// Shortest rope the reel can reach.
    #[serde(default = "default_min_rope_length")]
    pub min_rope_length: f32,
    /// Pull toward the anchor while reeling, in m/s².
    #[serde(default = "default_pull_force")]
    pub pull_force: f32,
    /// Player linear damping while swinging.
    #[serde(default = "default_swing_linear_damping")]
    pub swing_linear_damping: f32,
    /// Initial max rope length as a fraction of the hook distance.
    #[serde(default = "default_max_length_ratio")]
    pub max_length_ratio: f32,
    /// Min rope length as a fraction of the hook distance.
    #[serde(default = "default_min_length_ratio")]
    pub min_length_ratio: f32,
    /// Grip value above which the reel runs.
    #[serde(default = "default_reel_threshold")]
    pub reel_threshold: f32,
    /// Fire value above which the aim laser shows.
    #[serde(default = "default_aim_threshold")]
    pub aim_threshold: f32,
    /// Hand holding the gun. Release is bound to the other hand.
    #[serde(default)]
    pub hand: Hand,
    #[serde(default = "default_hook_haptic")]
    pub hook_haptic: HapticPulse,
    #[serde(default = "default_rope_style")]
    pub rope_style: LineStyle,
    #[serde(default = "default_aim_style")]
    pub aim_style: LineStyle,
}

fn default_max_distance() -> f32 {
    25.0
}
fn default_layers() -> u32 {
    CollisionGroup::mask(&[CollisionGroup::Environment, CollisionGroup::Hookable])
}
fn default_reel_speed() -> f32 {
    3.0
}
fn default_min_rope_length() -> f32 {
    1.0
}
fn default_pull_force() -> f32 {
    10.0
}
fn default_swing_linear_damping() -> f32 {
    2.5
}
fn default_max_length_ratio() -> f32 {
    0.9
}
fn default_min_length_ratio() -> f32 {
    0.4
}
fn default_reel_threshold() -> f32 {
    0.5
}
fn default_aim_threshold() -> f32 {
    0.1
}
fn default_hook_haptic() -> HapticPulse {
    HapticPulse {
        frequency: 0.3,
        amplitude: 0.5,
        duration: 0.1,
    }
}
fn default_rope_style() -> LineStyle {
    LineStyle {
        color: [0.0, 1.0, 1.0, 1.0],
        width: 0.04,
    }
}
fn default_aim_style() -> LineStyle {
    LineStyle {
        color: [1.0, 0.0, 0.0, 1.0],
        width: 0.005,
    }
}

impl Default for GrappleConfig {
    fn default() -> Self {
        Self {
            max_distance: default_max_distance(),
            layers: default_layers(),
            feel: FeelProfile::default(),
            reel_speed: default_reel_speed(),
            min_rope_length: default_min_rope_length(),
            pull_force: default_pull_force(),
            swing_linear_damping: default_swing_linear_damping(),
            max_length_ratio: default_max_length_ratio(),
            min_length_ratio: default_min_length_ratio(),
            reel_threshold: default_reel_threshold(),
            aim_threshold: default_aim_threshold(),
            hand: Hand::default(),
            hook_haptic: default_hook_haptic(),
            rope_style: default_rope_style(),
            aim_style: default_aim_style(),
        }
    }
}

fn check(ok: bool, what: &str) -> Result<(), GrappleError> {
    if ok {
        Ok(())
    } else {
        Err(GrappleError::InvalidConfig(what.to_string()))
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

fn unit(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

impl GrappleConfig {
    /// Replace the feel profile.
    pub fn with_feel(mut self, feel: FeelProfile) -> Self {
        self.feel = feel;
        self
    }

    /// Reject settings the mechanic cannot honor.
    pub fn validate(&self) -> Result<(), GrappleError> {
        check(positive(self.max_distance), "max_distance must be > 0")?;
        check(self.layers != 0, "layers must name at least one collision group")?;
        check(positive(self.min_rope_length), "min_rope_length must be > 0")?;
        check(non_negative(self.reel_speed), "reel_speed must be >= 0")?;
        check(non_negative(self.pull_force), "pull_force must be >= 0")?;
        check(
            non_negative(self.swing_linear_damping),
            "swing_linear_damping must be >= 0",
        )?;
        check(
            positive(self.min_length_ratio)
                && self.min_length_ratio <= self.max_length_ratio
                && self.max_length_ratio <= 1.0,
            "length ratios must satisfy 0 < min_length_ratio <= max_length_ratio <= 1",
        )?;
        check(unit(self.reel_threshold), "reel_threshold must be within 0..=1")?;
        check(unit(self.aim_threshold), "aim_threshold must be within 0..=1")?;
        check(
            non_negative(self.feel.stiffness) && non_negative(self.feel.damping),
            "feel stiffness and damping must be >= 0",
        )?;
        check(positive(self.feel.mass_scale), "feel mass_scale must be > 0")?;
        Ok(())
    }

    /// Parse a RON document. Missing fields take their defaults.
    pub fn from_ron_str(data: &str) -> Result<Self, GrappleError> {
        let config: Self = ron::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`. If the file is missing or invalid, returns default config.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => match Self::from_ron_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid grapple config at {:?}: {}, using defaults", path, e),
            },
            Err(e) => log::info!("No grapple config at {:?} ({}), using defaults", path, e),
        }
        Self::default()
    }

    /// Save config to `path` as pretty RON.
    pub fn save(&self, path: &Path) -> Result<(), GrappleError> {
        let s = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, s)?;
        Ok(())
    }
}
