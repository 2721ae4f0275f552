//! Core engine types and utilities for the grapple sandbox.
//!
//! This crate provides the foundational types used across all engine systems:
//! - Transform and orientation helpers
//! - Time management with a fixed physics step

pub mod time;
pub mod transform;

pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};
