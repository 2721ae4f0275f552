//! Configuration faults. Per-frame operations never fail; see the outcome
//! enums on [`GrappleGun`](crate::GrappleGun) instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrappleError {
    #[error("no player body was provided; the grapple gun cannot activate")]
    MissingPlayerBody,

    #[error("player body {0} does not exist in the physics world")]
    UnknownPlayerBody(String),

    #[error("invalid grapple config: {0}")]
    InvalidConfig(String),

    #[error("could not parse grapple config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("could not serialize grapple config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("could not access grapple config file: {0}")]
    Io(#[from] std::io::Error),
}
