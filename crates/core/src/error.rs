//! Failure modes surfaced by world generation.
//!
//! Every variant is reported before a grid is handed out; generation never
//! returns a partially built world.

use std::result;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A uniform draw was requested over an empty range.
    #[error("invalid random range: low {low} is greater than high {high}")]
    InvalidRange { low: i64, high: i64 },

    /// The map cannot hold even the smallest room.
    #[error("map of {width}x{height} cannot fit a room of minimum side {min_side}")]
    InvalidDimensions { width: usize, height: usize, min_side: u32 },

    /// Rejection sampling ran out of attempts before placing every room.
    #[error("placed only {placed} of {target} rooms after {attempts} attempts")]
    UnreachableRoomCount { placed: usize, target: usize, attempts: u32 },

    #[error("invalid generator config: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = result::Result<T, GenerationError>;
