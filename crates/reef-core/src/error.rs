//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("cannot place {requested} organisms: only {available} empty cells")]
    Overcrowded { requested: usize, available: usize },
}
