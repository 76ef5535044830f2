//! Grid ecosystem tick engine.
//!
//! Double-buffered grid plus per-species rules: each tick reads the current
//! generation and writes the next, with a fixed scan order resolving
//! conflicts between organisms processed in the same tick.

pub mod census;
pub mod engine;
pub mod grid;
pub mod rules;
pub mod seed;

pub use census::{count_cells, Census};
pub use engine::TickEngine;
pub use grid::{Grid, GridView, GridViewMut};
pub use seed::{random_fill, SeedCounts};
