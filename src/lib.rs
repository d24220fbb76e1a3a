//! Conway's game of life on a bounded grid.
//!
//! The board is a sparse set of live coordinates over fixed dimensions;
//! dense 0/1 matrices only appear at the I/O boundary. See [`World`].

pub use utils::Pos;
mod utils;

pub use error::WorldError;
mod error;

pub use world::{Matrix, World};
pub mod world;

pub mod io;
