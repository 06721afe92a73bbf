pub mod error;
pub mod types;

pub use error::{GridError, Result};
pub use types::{Coord, Direction, NeighborMode, Neighborhood};
