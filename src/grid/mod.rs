pub mod flood;
pub mod model;
pub mod neighbor;
pub mod step;

pub use flood::{flood, regions};
pub use model::Grid;
pub use neighbor::{is_low_point, low_points, NeighborPredicate};
pub use step::{FixedPoint, MoveRule, StepSimulator};
