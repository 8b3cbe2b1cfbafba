pub mod movement;
pub mod planned;

pub use movement::{Movement, MovementKind, MovementStatus};
pub use planned::PlannedMovement;
