mod point;
mod snapshot;
pub mod coords;

pub use point::{Point, PointSet};
pub use snapshot::{Snapshot, SnapshotSequence};
