use super::Point;

/// The live cells of one generation. Positionally fixed as received,
/// semantically a set.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    points: Vec<Point>,
}

impl Snapshot {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// A finite, index-addressable sequence of generation snapshots,
/// produced once per submission and immutable thereafter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotSequence {
    snapshots: Vec<Snapshot>,
}

impl SnapshotSequence {
    pub fn new(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    /// The degenerate sequence of length 0 (e.g. after a gateway failure).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }
}
