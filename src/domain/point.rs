use std::collections::HashSet;

/// A logical cell coordinate. `x` and `y` are bounded by the board size
/// once one is fixed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A set of points deduplicated by (x, y). Grows only by addition;
/// insertion order is irrelevant.
#[derive(Default, Debug)]
pub struct PointSet {
    points: HashSet<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point. Returns false (and changes nothing) if the point
    /// is already a member.
    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_insert_keeps_cardinality() {
        let mut set = PointSet::new();
        assert!(set.insert(Point::new(1, 3)));
        assert!(!set.insert(Point::new(1, 3)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_distinct_points_accumulate() {
        let mut set = PointSet::new();
        set.insert(Point::new(0, 0));
        set.insert(Point::new(0, 1));
        set.insert(Point::new(1, 0));
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Point::new(0, 1)));
        assert!(!set.contains(&Point::new(1, 1)));
    }
}
