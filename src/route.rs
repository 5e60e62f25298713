//! Route: ordered point indices anchored at fixed start and end.

/// An ordered sequence of matrix point indices.
///
/// The first and last indices are the fixed start/end anchors; the interior
/// holds each stop index exactly once. A route always has at least the two
/// anchors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    indices: Vec<usize>,
}

impl Route {
    /// Builds `[start, interior..., end]`.
    pub fn new(start: usize, interior: impl IntoIterator<Item = usize>, end: usize) -> Self {
        let mut indices = vec![start];
        indices.extend(interior);
        indices.push(end);
        Self { indices }
    }

    pub fn start(&self) -> usize {
        self.indices[0]
    }

    pub fn end(&self) -> usize {
        self.indices[self.indices.len() - 1]
    }

    /// Stop indices between the anchors, in visiting order.
    pub fn interior(&self) -> &[usize] {
        &self.indices[1..self.indices.len() - 1]
    }

    /// Full sequence including anchors.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// A route is never empty; it always holds its anchors.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of stops between the anchors.
    pub fn stop_count(&self) -> usize {
        self.indices.len() - 2
    }

    /// Returns a new route with positions `i..=j` reversed.
    ///
    /// Both cut points must be interior positions; anchors never move.
    pub fn with_reversed_segment(&self, i: usize, j: usize) -> Route {
        debug_assert!(i >= 1 && i <= j && j < self.indices.len() - 1);
        let mut indices = self.indices.clone();
        indices[i..=j].reverse();
        Route { indices }
    }
}
