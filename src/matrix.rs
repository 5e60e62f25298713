//! Travel-time matrix owned by a single sequencing run.

/// Practical infinity: stands in for "no known route" and exceeds any
/// plausible real route cost, so cost arithmetic never branches on gaps.
pub const UNREACHABLE: f64 = 1e9;

/// Square, directed matrix of travel durations in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelTimeMatrix {
    rows: Vec<Vec<f64>>,
}

impl TravelTimeMatrix {
    /// Wraps fully populated rows.
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Builds a matrix from rows with gaps; `None` becomes [`UNREACHABLE`].
    pub fn from_sparse(rows: Vec<Vec<Option<f64>>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|value| value.unwrap_or(UNREACHABLE)).collect())
            .collect();
        Self { rows }
    }

    /// Number of points (rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when the matrix is `size` x `size`.
    pub fn is_square_of(&self, size: usize) -> bool {
        self.rows.len() == size && self.rows.iter().all(|row| row.len() == size)
    }

    /// Travel time from one point to another. Out-of-range lookups are unreachable.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(UNREACHABLE)
    }

    /// Number of off-diagonal pairs at or above the sentinel.
    pub fn unreachable_pairs(&self) -> usize {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(j, value)| i != *j && **value >= UNREACHABLE)
                    .count()
            })
            .sum()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}
