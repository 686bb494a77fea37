//! Waypoint routes.

use taxi_core::Point;

/// An ordered list of waypoints and the index of the one being chased.
///
/// A route is replaced wholesale on every dispatch; the only in-place change
/// is the cursor moving forward.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    waypoints: Vec<Point>,
    cursor:    usize,
}

impl Route {
    pub fn new(waypoints: Vec<Point>) -> Self {
        Self { waypoints, cursor: 0 }
    }

    /// Concatenate two legs into one route (`self` first).
    pub fn then(mut self, next: Route) -> Route {
        self.waypoints.extend(next.waypoints);
        self.cursor = 0;
        self
    }

    /// Point the cursor back at the first waypoint.
    #[inline]
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Index of the waypoint currently being chased.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The waypoint currently being chased, or `None` once finished.
    #[inline]
    pub fn current(&self) -> Option<Point> {
        self.waypoints.get(self.cursor).copied()
    }

    /// The final waypoint.
    #[inline]
    pub fn destination(&self) -> Option<Point> {
        self.waypoints.last().copied()
    }

    /// Move the cursor to the next waypoint.  Returns `true` once the cursor
    /// has passed the last one.
    pub fn advance(&mut self) -> bool {
        if self.cursor < self.waypoints.len() {
            self.cursor += 1;
        }
        self.is_finished()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.waypoints.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
