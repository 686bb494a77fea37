//! Route generation.
//!
//! # Pluggability
//!
//! The simulation asks for routes through the [`RouteGenerator`] trait, so a
//! real planner (grid A*, a road graph) could be dropped in without touching
//! dispatch.  The default [`InterpolatedRouter`] is not a planner at all: it
//! walks a straight line and wiggles the waypoints sideways so taxis don't
//! all trace identical rulers across the map.

use taxi_core::Point;
use taxi_fleet::Route;

/// Produces a waypoint route between two map points.
pub trait RouteGenerator {
    fn generate_route(&self, start: Point, end: Point) -> Route;
}

/// Straight-line interpolation with a cosmetic sinusoidal x-offset.
///
/// Produces `steps + 1` waypoints.  Waypoint `i` sits at fraction
/// `i / steps` along the line, shifted by `sin(i * frequency) * amplitude`
/// on the x axis.  The first waypoint is exactly `start`; the last is offset
/// like any other, so the route ends near but not always on `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedRouter {
    pub steps:     u32,
    pub amplitude: f64,
    pub frequency: f64,
}

impl Default for InterpolatedRouter {
    fn default() -> Self {
        Self {
            steps:     10,
            amplitude: 20.0,
            frequency: 0.5,
        }
    }
}

impl RouteGenerator for InterpolatedRouter {
    fn generate_route(&self, start: Point, end: Point) -> Route {
        let steps = self.steps.max(1);
        let waypoints = (0..=steps)
            .map(|i| {
                let t = f64::from(i) / f64::from(steps);
                let mut p = start.lerp(end, t);
                p.x += (f64::from(i) * self.frequency).sin() * self.amplitude;
                p
            })
            .collect();
        Route::new(waypoints)
    }
}
