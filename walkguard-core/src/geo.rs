//! Geographic primitives: waypoints and routes
//!
//! A [`Route`] is an ordered, finite list of waypoints spaced roughly
//! 15-25 m apart, immutable once built. The caller owns the route and
//! hands it to the simulator at `start`; validation happens at
//! construction so the tick path never sees an empty point list.

use heapless::Vec;

use crate::constants::MAX_ROUTE_POINTS;
use crate::errors::{SimResult, SimulationError};

/// A single waypoint in WGS-84 degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl GeoPoint {
    /// Construct a waypoint
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An ordered walking path with at least one waypoint
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    points: Vec<GeoPoint, MAX_ROUTE_POINTS>,
}

impl Route {
    /// Build a route from a point list.
    ///
    /// Rejects empty lists (`EmptyRoute`) and lists over capacity
    /// (`RouteTooLong`). A single-point route is accepted; the walker
    /// arrives on its first tick.
    pub fn from_points(points: &[GeoPoint]) -> SimResult<Self> {
        if points.is_empty() {
            return Err(SimulationError::EmptyRoute);
        }

        let mut route = Vec::new();
        route
            .extend_from_slice(points)
            .map_err(|_| SimulationError::RouteTooLong {
                len: points.len(),
                max: MAX_ROUTE_POINTS,
            })?;

        Ok(Self { points: route })
    }

    /// Number of waypoints
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a validated route; present for completeness
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Waypoint at `index`, if in range
    pub fn get(&self, index: usize) -> Option<GeoPoint> {
        self.points.get(index).copied()
    }

    /// First waypoint (the start of the walk)
    pub fn first(&self) -> GeoPoint {
        self.points[0]
    }

    /// Index of the final waypoint
    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    /// The full point list, for map rendering
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}
