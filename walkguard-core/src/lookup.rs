//! Static configuration tables
//!
//! The demo route and the named-destination catalog. Both are constant
//! input data: the route feeds the position simulator, the destination
//! table backs the dashboard's free-text destination box.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::geo::GeoPoint;

/// Demo walking route: E 79th St & 5th Ave north along Central Park,
/// east on E 82nd St to the Metropolitan Museum of Art. Waypoints are
/// ~15-25 m apart so one waypoint per 2 s tick reads as a walking pace.
pub static DEMO_ROUTE: [GeoPoint; 40] = [
    // Start: E 79th St & 5th Ave (Upper East Side)
    GeoPoint::new(40.78385, -73.95865),
    GeoPoint::new(40.78405, -73.95860),
    GeoPoint::new(40.78430, -73.95850),
    GeoPoint::new(40.78455, -73.95843),
    // North on 5th Avenue, sidewalk along Central Park
    GeoPoint::new(40.78480, -73.95835),
    GeoPoint::new(40.78510, -73.95825),
    GeoPoint::new(40.78540, -73.95815),
    GeoPoint::new(40.78570, -73.95805),
    GeoPoint::new(40.78600, -73.95795),
    GeoPoint::new(40.78630, -73.95785),
    GeoPoint::new(40.78660, -73.95775),
    GeoPoint::new(40.78690, -73.95765),
    GeoPoint::new(40.78720, -73.95755),
    // Passing E 80th St
    GeoPoint::new(40.78750, -73.95745),
    GeoPoint::new(40.78780, -73.95735),
    GeoPoint::new(40.78810, -73.95725),
    GeoPoint::new(40.78840, -73.95715),
    GeoPoint::new(40.78870, -73.95705),
    // Passing E 81st St
    GeoPoint::new(40.78900, -73.95695),
    GeoPoint::new(40.78930, -73.95685),
    GeoPoint::new(40.78960, -73.95675),
    GeoPoint::new(40.78990, -73.95665),
    GeoPoint::new(40.79020, -73.95655),
    // Approaching E 82nd St
    GeoPoint::new(40.79050, -73.95645),
    GeoPoint::new(40.79080, -73.95640),
    GeoPoint::new(40.79100, -73.95635),
    // East on E 82nd St toward the museum
    GeoPoint::new(40.79100, -73.95610),
    GeoPoint::new(40.79100, -73.95580),
    GeoPoint::new(40.79100, -73.95550),
    GeoPoint::new(40.79100, -73.95520),
    GeoPoint::new(40.79100, -73.95490),
    GeoPoint::new(40.79100, -73.95460),
    GeoPoint::new(40.79100, -73.95430),
    GeoPoint::new(40.79100, -73.95400),
    // Museum entrance approach
    GeoPoint::new(40.79102, -73.95370),
    GeoPoint::new(40.79105, -73.95340),
    GeoPoint::new(40.79108, -73.95310),
    GeoPoint::new(40.79110, -73.95290),
    // Arrival: The Metropolitan Museum of Art
    GeoPoint::new(40.79115, -73.95270),
    GeoPoint::new(40.79120, -73.95250),
];

/// A named destination for the free-text destination box
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Destination {
    /// Keyword matched against user input
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Location of the destination
    pub point: GeoPoint,
}

const MET_MUSEUM: GeoPoint = GeoPoint::new(40.79120, -73.95250);
const CENTRAL_PARK: GeoPoint = GeoPoint::new(40.78500, -73.96550);

/// Known destinations, checked in order. Several keys alias the same
/// place so casual phrasings still resolve.
pub static DESTINATIONS: [Destination; 14] = [
    Destination { key: "metropolitan museum", name: "The Metropolitan Museum of Art", point: MET_MUSEUM },
    Destination { key: "met museum", name: "The Metropolitan Museum of Art", point: MET_MUSEUM },
    Destination { key: "the met", name: "The Metropolitan Museum of Art", point: MET_MUSEUM },
    Destination { key: "central park", name: "Central Park", point: CENTRAL_PARK },
    Destination { key: "community center", name: "East Side Community Center", point: GeoPoint::new(40.79300, -73.95100) },
    Destination { key: "pharmacy", name: "Oak Street Pharmacy", point: GeoPoint::new(40.78250, -73.95400) },
    Destination { key: "home", name: "Home - 123 Maple St", point: GeoPoint::new(40.78385, -73.95865) },
    Destination { key: "grocery", name: "Greenfield Grocery", point: GeoPoint::new(40.78100, -73.95700) },
    Destination { key: "park", name: "Central Park", point: CENTRAL_PARK },
    Destination { key: "library", name: "East 79th St Library", point: GeoPoint::new(40.78580, -73.95200) },
    Destination { key: "hospital", name: "Lenox Hill Hospital", point: GeoPoint::new(40.79050, -73.95300) },
    Destination { key: "church", name: "St. Ignatius Church", point: GeoPoint::new(40.78680, -73.96100) },
    Destination { key: "cafe", name: "Madison Ave Cafe", point: GeoPoint::new(40.78450, -73.95600) },
    Destination { key: "post office", name: "USPS Post Office", point: GeoPoint::new(40.78300, -73.95900) },
];

/// Resolve free-text input to a destination.
///
/// Case-insensitive substring match in table order, in both directions
/// ("met" finds "met museum", "the met museum please" finds "met
/// museum"). Unrecognized input defaults to the first table entry, the
/// Met Museum, so the demo always has somewhere to walk.
pub fn resolve_destination(query: &str) -> &'static Destination {
    let q: String = query.trim().to_lowercase();

    if !q.is_empty() {
        for destination in DESTINATIONS.iter() {
            if q.contains(destination.key) || destination.key.contains(q.as_str()) {
                return destination;
            }
        }
    }

    &DESTINATIONS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_endpoints_match_the_walk() {
        assert_eq!(DEMO_ROUTE[0], GeoPoint::new(40.78385, -73.95865));
        assert_eq!(DEMO_ROUTE[39], MET_MUSEUM);
    }

    #[test]
    fn resolves_exact_and_partial_queries() {
        assert_eq!(resolve_destination("pharmacy").name, "Oak Street Pharmacy");
        assert_eq!(resolve_destination("The Met").name, "The Metropolitan Museum of Art");
        assert_eq!(
            resolve_destination("take me to central park please").name,
            "Central Park"
        );
    }

    #[test]
    fn table_order_decides_aliased_keys() {
        // "park" alone matches "central park" by reverse containment
        // before reaching the bare "park" entry; both name the same place.
        assert_eq!(resolve_destination("park").name, "Central Park");
    }

    #[test]
    fn unknown_queries_default_to_the_museum() {
        assert_eq!(
            resolve_destination("somewhere new").name,
            "The Metropolitan Museum of Art"
        );
        assert_eq!(resolve_destination("").name, "The Metropolitan Museum of Art");
    }
}
