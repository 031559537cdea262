//! Simulation core for WalkGuard
//!
//! Drives the two synthetic data producers behind the WalkGuard companion
//! dashboards: a GPS route walker and an ambient sound classifier.
//! Designed to run anywhere from a wearable to a desktop demo.
//!
//! Key constraints:
//! - Single cooperative timeline, no threads or timers
//! - Fixed-capacity collections, no allocation per tick
//! - Callers own the clock: every `poll` takes the current timestamp
//!
//! ```no_run
//! use walkguard_core::{PositionSimulator, Route, lookup::DEMO_ROUTE};
//!
//! let mut sim = PositionSimulator::default();
//! let route = Route::from_points(&DEMO_ROUTE).unwrap();
//!
//! sim.subscribe(Box::new(|sample: &walkguard_core::PositionSample| {
//!     // feed the dashboard
//!     let _ = sample.latitude;
//! })).unwrap();
//!
//! sim.start(route, 0);
//! sim.poll(2_000); // one tick: advance one waypoint, notify observers
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod ambient;
pub mod constants;
pub mod environment;
pub mod errors;
pub mod geo;
pub mod lookup;
pub mod observer;
pub mod position;
pub mod schedule;
pub mod spectrum;
pub mod time;

// Public API
pub use ambient::{AmbientClassifier, AudioSource, Classification, SyntheticAudioSource};
pub use environment::{EnvironmentProfile, FrequencyBand};
pub use errors::{AudioError, AudioResult, SimResult, SimulationError};
pub use geo::{GeoPoint, Route};
pub use observer::{Observer, SubscriptionId};
pub use position::{PositionConfig, PositionSample, PositionSimulator, SimulatorState};
pub use time::{TimeSource, Timestamp};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
