//! Constants for the WalkGuard simulation core
//!
//! All tuning values live here with their units in the name. The movement
//! and audio figures reproduce the field-tested demo cadence: one
//! waypoint every two seconds at a slow walking pace, spectrum sampled on
//! the same cadence.

// ============================================================================
// Movement
// ============================================================================

/// Milliseconds between simulator ticks.
///
/// One waypoint per tick at ~15-25 m spacing works out near real walking
/// speed while staying gentle on whatever host loop drives `poll`.
pub const TICK_INTERVAL_MS: u64 = 2_000;

/// Simulated walking pace in m/s while moving.
pub const WALKING_SPEED_MPS: f32 = 1.2;

/// Probability that a tick is spent standing still.
///
/// Models human hesitation (checking a sign, waiting at a curb), not
/// sensor noise. Rolled independently each tick.
pub const PAUSE_PROBABILITY: f32 = 0.10;

/// Reported accuracy near route endpoints, in meters.
///
/// Endpoints sit indoors where Wi-Fi positioning takes over.
pub const ACCURACY_INDOOR_M: f32 = 3.0;

/// Reported accuracy mid-route, in meters. Plain outdoor GPS.
pub const ACCURACY_OUTDOOR_M: f32 = 10.0;

/// Number of waypoints at each end of the route that report indoor
/// accuracy (building entry/exit transitions).
pub const ENDPOINT_WINDOW: usize = 3;

/// Maximum waypoints in a route.
pub const MAX_ROUTE_POINTS: usize = 64;

/// Default RNG seed for the pause roll.
pub const DEFAULT_SEED: u64 = 42;

// ============================================================================
// Audio
// ============================================================================

/// Frequency bins per spectrum snapshot (FFT size 256 gives 128 bins).
pub const SPECTRUM_BINS: usize = 128;

/// Milliseconds between classification ticks.
pub const ANALYSIS_INTERVAL_MS: u64 = 2_000;

/// Delay before the one-off warm-up analysis after `start`, so the UI
/// shows a reading well before the first regular tick.
pub const FIRST_SAMPLE_DELAY_MS: u64 = 500;

/// Scale applied to the spectrum RMS to land on the 0-100 loudness range.
pub const LOUDNESS_SCALE: f32 = 0.7;

/// Upper bound of the loudness estimate.
pub const LOUDNESS_MAX: f32 = 100.0;

/// Low band covers the first fifth of the bins (nature sounds, rumble).
pub const LOW_BAND_NUMERATOR: usize = 1;
/// Low/mid split denominator: low ends at `bins * 1 / 5`.
pub const LOW_BAND_DENOMINATOR: usize = 5;
/// Mid band ends at `bins * 3 / 5`; the high band takes the rest.
pub const MID_BAND_NUMERATOR: usize = 3;

/// Low dominance requires the low average to beat both others by 30%.
pub const LOW_DOMINANCE_RATIO: f32 = 1.3;

/// High dominance requires the high average to beat mid by 10%.
pub const HIGH_DOMINANCE_RATIO: f32 = 1.1;

/// Mid dominance requires the mid average to beat low by 10%.
pub const MID_DOMINANCE_RATIO: f32 = 1.1;

/// Bars in the spectrum visualization strip.
pub const BAR_COUNT: usize = 16;

// ============================================================================
// Observers
// ============================================================================

/// Maximum subscribers per producer. Two dashboards, a map renderer, and
/// headroom.
pub const MAX_OBSERVERS: usize = 8;
