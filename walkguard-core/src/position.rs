//! GPS position simulator
//!
//! Walks a fixed route one waypoint per tick, with occasional pauses and
//! an indoor/outdoor accuracy model, emitting a position sample to every
//! observer each tick. Movement is tick-driven: a late poll advances one
//! waypoint, never more, regardless of elapsed wall time.
//!
//! State machine: Idle → Running → Arrived (terminal), with `stop`
//! forcing any state back to Idle.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::constants::{
    ACCURACY_INDOOR_M, ACCURACY_OUTDOOR_M, DEFAULT_SEED, ENDPOINT_WINDOW, MAX_OBSERVERS,
    PAUSE_PROBABILITY, TICK_INTERVAL_MS, WALKING_SPEED_MPS,
};
use crate::errors::{SimResult, SimulationError};
use crate::geo::{GeoPoint, Route};
use crate::observer::{Observer, ObserverRegistry, SubscriptionId};
use crate::schedule::RecurringTask;
use crate::time::Timestamp;

/// One emitted position fix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSample {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Simulated ground speed; 0 while paused or stopped
    pub speed_mps: f32,
    /// Estimated fix accuracy in meters
    pub accuracy_m: f32,
    /// When the fix was produced
    pub timestamp: Timestamp,
}

/// Walker lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    /// Not walking; no ticks fire
    Idle,
    /// Walking the route
    Running,
    /// Reached the final waypoint; terminal until the next `start`
    Arrived,
}

/// Tuning for the simulated walk
#[derive(Debug, Clone, Copy)]
pub struct PositionConfig {
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Pace while moving, m/s
    pub walking_speed_mps: f32,
    /// Chance per tick of standing still; set 0.0 for deterministic runs
    pub pause_probability: f32,
    /// Accuracy reported near route endpoints, meters
    pub accuracy_indoor_m: f32,
    /// Accuracy reported mid-route, meters
    pub accuracy_outdoor_m: f32,
    /// Waypoints at each end of the route that report indoor accuracy
    pub endpoint_window: usize,
    /// Seed for the pause roll
    pub seed: u64,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            walking_speed_mps: WALKING_SPEED_MPS,
            pause_probability: PAUSE_PROBABILITY,
            accuracy_indoor_m: ACCURACY_INDOOR_M,
            accuracy_outdoor_m: ACCURACY_OUTDOOR_M,
            endpoint_window: ENDPOINT_WINDOW,
            seed: DEFAULT_SEED,
        }
    }
}

impl PositionConfig {
    /// Config with the pause roll disabled, for reproducible walks
    pub fn without_pauses() -> Self {
        Self {
            pause_probability: 0.0,
            ..Self::default()
        }
    }
}

/// Simulated GPS mover walking a fixed route
pub struct PositionSimulator {
    config: PositionConfig,
    route: Option<Route>,
    progress: usize,
    state: SimulatorState,
    position: GeoPoint,
    speed_mps: f32,
    accuracy_m: f32,
    cadence: RecurringTask,
    rng: SmallRng,
    observers: ObserverRegistry<PositionSample>,
}

impl PositionSimulator {
    /// Simulator with the given tuning
    pub fn new(config: PositionConfig) -> Self {
        Self {
            config,
            route: None,
            progress: 0,
            state: SimulatorState::Idle,
            position: GeoPoint::new(0.0, 0.0),
            speed_mps: 0.0,
            accuracy_m: config.accuracy_outdoor_m,
            cadence: RecurringTask::new(config.tick_interval_ms),
            rng: SmallRng::seed_from_u64(config.seed),
            observers: ObserverRegistry::new(),
        }
    }

    /// Register an observer for position samples
    pub fn subscribe(
        &mut self,
        observer: Box<dyn Observer<PositionSample>>,
    ) -> SimResult<SubscriptionId> {
        self.observers
            .subscribe(observer)
            .ok_or(SimulationError::TooManyObservers { max: MAX_OBSERVERS })
    }

    /// Cancel a subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Begin walking `route` from its first waypoint.
    ///
    /// Any prior run is stopped first. The first tick fires one interval
    /// after `now`.
    pub fn start(&mut self, route: Route, now: Timestamp) {
        self.stop();
        self.position = route.first();
        self.progress = 0;
        self.speed_mps = self.config.walking_speed_mps;
        self.accuracy_m = self.config.accuracy_outdoor_m;
        self.route = Some(route);
        self.state = SimulatorState::Running;
        self.cadence.start(now);
    }

    /// Halt the walk and disarm the cadence.
    ///
    /// Idempotent; safe to call when not running. Forces any state back
    /// to Idle without emitting a sample.
    pub fn stop(&mut self) {
        self.cadence.stop();
        self.speed_mps = 0.0;
        self.state = SimulatorState::Idle;
    }

    /// Run one tick if the cadence has elapsed. Returns whether it did.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        if self.state != SimulatorState::Running {
            return false;
        }
        if self.cadence.poll(now) {
            self.tick(now);
            true
        } else {
            false
        }
    }

    fn tick(&mut self, now: Timestamp) {
        let (len, last_index) = match &self.route {
            Some(route) => (route.len(), route.last_index()),
            None => return,
        };

        // Already at the terminal waypoint (single-point route, or state
        // restored externally): arrive without emitting.
        if self.progress >= last_index {
            self.arrive();
            return;
        }

        if self.rng.gen::<f32>() < self.config.pause_probability {
            // Hesitation: hold position this tick, speed reads zero.
            self.speed_mps = 0.0;
        } else {
            self.speed_mps = self.config.walking_speed_mps;
            self.progress += 1;
            if let Some(point) = self.route.as_ref().and_then(|r| r.get(self.progress)) {
                self.position = point;
            }
        }

        // Endpoints sit indoors: tight Wi-Fi accuracy near either end,
        // loose GPS accuracy in between.
        let window = self.config.endpoint_window;
        self.accuracy_m = if self.progress < window || self.progress + window >= len {
            self.config.accuracy_indoor_m
        } else {
            self.config.accuracy_outdoor_m
        };

        let sample = PositionSample {
            latitude: self.position.lat,
            longitude: self.position.lng,
            speed_mps: self.speed_mps,
            accuracy_m: self.accuracy_m,
            timestamp: now,
        };
        self.observers.notify(&sample);

        // Stepping onto the final waypoint ends the walk in the same
        // tick; no further ticks fire.
        if self.progress >= last_index {
            self.arrive();
        }
    }

    fn arrive(&mut self) {
        self.cadence.stop();
        self.speed_mps = 0.0;
        self.state = SimulatorState::Arrived;
        #[cfg(feature = "log")]
        log::info!(
            "arrived at destination ({:.5}, {:.5})",
            self.position.lat,
            self.position.lng
        );
    }

    /// Current lifecycle state
    pub fn state(&self) -> SimulatorState {
        self.state
    }

    /// Whether the walk is in progress
    pub fn is_moving(&self) -> bool {
        self.state == SimulatorState::Running
    }

    /// Latest position fix
    pub fn current_position(&self) -> GeoPoint {
        self.position
    }

    /// Index of the current waypoint within the route
    pub fn progress(&self) -> usize {
        self.progress
    }
}

impl Default for PositionSimulator {
    fn default() -> Self {
        Self::new(PositionConfig::default())
    }
}
