//! Error types for the simulation core
//!
//! Errors are small `Copy` values with `&'static str` reasons so they can
//! be returned from tick paths and stored without allocation. Nothing here
//! is fatal to the process: every failure degrades to "producer emits no
//! updates", which the calling UI must represent visibly.

use thiserror_no_std::Error;

/// Result type for position simulation operations
pub type SimResult<T> = Result<T, SimulationError>;

/// Result type for ambient audio operations
pub type AudioResult<T> = Result<T, AudioError>;

/// Position simulator errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// A route needs at least one waypoint to place the walker
    #[error("route contains no waypoints")]
    EmptyRoute,

    /// Route exceeds the fixed waypoint capacity
    #[error("route has {len} waypoints, capacity is {max}")]
    RouteTooLong {
        /// Waypoints in the rejected route
        len: usize,
        /// Fixed route capacity
        max: usize,
    },

    /// Subscriber registry is full
    #[error("observer capacity {max} reached")]
    TooManyObservers {
        /// Fixed observer capacity
        max: usize,
    },
}

/// Ambient classifier errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioError {
    /// The capture collaborator refused access to the microphone.
    ///
    /// Surfaced as a value so the caller can leave the classifier inert
    /// and show a "listening unavailable" state instead of crashing.
    #[error("microphone permission denied")]
    PermissionDenied,

    /// Capture hardware or backend is missing
    #[error("audio capture unavailable: {reason}")]
    CaptureUnavailable {
        /// Backend-specific explanation
        reason: &'static str,
    },

    /// Subscriber registry is full
    #[error("observer capacity {max} reached")]
    TooManyObservers {
        /// Fixed observer capacity
        max: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SimulationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyRoute =>
                defmt::write!(fmt, "route contains no waypoints"),
            Self::RouteTooLong { len, max } =>
                defmt::write!(fmt, "route has {} waypoints, capacity {}", len, max),
            Self::TooManyObservers { max } =>
                defmt::write!(fmt, "observer capacity {} reached", max),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AudioError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::PermissionDenied =>
                defmt::write!(fmt, "microphone permission denied"),
            Self::CaptureUnavailable { reason } =>
                defmt::write!(fmt, "audio capture unavailable: {}", reason),
            Self::TooManyObservers { max } =>
                defmt::write!(fmt, "observer capacity {} reached", max),
        }
    }
}
