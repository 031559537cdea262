//! Ambient sound classifier
//!
//! Samples a frequency snapshot from an [`AudioSource`] on a fixed
//! cadence, reduces it to a loudness estimate and a dominant band,
//! matches the static environment catalog, and emits the full
//! [`Classification`] to every observer.
//!
//! Capture acquisition is the one operation here that can fail: the
//! collaborator may deny microphone permission. That failure is a value,
//! not a crash; the classifier stays inert and the caller shows a
//! "listening unavailable" state.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use heapless::Vec;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::constants::{
    ANALYSIS_INTERVAL_MS, BAR_COUNT, DEFAULT_SEED, FIRST_SAMPLE_DELAY_MS, LOW_BAND_DENOMINATOR,
    LOW_BAND_NUMERATOR, MAX_OBSERVERS, MID_BAND_NUMERATOR, SPECTRUM_BINS,
};
use crate::environment::{classify_environment, EnvironmentProfile, FrequencyBand};
use crate::errors::{AudioError, AudioResult};
use crate::observer::{Observer, ObserverRegistry, SubscriptionId};
use crate::schedule::RecurringTask;
use crate::spectrum::{band_averages, dominant_band, loudness_estimate, visual_bars, BandAverages};
use crate::time::Timestamp;

/// Collaborator that captures audio and exposes frequency snapshots.
///
/// `open` may fail with a permission denial; once open, reads always
/// succeed.
pub trait AudioSource {
    /// Acquire the capture handle and analysis node
    fn open(&mut self) -> AudioResult<()>;

    /// Fill `out` with the current frequency-magnitude snapshot
    fn read_spectrum(&mut self, out: &mut [u8; SPECTRUM_BINS]);

    /// Release the capture handle. Idempotent.
    fn close(&mut self);
}

/// One emitted classification result
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Classification {
    /// Loudness estimate, clamped to [0, 100]
    pub loudness_db: f32,
    /// Dominant band judged from the per-band averages
    pub dominant: FrequencyBand,
    /// Mean magnitude per band
    pub bands: BandAverages,
    /// Matched catalog entry
    pub environment: &'static EnvironmentProfile,
    /// Peak-normalized bars for the visualization strip
    pub bars: Vec<f32, BAR_COUNT>,
    /// When the snapshot was analyzed
    pub timestamp: Timestamp,
}

/// Tick-driven classifier over an audio source
pub struct AmbientClassifier<S: AudioSource> {
    source: S,
    listening: bool,
    warmup_due: Option<Timestamp>,
    cadence: RecurringTask,
    observers: ObserverRegistry<Classification>,
}

impl<S: AudioSource> AmbientClassifier<S> {
    /// Classifier over `source`, initially inert
    pub fn new(source: S) -> Self {
        Self {
            source,
            listening: false,
            warmup_due: None,
            cadence: RecurringTask::new(ANALYSIS_INTERVAL_MS),
            observers: ObserverRegistry::new(),
        }
    }

    /// Register an observer for classification results
    pub fn subscribe(
        &mut self,
        observer: Box<dyn Observer<Classification>>,
    ) -> AudioResult<SubscriptionId> {
        self.observers
            .subscribe(observer)
            .ok_or(AudioError::TooManyObservers { max: MAX_OBSERVERS })
    }

    /// Cancel a subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Acquire capture and begin the analysis cadence.
    ///
    /// The first regular tick fires one interval after `now`, with one
    /// extra warm-up analysis shortly after start so the UI gets an
    /// early reading. On denial the classifier is left inert.
    pub fn start(&mut self, now: Timestamp) -> AudioResult<()> {
        self.stop();

        if let Err(err) = self.source.open() {
            #[cfg(feature = "log")]
            log::error!("audio capture not acquired: {}", err);
            return Err(err);
        }

        self.listening = true;
        self.warmup_due = Some(now + FIRST_SAMPLE_DELAY_MS);
        self.cadence.start(now);
        Ok(())
    }

    /// Stop analyzing and release capture. Idempotent.
    pub fn stop(&mut self) {
        if self.listening {
            self.source.close();
        }
        self.listening = false;
        self.warmup_due = None;
        self.cadence.stop();
    }

    /// Whether capture is held and the cadence armed
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Run any due analysis. Returns whether one ran.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        if !self.listening {
            return false;
        }

        let mut fired = false;

        if matches!(self.warmup_due, Some(due) if now >= due) {
            self.warmup_due = None;
            self.analyze(now);
            fired = true;
        }

        if self.cadence.poll(now) {
            self.analyze(now);
            fired = true;
        }

        fired
    }

    fn analyze(&mut self, now: Timestamp) {
        let mut bins = [0u8; SPECTRUM_BINS];
        self.source.read_spectrum(&mut bins);

        let loudness_db = loudness_estimate(&bins);
        let bands = band_averages(&bins);
        let dominant = dominant_band(bands);
        let environment = classify_environment(loudness_db, dominant);
        let bars = visual_bars(&bins);

        let result = Classification {
            loudness_db,
            dominant,
            bands,
            environment,
            bars,
            timestamp: now,
        };
        self.observers.notify(&result);
    }
}

/// Synthetic stand-in for the browser's analyser node.
///
/// Generates snapshots from per-band base magnitudes plus seeded jitter.
/// The preset constructors reproduce spectra that classify to each of the
/// five catalog environments, which is all the demo dashboards need.
pub struct SyntheticAudioSource {
    low: u8,
    mid: u8,
    high: u8,
    jitter: u8,
    deny_permission: bool,
    open: bool,
    rng: SmallRng,
}

impl SyntheticAudioSource {
    /// Source with explicit per-band base magnitudes and jitter amplitude
    pub fn new(low: u8, mid: u8, high: u8, jitter: u8, seed: u64) -> Self {
        Self {
            low,
            mid,
            high,
            jitter,
            deny_permission: false,
            open: false,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Low-dominant, very quiet: classifies as Quiet Park
    pub fn quiet_park() -> Self {
        Self::new(50, 10, 5, 5, DEFAULT_SEED)
    }

    /// Balanced, calm: classifies as Residential Street
    pub fn residential_street() -> Self {
        Self::new(55, 55, 55, 8, DEFAULT_SEED)
    }

    /// Mid-dominant traffic: classifies as Busy Street
    pub fn busy_street() -> Self {
        Self::new(60, 85, 50, 10, DEFAULT_SEED)
    }

    /// High-dominant crowd noise: classifies as Shopping Area
    pub fn shopping_area() -> Self {
        Self::new(65, 75, 100, 10, DEFAULT_SEED)
    }

    /// High-dominant and loud: classifies as Loud / Indoor Mall
    pub fn indoor_mall() -> Self {
        Self::new(90, 100, 130, 12, DEFAULT_SEED)
    }

    /// Source whose `open` reports a permission denial
    pub fn denying() -> Self {
        let mut source = Self::quiet_park();
        source.deny_permission = true;
        source
    }
}

impl AudioSource for SyntheticAudioSource {
    fn open(&mut self) -> AudioResult<()> {
        if self.deny_permission {
            return Err(AudioError::PermissionDenied);
        }
        self.open = true;
        Ok(())
    }

    fn read_spectrum(&mut self, out: &mut [u8; SPECTRUM_BINS]) {
        if !self.open {
            out.fill(0);
            return;
        }

        let n = out.len();
        let low_end = n * LOW_BAND_NUMERATOR / LOW_BAND_DENOMINATOR;
        let mid_end = n * MID_BAND_NUMERATOR / LOW_BAND_DENOMINATOR;
        let jitter = self.jitter as i16;

        for (index, bin) in out.iter_mut().enumerate() {
            let base = if index < low_end {
                self.low
            } else if index < mid_end {
                self.mid
            } else {
                self.high
            };
            let wobble = self.rng.gen_range(-jitter..=jitter);
            *bin = (base as i16 + wobble).clamp(0, 255) as u8;
        }
    }

    fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_classify_to_their_environments() {
        let cases: [(SyntheticAudioSource, &str); 5] = [
            (SyntheticAudioSource::quiet_park(), "Quiet Park"),
            (SyntheticAudioSource::residential_street(), "Residential Street"),
            (SyntheticAudioSource::busy_street(), "Busy Street"),
            (SyntheticAudioSource::shopping_area(), "Shopping Area"),
            (SyntheticAudioSource::indoor_mall(), "Loud / Indoor Mall"),
        ];

        for (mut source, expected) in cases {
            source.open().unwrap();
            let mut bins = [0u8; SPECTRUM_BINS];
            source.read_spectrum(&mut bins);

            let db = loudness_estimate(&bins);
            let band = dominant_band(band_averages(&bins));
            let env = classify_environment(db, band);
            assert_eq!(env.name, expected, "loudness {db}, band {band:?}");
        }
    }

    #[test]
    fn denied_permission_leaves_classifier_inert() {
        let mut classifier = AmbientClassifier::new(SyntheticAudioSource::denying());
        assert_eq!(classifier.start(0), Err(AudioError::PermissionDenied));
        assert!(!classifier.is_listening());
        assert!(!classifier.poll(10_000));
    }

    #[test]
    fn warmup_analysis_fires_before_first_interval() {
        let mut classifier = AmbientClassifier::new(SyntheticAudioSource::quiet_park());
        classifier.start(0).unwrap();

        assert!(!classifier.poll(400)); // warm-up not due yet
        assert!(classifier.poll(500)); // warm-up
        assert!(!classifier.poll(600)); // nothing due until the interval
        assert!(classifier.poll(2_000)); // first regular tick
    }

    #[test]
    fn stop_twice_is_a_no_op() {
        let mut classifier = AmbientClassifier::new(SyntheticAudioSource::quiet_park());
        classifier.start(0).unwrap();
        classifier.stop();
        assert!(!classifier.is_listening());
        classifier.stop();
        assert!(!classifier.poll(10_000));
    }

    #[test]
    fn restart_after_stop_reacquires_capture() {
        let mut classifier = AmbientClassifier::new(SyntheticAudioSource::quiet_park());
        classifier.start(0).unwrap();
        classifier.stop();
        classifier.start(20_000).unwrap();
        assert!(classifier.is_listening());
        assert!(classifier.poll(22_000));
    }
}
