//! Companion Walk Example
//!
//! Composes both producers the way a dashboard would: resolve a typed
//! destination, start the walk, keep the classifier listening, and poll
//! both from one cooperative loop. The producers are caller-owned
//! instances; nothing global, no host timers.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_companion_walk
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use walkguard_core::{
    lookup::{resolve_destination, DEMO_ROUTE},
    time::{FixedTime, TimeSource},
    AmbientClassifier, Classification, PositionConfig, PositionSample, PositionSimulator, Route,
    SimulatorState, SyntheticAudioSource,
};

fn main() {
    println!("WalkGuard Companion Walk Example");
    println!("================================\n");

    let destination = resolve_destination("take me to the met");
    println!("Destination: {}\n", destination.name);

    let mut sim = PositionSimulator::new(PositionConfig::default());
    let mut classifier = AmbientClassifier::new(SyntheticAudioSource::busy_street());

    // Shared "dashboard state" both observers write into.
    let ambient_line: Rc<RefCell<String>> = Rc::new(RefCell::new("listening...".into()));

    let line = Rc::clone(&ambient_line);
    classifier
        .subscribe(Box::new(move |result: &Classification| {
            *line.borrow_mut() = format!(
                "{} ({:.0} dB, {})",
                result.environment.name,
                result.loudness_db,
                result.dominant.name(),
            );
        }))
        .expect("observer slot available");

    let line = Rc::clone(&ambient_line);
    sim.subscribe(Box::new(move |sample: &PositionSample| {
        println!(
            "({:.5}, {:.5})  ±{:>2.0}m   ambient: {}",
            sample.latitude,
            sample.longitude,
            sample.accuracy_m,
            line.borrow(),
        );
    }))
    .expect("observer slot available");

    let route = Route::from_points(&DEMO_ROUTE).expect("demo route is valid");

    let mut clock = FixedTime::new(0);
    classifier.start(clock.now()).expect("synthetic capture never denies");
    sim.start(route, clock.now());

    // One cooperative timeline: step the clock, poll both producers.
    while sim.state() == SimulatorState::Running {
        clock.advance(500);
        classifier.poll(clock.now());
        sim.poll(clock.now());
    }

    classifier.stop();
    println!("\nArrived. Caregiver dashboard shows the walk complete.");
}
