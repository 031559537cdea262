//! Route Walking Example
//!
//! Walks the built-in demo route (E 79th & 5th Ave to the Met Museum)
//! and prints every emitted position sample.
//!
//! The simulator is polled against a stepped clock, so the whole 40-point
//! walk replays instantly; point the same code at `SystemTime` and a
//! sleep loop to watch it in real time.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_walk_route
//! ```

use walkguard_core::{
    lookup::DEMO_ROUTE,
    time::{FixedTime, TimeSource},
    PositionConfig, PositionSample, PositionSimulator, Route, SimulatorState,
};

fn main() {
    println!("WalkGuard Route Walking Example");
    println!("===============================\n");

    let mut sim = PositionSimulator::new(PositionConfig::default());

    sim.subscribe(Box::new(|sample: &PositionSample| {
        let fix = if sample.accuracy_m <= 3.0 { "indoor" } else { "gps" };
        println!(
            "t={:>6}ms  ({:.5}, {:.5})  {:.1} m/s  ±{:.0}m [{}]",
            sample.timestamp, sample.latitude, sample.longitude,
            sample.speed_mps, sample.accuracy_m, fix,
        );
    }))
    .expect("observer slot available");

    let route = Route::from_points(&DEMO_ROUTE).expect("demo route is valid");
    println!("Walking {} waypoints...\n", route.len());

    let mut clock = FixedTime::new(0);
    sim.start(route, clock.now());

    while sim.state() == SimulatorState::Running {
        clock.advance(2_000);
        sim.poll(clock.now());
    }

    println!("\nArrived at the Metropolitan Museum of Art.");
}
