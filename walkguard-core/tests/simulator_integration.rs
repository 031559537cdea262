//! Integration tests for the position simulator
//!
//! Drives the simulator the way a composition loop would: a stepped
//! clock, subscribed dashboards, and full walks over the demo route.

use std::cell::RefCell;
use std::rc::Rc;

use walkguard_core::{
    lookup::DEMO_ROUTE,
    time::{FixedTime, TimeSource},
    GeoPoint, PositionConfig, PositionSample, PositionSimulator, Route, SimulatorState,
};

fn recording_observer(
    sink: &Rc<RefCell<Vec<PositionSample>>>,
) -> Box<dyn walkguard_core::Observer<PositionSample>> {
    let sink = Rc::clone(sink);
    Box::new(move |sample: &PositionSample| sink.borrow_mut().push(*sample))
}

#[test]
fn full_demo_route_walk() {
    let samples = Rc::new(RefCell::new(Vec::new()));
    let mut sim = PositionSimulator::new(PositionConfig::without_pauses());
    sim.subscribe(recording_observer(&samples)).unwrap();

    let route = Route::from_points(&DEMO_ROUTE).unwrap();
    let len = route.len();

    let mut clock = FixedTime::new(0);
    sim.start(route, clock.now());

    // Poll well past the end; arrival must stop the cadence on its own.
    for _ in 0..(len * 2) {
        clock.advance(2_000);
        sim.poll(clock.now());
    }

    let samples = samples.borrow();
    assert_eq!(samples.len(), len - 1, "one sample per advancing tick");
    assert_eq!(sim.state(), SimulatorState::Arrived);

    // Ends at the museum.
    let last = samples.last().unwrap();
    assert_eq!(last.latitude, DEMO_ROUTE[39].lat);
    assert_eq!(last.longitude, DEMO_ROUTE[39].lng);

    // Samples arrive in tick order with the poll timestamps.
    for (i, sample) in samples.iter().enumerate() {
        assert_eq!(sample.timestamp, 2_000 * (i as u64 + 1));
    }
}

#[test]
fn accuracy_profile_over_a_walk() {
    let samples = Rc::new(RefCell::new(Vec::new()));
    let mut sim = PositionSimulator::new(PositionConfig::without_pauses());
    sim.subscribe(recording_observer(&samples)).unwrap();

    let route = Route::from_points(&DEMO_ROUTE).unwrap();
    let len = route.len();
    sim.start(route, 0);

    let mut now = 0;
    while sim.state() == SimulatorState::Running {
        now += 2_000;
        sim.poll(now);
    }

    for (i, sample) in samples.borrow().iter().enumerate() {
        let index = i + 1; // first sample is waypoint 1
        let tight = index < 3 || index > len - 4;
        let expected = if tight { 3.0 } else { 10.0 };
        assert_eq!(sample.accuracy_m, expected, "waypoint {index}");
    }
}

#[test]
fn pauses_extend_the_walk_but_do_not_skip_waypoints() {
    let samples = Rc::new(RefCell::new(Vec::new()));
    let mut sim = PositionSimulator::new(PositionConfig {
        pause_probability: 0.5,
        seed: 7,
        ..PositionConfig::default()
    });
    sim.subscribe(recording_observer(&samples)).unwrap();

    let points: Vec<GeoPoint> = (0..10).map(|i| GeoPoint::new(0.0, i as f64)).collect();
    sim.start(Route::from_points(&points).unwrap(), 0);

    let mut now = 0;
    for _ in 0..200 {
        now += 2_000;
        if !sim.poll(now) {
            break;
        }
    }
    assert_eq!(sim.state(), SimulatorState::Arrived);

    // Longitudes never decrease and never jump by more than one step.
    let samples = samples.borrow();
    let mut prev = 0.0;
    for sample in samples.iter() {
        let step = sample.longitude - prev;
        assert!(step == 0.0 || step == 1.0, "step {step}");
        if step == 0.0 {
            assert_eq!(sample.speed_mps, 0.0, "paused sample reads zero speed");
        }
        prev = sample.longitude;
    }
    assert_eq!(prev, 9.0);
    assert!(samples.len() >= 9, "pauses only add ticks");
}

#[test]
fn unsubscribed_dashboard_stops_receiving() {
    let kept = Rc::new(RefCell::new(Vec::new()));
    let dropped = Rc::new(RefCell::new(Vec::new()));

    let mut sim = PositionSimulator::new(PositionConfig::without_pauses());
    sim.subscribe(recording_observer(&kept)).unwrap();
    let id = sim.subscribe(recording_observer(&dropped)).unwrap();

    let points = [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(0.0, 2.0),
        GeoPoint::new(0.0, 3.0),
    ];
    sim.start(Route::from_points(&points).unwrap(), 0);

    sim.poll(2_000);
    assert!(sim.unsubscribe(id));

    sim.poll(4_000);
    sim.poll(6_000);

    assert_eq!(kept.borrow().len(), 3);
    assert_eq!(dropped.borrow().len(), 1);
}

#[test]
fn panicking_dashboard_does_not_starve_the_map() {
    let map = Rc::new(RefCell::new(Vec::new()));

    let mut sim = PositionSimulator::new(PositionConfig::without_pauses());
    sim.subscribe(Box::new(|_: &PositionSample| panic!("broken dashboard")))
        .unwrap();
    sim.subscribe(recording_observer(&map)).unwrap();

    let points = [GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)];
    sim.start(Route::from_points(&points).unwrap(), 0);
    sim.poll(2_000);

    assert_eq!(map.borrow().len(), 1);
}

#[test]
fn restart_mid_walk_replaces_the_route() {
    let samples = Rc::new(RefCell::new(Vec::new()));
    let mut sim = PositionSimulator::new(PositionConfig::without_pauses());
    sim.subscribe(recording_observer(&samples)).unwrap();

    let first = [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(0.0, 2.0),
    ];
    sim.start(Route::from_points(&first).unwrap(), 0);
    sim.poll(2_000);

    let second = [GeoPoint::new(5.0, 0.0), GeoPoint::new(5.0, 1.0)];
    sim.start(Route::from_points(&second).unwrap(), 10_000);
    assert_eq!(sim.current_position(), GeoPoint::new(5.0, 0.0));

    sim.poll(12_000);
    assert_eq!(sim.state(), SimulatorState::Arrived);

    let samples = samples.borrow();
    assert_eq!(samples.last().unwrap().latitude, 5.0);
}
