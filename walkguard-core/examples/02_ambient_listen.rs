//! Ambient Classification Example
//!
//! Runs the classifier over each synthetic audio scene and prints the
//! resulting loudness, dominant band, and matched environment, plus a
//! text rendering of the visualization bars.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_ambient_listen
//! ```

use walkguard_core::{AmbientClassifier, Classification, SyntheticAudioSource};

const BLOCKS: [&str; 5] = [" ", "\u{2581}", "\u{2583}", "\u{2585}", "\u{2588}"];

fn bar_strip(result: &Classification) -> String {
    result
        .bars
        .iter()
        .map(|&b| BLOCKS[((b * 4.0) as usize).min(4)])
        .collect()
}

fn main() {
    println!("WalkGuard Ambient Classification Example");
    println!("========================================\n");

    let scenes: [(&str, SyntheticAudioSource); 5] = [
        ("park bench", SyntheticAudioSource::quiet_park()),
        ("side street", SyntheticAudioSource::residential_street()),
        ("avenue crossing", SyntheticAudioSource::busy_street()),
        ("market stalls", SyntheticAudioSource::shopping_area()),
        ("mall atrium", SyntheticAudioSource::indoor_mall()),
    ];

    for (label, source) in scenes {
        let mut classifier = AmbientClassifier::new(source);
        classifier
            .subscribe(Box::new(move |result: &Classification| {
                println!("{label:>16}:  {:>5.1} dB  {:<8} -> {}",
                    result.loudness_db,
                    result.dominant.name(),
                    result.environment.name,
                );
                println!("{:>16}   [{}]  {}", "", bar_strip(result), result.environment.description);
            }))
            .expect("observer slot available");

        classifier.start(0).expect("synthetic capture never denies");
        classifier.poll(500); // warm-up analysis
        classifier.stop();
    }

    // Denied permission is a value, not a crash.
    let mut denied = AmbientClassifier::new(SyntheticAudioSource::denying());
    match denied.start(0) {
        Ok(()) => unreachable!(),
        Err(err) => println!("\nmicrophone unavailable: {err} (classifier left inert)"),
    }
}
