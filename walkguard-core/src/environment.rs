//! Ambient environment catalog
//!
//! A static, ordered list of five named noise profiles (quiet → loud),
//! each with a loudness range and a preferred dominant band. The catalog
//! is configuration, never mutated at runtime.

/// Dominant frequency band of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrequencyBand {
    /// Rumble and nature sounds dominate
    Low,
    /// Traffic and speech dominate
    Mid,
    /// Crowds, music, chatter dominate
    High,
    /// No band stands out
    Balanced,
}

impl FrequencyBand {
    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            FrequencyBand::Low => "low",
            FrequencyBand::Mid => "mid",
            FrequencyBand::High => "high",
            FrequencyBand::Balanced => "balanced",
        }
    }
}

/// One named ambient-noise profile
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnvironmentProfile {
    /// Display name
    pub name: &'static str,
    /// One-line description for the dashboard card
    pub description: &'static str,
    /// Lower bound of the matching loudness range, inclusive
    pub min_db: f32,
    /// Upper bound of the matching loudness range, inclusive
    pub max_db: f32,
    /// Dominant band this environment prefers
    pub band: FrequencyBand,
}

impl EnvironmentProfile {
    /// Whether `db` falls inside this profile's loudness range
    pub fn matches_range(&self, db: f32) -> bool {
        db >= self.min_db && db <= self.max_db
    }
}

/// The five known environments, ordered quiet → loud.
///
/// The Shopping Area and Indoor Mall ranges deliberately overlap;
/// classification order decides between them.
pub static ENVIRONMENT_CATALOG: [EnvironmentProfile; 5] = [
    EnvironmentProfile {
        name: "Quiet Park",
        description: "Near trees, low ambient noise",
        min_db: 0.0,
        max_db: 30.0,
        band: FrequencyBand::Low,
    },
    EnvironmentProfile {
        name: "Residential Street",
        description: "Calm neighborhood, light activity",
        min_db: 30.0,
        max_db: 45.0,
        band: FrequencyBand::Balanced,
    },
    EnvironmentProfile {
        name: "Busy Street",
        description: "Traffic and pedestrian sounds",
        min_db: 45.0,
        max_db: 60.0,
        band: FrequencyBand::Mid,
    },
    EnvironmentProfile {
        name: "Shopping Area",
        description: "Crowds, music, and chatter",
        min_db: 55.0,
        max_db: 70.0,
        band: FrequencyBand::High,
    },
    EnvironmentProfile {
        name: "Loud / Indoor Mall",
        description: "High noise, echoes, many voices",
        min_db: 65.0,
        max_db: 100.0,
        band: FrequencyBand::High,
    },
];

/// Match a loudness estimate and dominant band against the catalog.
///
/// Scans in catalog order, remembering the first range match as the
/// fallback. A range match whose preferred band equals `band` returns
/// immediately. When no range matches at all, the first catalog entry is
/// returned, so every input classifies to exactly one environment.
pub fn classify_environment(db: f32, band: FrequencyBand) -> &'static EnvironmentProfile {
    let mut fallback: Option<&'static EnvironmentProfile> = None;

    for profile in ENVIRONMENT_CATALOG.iter() {
        if profile.matches_range(db) {
            if profile.band == band {
                return profile;
            }
            fallback.get_or_insert(profile);
        }
    }

    fallback.unwrap_or(&ENVIRONMENT_CATALOG[0])
}
