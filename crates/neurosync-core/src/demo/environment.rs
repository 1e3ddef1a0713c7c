//! Environment sensing mock and the adaptive-suggestion rules.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use neurosync_types::demo::{
    AdaptiveSuggestion, EnvironmentReading, EnvironmentSnapshot, Lighting, Location, NoiseLevel,
};

const NOISE_LEVELS: [NoiseLevel; 3] = [NoiseLevel::Low, NoiseLevel::Moderate, NoiseLevel::High];
const LIGHTING_LEVELS: [Lighting; 3] = [Lighting::Dark, Lighting::Dim, Lighting::Bright];
const LOCATIONS: [Location; 4] = [
    Location::Home,
    Location::Office,
    Location::Public,
    Location::Commute,
];

/// State shown before the first sensor reading arrives.
pub const INITIAL_READING: EnvironmentReading = EnvironmentReading {
    noise: NoiseLevel::Moderate,
    lighting: Lighting::Bright,
    location: Location::Office,
};

fn pick<T: Copy>(rng: &mut StdRng, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

/// Simulated sensor reading.
pub fn sense_environment(seed: u64) -> EnvironmentReading {
    let mut rng = StdRng::seed_from_u64(seed);
    EnvironmentReading {
        noise: pick(&mut rng, &NOISE_LEVELS),
        lighting: pick(&mut rng, &LIGHTING_LEVELS),
        location: pick(&mut rng, &LOCATIONS),
    }
}

fn suggestion(action: &str, text: &str) -> AdaptiveSuggestion {
    AdaptiveSuggestion {
        action: action.to_string(),
        text: text.to_string(),
    }
}

/// Suggestions for a reading, in display order: noise, lighting, location,
/// then the one that always applies.
pub fn adaptive_suggestions(reading: &EnvironmentReading) -> Vec<AdaptiveSuggestion> {
    let mut out = Vec::with_capacity(4);

    if reading.noise == NoiseLevel::High {
        out.push(suggestion(
            "noise_cancellation",
            "Enable noise cancellation for better focus",
        ));
    }

    match reading.lighting {
        Lighting::Dark => out.push(suggestion(
            "increase_brightness",
            "Increase screen brightness for better visibility",
        )),
        Lighting::Bright => out.push(suggestion(
            "decrease_brightness",
            "Reduce screen brightness for eye comfort",
        )),
        Lighting::Dim => {}
    }

    match reading.location {
        Location::Public => out.push(suggestion(
            "private_audio",
            "Switch to private audio mode for discretion",
        )),
        Location::Commute => out.push(suggestion(
            "travel_mode",
            "Enable travel-friendly interface",
        )),
        Location::Home | Location::Office => {}
    }

    out.push(suggestion(
        "neural_feedback",
        "Adjust neural feedback intensity based on surroundings",
    ));
    out
}

pub fn environment_snapshot(seed: u64) -> EnvironmentSnapshot {
    let reading = sense_environment(seed);
    EnvironmentSnapshot {
        suggestions: adaptive_suggestions(&reading),
        reading,
    }
}
