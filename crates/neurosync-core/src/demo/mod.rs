//! Seedable generators for the simulated widgets.
//!
//! Every generator takes an explicit seed so the same request always produces
//! the same numbers. Callers that want fresh data pass a new seed per poll.
//!
//! - this module: dashboard gauges (brainwaves, cognitive traits, profile)
//! - `environment`: sensed surroundings and the adaptive-suggestion rules
//! - `dream`: dream journal statistics, analysis and story
//! - `sleep`: the dream-mode sleep cycle

pub mod dream;
pub mod environment;
pub mod sleep;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use neurosync_types::demo::{BrainwaveChart, CognitiveTraits, NeuralTrait, WaveSeries};

/// Samples per brainwave series.
pub const WAVE_SAMPLES: usize = 20;

const WAVE_BANDS: [&str; 3] = ["Alpha", "Beta", "Theta"];

/// Trait name with its inclusive score range.
const PROFILE_TRAITS: [(&str, u8, u8); 4] = [
    ("Creativity", 60, 100),
    ("Memory Retention", 50, 90),
    ("Focus Level", 50, 90),
    ("Emotional Insight", 50, 90),
];

fn percent(rng: &mut StdRng) -> u8 {
    rng.random_range(0..100)
}

/// Alpha, Beta and Theta series over `0s`..`19s`.
pub fn brainwaves(seed: u64) -> BrainwaveChart {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels = (0..WAVE_SAMPLES).map(|i| format!("{i}s")).collect();
    let datasets = WAVE_BANDS
        .iter()
        .map(|band| WaveSeries {
            label: (*band).to_string(),
            data: (0..WAVE_SAMPLES).map(|_| percent(&mut rng)).collect(),
        })
        .collect();

    BrainwaveChart { labels, datasets }
}

pub fn cognitive_traits(seed: u64) -> CognitiveTraits {
    let mut rng = StdRng::seed_from_u64(seed);
    CognitiveTraits {
        focus: percent(&mut rng),
        creativity: percent(&mut rng),
        stress: percent(&mut rng),
        clarity: percent(&mut rng),
        energy: percent(&mut rng),
    }
}

pub fn neural_profile(seed: u64) -> Vec<NeuralTrait> {
    let mut rng = StdRng::seed_from_u64(seed);
    PROFILE_TRAITS
        .iter()
        .map(|(name, low, high)| NeuralTrait {
            name: (*name).to_string(),
            value: rng.random_range(*low..=*high),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brainwaves_shape() {
        let chart = brainwaves(7);
        assert_eq!(chart.labels.len(), WAVE_SAMPLES);
        assert_eq!(chart.labels[0], "0s");
        assert_eq!(chart.labels[19], "19s");

        let names: Vec<_> = chart.datasets.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Theta"]);
        for series in &chart.datasets {
            assert_eq!(series.data.len(), WAVE_SAMPLES);
            assert!(series.data.iter().all(|v| *v < 100));
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        assert_eq!(brainwaves(42), brainwaves(42));
        assert_eq!(cognitive_traits(42), cognitive_traits(42));
        assert_eq!(neural_profile(42), neural_profile(42));
    }

    #[test]
    fn test_different_seeds_differ() {
        // 60 samples colliding across two seeds is vanishingly unlikely.
        assert_ne!(brainwaves(1), brainwaves(2));
    }

    #[test]
    fn test_cognitive_traits_in_range() {
        for seed in 0..50 {
            let t = cognitive_traits(seed);
            for v in [t.focus, t.creativity, t.stress, t.clarity, t.energy] {
                assert!(v < 100);
            }
        }
    }

    #[test]
    fn test_neural_profile_ranges() {
        for seed in 0..50 {
            let profile = neural_profile(seed);
            assert_eq!(profile.len(), 4);
            assert_eq!(profile[0].name, "Creativity");
            assert!((60..=100).contains(&profile[0].value));
            for t in &profile[1..] {
                assert!((50..=90).contains(&t.value), "{} out of range", t.name);
            }
        }
    }
}
