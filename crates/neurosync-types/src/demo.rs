//! Shapes of the simulated widget data: dashboard gauges, environment
//! sensing, dream journal and the sleep cycle.
//!
//! Values are produced by the seedable generators in `neurosync-core::demo`.

use serde::{Deserialize, Serialize};

/// One named brainwave band sampled over time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveSeries {
    pub label: String,
    pub data: Vec<u8>,
}

/// Brainwave chart: shared time labels plus one series per band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainwaveChart {
    pub labels: Vec<String>,
    pub datasets: Vec<WaveSeries>,
}

/// Snapshot of the five cognitive gauges, each a percentage below 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitiveTraits {
    pub focus: u8,
    pub creativity: u8,
    pub stress: u8,
    pub clarity: u8,
    pub energy: u8,
}

/// A named trait score on the neural profile view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeuralTrait {
    pub name: String,
    pub value: u8,
}

/// Ambient noise level reported by the environment sensor mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lighting {
    Dark,
    Dim,
    Bright,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Home,
    Office,
    Public,
    Commute,
}

/// One sensed environment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentReading {
    pub noise: NoiseLevel,
    pub lighting: Lighting,
    pub location: Location,
}

/// An adaptation the UI can offer for the current environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptiveSuggestion {
    /// Stable identifier of the action, e.g. `"noise_cancellation"`.
    pub action: String,
    pub text: String,
}

/// Environment reading plus the suggestions derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    pub reading: EnvironmentReading,
    pub suggestions: Vec<AdaptiveSuggestion>,
}

/// A dream journal entry as submitted for statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamEntry {
    pub text: String,
    #[serde(default)]
    pub symbols: Vec<String>,
}

/// Aggregate figures over a dream journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamStats {
    pub total_dreams: usize,
    /// Mean words per entry, rounded to the nearest integer.
    pub avg_length: usize,
    /// Up to five most frequent symbols, most frequent first.
    pub common_symbols: Vec<String>,
}

/// Simulated interpretation of a single dream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamAnalysis {
    pub symbols: Vec<String>,
    pub meaning: String,
    pub emotion: String,
    pub insights: Vec<String>,
}

/// Analysis together with the short story woven from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamInterpretation {
    pub analysis: DreamAnalysis,
    pub story: String,
}

/// Stage of the simulated sleep cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepStage {
    Light,
    Deep,
    Rem,
}

/// State of a dream-mode session at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepTick {
    pub stage: SleepStage,
    /// Progress through the current stage, 0..=95 in steps of 5.
    pub progress: u8,
    pub subliminal_message: String,
}
