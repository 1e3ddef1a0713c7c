//! Simulated widget data.
//!
//! GET  /api/v1/demo/brainwaves
//! GET  /api/v1/demo/traits
//! GET  /api/v1/demo/profile
//! GET  /api/v1/demo/environment
//! GET  /api/v1/demo/dream
//! POST /api/v1/demo/dream/stats
//! GET  /api/v1/demo/sleep?elapsed_ms=N
//!
//! The GET endpoints accept `?seed=N`; without it a time-derived seed is used
//! so polling clients see fresh values.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use neurosync_core::demo;
use neurosync_core::demo::{dream, environment, sleep};
use neurosync_types::demo::{
    BrainwaveChart, CognitiveTraits, DreamEntry, DreamInterpretation, DreamStats,
    EnvironmentSnapshot, NeuralTrait, SleepTick,
};

use crate::http::error::AppError;
use crate::http::extractors::query::{DemoQuery, SleepQuery};

pub async fn get_brainwaves(query: DemoQuery) -> Json<BrainwaveChart> {
    Json(demo::brainwaves(query.seed_or_now()))
}

pub async fn get_traits(query: DemoQuery) -> Json<CognitiveTraits> {
    Json(demo::cognitive_traits(query.seed_or_now()))
}

pub async fn get_profile(query: DemoQuery) -> Json<Vec<NeuralTrait>> {
    Json(demo::neural_profile(query.seed_or_now()))
}

/// Sensed surroundings with the suggestions they trigger.
pub async fn get_environment(query: DemoQuery) -> Json<EnvironmentSnapshot> {
    Json(environment::environment_snapshot(query.seed_or_now()))
}

pub async fn get_dream(query: DemoQuery) -> Json<DreamInterpretation> {
    Json(dream::interpret_dream(query.seed_or_now()))
}

/// Request body for POST /api/v1/demo/dream/stats.
#[derive(Debug, Deserialize)]
pub struct DreamJournal {
    pub dreams: Vec<DreamEntry>,
}

pub async fn post_dream_stats(
    payload: Result<Json<DreamJournal>, JsonRejection>,
) -> Result<Json<DreamStats>, AppError> {
    let Json(journal) = payload?;
    Ok(Json(dream::dream_stats(&journal.dreams)))
}

pub async fn get_sleep(query: SleepQuery) -> Json<SleepTick> {
    Json(sleep::sleep_tick(query.seed_or_now(), query.elapsed_ms))
}
