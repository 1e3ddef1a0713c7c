//! Dream-mode sleep cycle: light, deep and REM stages of fixed length, with
//! a subliminal message every tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use neurosync_types::demo::{SleepStage, SleepTick};

pub const STAGE_DURATION_MS: u64 = 30_000;
pub const TICK_MS: u64 = 1_500;
const PROGRESS_STEP: u64 = 5;

const CYCLE: [SleepStage; 3] = [SleepStage::Light, SleepStage::Deep, SleepStage::Rem];

pub fn subliminal_messages(stage: SleepStage) -> [&'static str; 3] {
    match stage {
        SleepStage::Light => [
            "You are safe and protected",
            "Your mind is at peace",
            "Release all tension",
        ],
        SleepStage::Deep => [
            "Healing is happening",
            "Your body is renewing",
            "Deep restoration",
        ],
        SleepStage::Rem => [
            "You remember your dreams",
            "Creativity flows freely",
            "Solutions come easily",
        ],
    }
}

pub fn stage_at(elapsed_ms: u64) -> SleepStage {
    let index = (elapsed_ms / STAGE_DURATION_MS) % CYCLE.len() as u64;
    CYCLE[index as usize]
}

/// Progress through the current stage; resets to 0 at each stage change.
pub fn progress_at(elapsed_ms: u64) -> u8 {
    let ticks = (elapsed_ms % STAGE_DURATION_MS) / TICK_MS;
    (ticks * PROGRESS_STEP) as u8
}

/// Session state `elapsed_ms` after dream mode was switched on.
pub fn sleep_tick(seed: u64, elapsed_ms: u64) -> SleepTick {
    let mut rng = StdRng::seed_from_u64(seed);
    let stage = stage_at(elapsed_ms);
    let messages = subliminal_messages(stage);

    SleepTick {
        stage,
        progress: progress_at(elapsed_ms),
        subliminal_message: messages[rng.random_range(0..messages.len())].to_string(),
    }
}
