//! Dream journal statistics and the simulated dream interpreter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use neurosync_types::demo::{DreamAnalysis, DreamEntry, DreamInterpretation, DreamStats};

/// Symbols reported in the journal summary.
pub const TOP_SYMBOLS: usize = 5;

const SYMBOL_SETS: [[&str; 3]; 5] = [
    ["water", "flying", "darkness"],
    ["forest", "chase", "mirror"],
    ["ocean", "falling", "light"],
    ["castle", "flight", "unknown"],
    ["door", "animal", "vehicle"],
];

const MEANINGS: [&str; 5] = [
    "You are undergoing emotional transformation with a sense of freedom and hidden fears.",
    "You may be avoiding confronting an issue in your waking life that requires attention.",
    "Your subconscious is signaling a need for change and new perspectives.",
    "There is untapped creativity within you waiting to be expressed.",
    "You may be feeling uncertain about a decision or direction in life.",
];

const EMOTIONS: [&str; 5] = ["anxious", "hopeful", "confused", "excited", "peaceful"];

const INSIGHTS: [&str; 3] = [
    "Recurring symbols suggest a pattern in your subconscious mind",
    "The emotional tone matches your recent life experiences",
    "This dream connects to events from 2 days ago",
];

const STORY_TEMPLATES: usize = 3;

/// Summary figures for a journal.
///
/// Words are counted by splitting on single spaces, so an empty entry still
/// counts as one word. Symbol ties keep the order in which they were first
/// seen.
pub fn dream_stats(dreams: &[DreamEntry]) -> DreamStats {
    if dreams.is_empty() {
        return DreamStats {
            total_dreams: 0,
            avg_length: 0,
            common_symbols: Vec::new(),
        };
    }

    let total = dreams.len();
    let words: usize = dreams.iter().map(|d| d.text.split(' ').count()).sum();
    let avg_length = (words as f64 / total as f64).round() as usize;

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for symbol in dreams.iter().flat_map(|d| d.symbols.iter()) {
        match counts.iter_mut().find(|(s, _)| *s == symbol.as_str()) {
            Some((_, n)) => *n += 1,
            None => counts.push((symbol.as_str(), 1)),
        }
    }
    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    DreamStats {
        total_dreams: total,
        avg_length,
        common_symbols: counts
            .into_iter()
            .take(TOP_SYMBOLS)
            .map(|(s, _)| s.to_string())
            .collect(),
    }
}

pub fn analyze_dream(seed: u64) -> DreamAnalysis {
    let mut rng = StdRng::seed_from_u64(seed);
    let symbols = SYMBOL_SETS[rng.random_range(0..SYMBOL_SETS.len())];
    let meaning = MEANINGS[rng.random_range(0..MEANINGS.len())];
    let emotion = EMOTIONS[rng.random_range(0..EMOTIONS.len())];

    DreamAnalysis {
        symbols: symbols.iter().map(|s| (*s).to_string()).collect(),
        meaning: meaning.to_string(),
        emotion: emotion.to_string(),
        insights: INSIGHTS.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// Short narrative built from an analysis. Missing symbols read as
/// "something unknown".
pub fn dream_story(analysis: &DreamAnalysis, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let symbol = |i: usize| {
        analysis
            .symbols
            .get(i)
            .map(String::as_str)
            .unwrap_or("something unknown")
    };
    let emotion = &analysis.emotion;

    match rng.random_range(0..STORY_TEMPLATES) {
        0 => format!(
            "In the realm of dreams, you found yourself surrounded by {}. As you navigated \
             through this landscape, a sense of {emotion} washed over you. Suddenly, {} appeared, \
             offering a path forward that filled you with wonder and curiosity.",
            symbol(0),
            symbol(1)
        ),
        1 => format!(
            "The dream began with {} dancing in harmony. You felt {emotion} yet compelled to \
             explore further. This journey through your subconscious revealed hidden truths \
             about your waking life.",
            if analysis.symbols.is_empty() {
                symbol(0).to_string()
            } else {
                analysis.symbols.join(" and ")
            }
        ),
        _ => format!(
            "As you drifted into slumber, {} emerged as the central theme. The experience was \
             permeated with {emotion}, reflecting your current emotional state. By dream's end, \
             {} provided a surprising resolution.",
            symbol(0),
            symbol(1)
        ),
    }
}

/// Analysis and story drawn from one seed.
pub fn interpret_dream(seed: u64) -> DreamInterpretation {
    let analysis = analyze_dream(seed);
    let story = dream_story(&analysis, seed.wrapping_add(1));
    DreamInterpretation { analysis, story }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, symbols: &[&str]) -> DreamEntry {
        DreamEntry {
            text: text.to_string(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_stats_empty_journal() {
        let stats = dream_stats(&[]);
        assert_eq!(stats.total_dreams, 0);
        assert_eq!(stats.avg_length, 0);
        assert!(stats.common_symbols.is_empty());
    }

    #[test]
    fn test_stats_average_is_rounded() {
        // 3 + 4 words over two entries averages 3.5
        let dreams = [entry("I was flying", &[]), entry("the sea was dark", &[])];
        let stats = dream_stats(&dreams);
        assert_eq!(stats.total_dreams, 2);
        assert_eq!(stats.avg_length, 4);
    }

    #[test]
    fn test_stats_symbols_by_frequency_then_first_seen() {
        let dreams = [
            entry("a", &["door", "water", "mirror"]),
            entry("b", &["water", "forest", "chase"]),
            entry("c", &["light", "water", "forest"]),
        ];
        let stats = dream_stats(&dreams);
        assert_eq!(
            stats.common_symbols,
            ["water", "forest", "door", "mirror", "chase"]
        );
    }

    #[test]
    fn test_analysis_draws_from_fixed_tables() {
        for seed in 0..30 {
            let analysis = analyze_dream(seed);
            assert!(SYMBOL_SETS.iter().any(|set| set.as_slice() == analysis.symbols));
            assert!(MEANINGS.contains(&analysis.meaning.as_str()));
            assert!(EMOTIONS.contains(&analysis.emotion.as_str()));
            assert_eq!(analysis.insights, INSIGHTS);
        }
    }

    #[test]
    fn test_story_mentions_emotion_and_first_symbol() {
        let analysis = analyze_dream(3);
        for seed in 0..10 {
            let story = dream_story(&analysis, seed);
            assert!(story.contains(&analysis.emotion), "{story}");
            assert!(story.contains(&analysis.symbols[0]), "{story}");
        }
    }

    #[test]
    fn test_story_without_symbols_uses_fallback() {
        let analysis = DreamAnalysis {
            symbols: Vec::new(),
            meaning: String::new(),
            emotion: "calm".to_string(),
            insights: Vec::new(),
        };
        for seed in 0..10 {
            assert!(dream_story(&analysis, seed).contains("something unknown"));
        }
    }

    #[test]
    fn test_interpretation_is_seeded() {
        assert_eq!(interpret_dream(11), interpret_dream(11));
    }
}
