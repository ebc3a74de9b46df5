//! Lexicon-based polarity scorer.
//!
//! Each known word carries a polarity in `[-1.0, 1.0]`. The text polarity is the mean over the
//! scored words, after applying a preceding intensifier and negation to each.

use std::collections::HashMap;

use regex::Regex;

use super::TextSentimentScorer;

/// A negated word keeps half its magnitude with the sign flipped.
const NEGATION_FACTOR: f64 = -0.5;

const POSITIVE_WORDS: [(&str, f64); 40] = [
    ("amazing", 0.6),
    ("appreciate", 0.5),
    ("appreciated", 0.5),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("clean", 0.37),
    ("convenient", 0.4),
    ("courteous", 0.5),
    ("delighted", 0.7),
    ("easy", 0.43),
    ("efficient", 0.5),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("fixed", 0.3),
    ("friendly", 0.38),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.6),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("impressed", 0.6),
    ("improved", 0.4),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleased", 0.5),
    ("prompt", 0.4),
    ("quick", 0.33),
    ("responsive", 0.5),
    ("safe", 0.5),
    ("wonderful", 1.0),
];

const NEGATIVE_WORDS: [(&str, f64); 40] = [
    ("angry", -0.5),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("broken", -0.4),
    ("careless", -0.5),
    ("confusing", -0.3),
    ("dangerous", -0.6),
    ("delayed", -0.3),
    ("dirty", -0.6),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("expensive", -0.5),
    ("filthy", -0.8),
    ("frustrated", -0.7),
    ("frustrating", -0.7),
    ("horrible", -1.0),
    ("ignored", -0.5),
    ("late", -0.3),
    ("loud", -0.2),
    ("messy", -0.5),
    ("missed", -0.4),
    ("overflowing", -0.3),
    ("poor", -0.4),
    ("problem", -0.3),
    ("rude", -0.6),
    ("sad", -0.5),
    ("slow", -0.3),
    ("terrible", -1.0),
    ("ugly", -0.7),
    ("unacceptable", -0.8),
    ("unhelpful", -0.5),
    ("unresponsive", -0.5),
    ("unsafe", -0.5),
    ("upset", -0.5),
    ("useless", -0.5),
    ("waste", -0.2),
    ("worse", -0.4),
    ("worst", -1.0),
];

const INTENSIFIERS: [(&str, f64); 10] = [
    ("absolutely", 1.3),
    ("completely", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("quite", 1.1),
    ("really", 1.2),
    ("so", 1.3),
    ("totally", 1.3),
    ("very", 1.3),
];

/// Unscored words after which a pending negation or intensifier is dropped.
const DEFAULT_NEGATION_WINDOW: usize = 3;

/// Punctuation that ends the reach of a negation or intensifier.
const CLAUSE_BREAKS: [&str; 6] = [".", ",", ";", ":", "!", "?"];

const NEGATIONS: [&str; 8] = ["not", "no", "never", "none", "nothing", "neither", "nor", "cannot"];

/// Deterministic English polarity scorer used when no other scorer is injected.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    polarities: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    token_re: Regex,
    /// Unscored words a negation or intensifier survives before it lapses.
    negation_window: usize,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        LexiconScorer {
            polarities: POSITIVE_WORDS.iter().chain(NEGATIVE_WORDS.iter()).copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            token_re: Regex::new(r"[a-z]+(?:'[a-z]+)?|[.,;:!?]").expect("token pattern is valid"),
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }

    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    pub fn word_polarity(&self, word: &str) -> Option<f64> {
        self.polarities.get(word).copied()
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.contains(&token) || token.ends_with("n't")
    }

    fn is_clause_break(token: &str) -> bool {
        CLAUSE_BREAKS.contains(&token)
    }
}

impl TextSentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");

        let mut scores: Vec<f64> = Vec::new();
        let mut modifier = 1.0;
        let mut negated = false;
        let mut words_since_cue = 0;

        for token in self.token_re.find_iter(&lowered).map(|m| m.as_str()) {
            if Self::is_clause_break(token) {
                modifier = 1.0;
                negated = false;
                continue;
            }
            if Self::is_negation(token) {
                negated = true;
                words_since_cue = 0;
                continue;
            }
            if let Some(&factor) = self.intensifiers.get(token) {
                modifier = factor;
                words_since_cue = 0;
                continue;
            }
            if let Some(base) = self.word_polarity(token) {
                let mut score = base * modifier;
                if negated {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score);
                modifier = 1.0;
                negated = false;
                continue;
            }

            if negated || modifier != 1.0 {
                words_since_cue += 1;
                if words_since_cue >= self.negation_window {
                    modifier = 1.0;
                    negated = false;
                }
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
