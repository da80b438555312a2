//! Wrong-answer synthesis
//!
//! Numeric distractors come from randomized perturbation around the correct
//! answer with a deterministic backfill. Archetypes that encode specific
//! student mistakes build their own candidate lists and run them through
//! [`fill_distinct`] so the correct answer is excluded before anything is
//! accepted.

use std::collections::HashSet;
use std::hash::Hash;

use super::rng::QuizRng;
use crate::consts::{DEFAULT_MAX_ATTEMPTS, WRONG_ANSWER_COUNT};

/// Tuning for [`synthesize_wrong_answers`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthOptions {
    /// Reject candidates <= 0
    pub require_positive: bool,
    /// Number of wrong answers wanted
    pub min_wrong: usize,
    /// Random proposals before falling back to the fixed candidate list
    pub max_attempts: u32,
    /// Overrides the grade-derived perturbation magnitude
    pub max_difference: Option<i64>,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            require_positive: true,
            min_wrong: WRONG_ANSWER_COUNT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_difference: None,
        }
    }
}

impl SynthOptions {
    pub fn allow_non_positive(mut self) -> Self {
        self.require_positive = false;
        self
    }

    pub fn with_max_difference(mut self, max_difference: i64) -> Self {
        self.max_difference = Some(max_difference);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_min_wrong(mut self, min_wrong: usize) -> Self {
        self.min_wrong = min_wrong;
        self
    }
}

/// Produce up to `options.min_wrong` distinct plausible wrong answers near
/// `correct`. Never fails: when even the backfill list cannot supply enough
/// valid values the result is shorter than requested (and logged).
pub fn synthesize_wrong_answers(
    correct: i64,
    grade: f64,
    options: SynthOptions,
    rng: &mut QuizRng,
) -> Vec<i64> {
    let variation = options
        .max_difference
        .unwrap_or_else(|| ((grade * 3.0).floor() as i64).max(2))
        .max(1);
    let valid = |n: i64| n != correct && (!options.require_positive || n > 0);

    let mut accepted: Vec<i64> = Vec::with_capacity(options.min_wrong);
    let mut attempts = 0;
    while accepted.len() < options.min_wrong && attempts < options.max_attempts {
        attempts += 1;
        let proposal = if correct <= 3 {
            let alternatives = [
                correct + 1,
                correct + 2,
                correct * 2,
                if options.require_positive {
                    (correct - 1).max(1)
                } else {
                    correct - 1
                },
            ];
            *rng.choose(&alternatives)
        } else {
            let offset = rng.random_int(1, variation);
            if rng.coin_flip() {
                correct + offset
            } else {
                correct - offset
            }
        };
        if valid(proposal) && !accepted.contains(&proposal) {
            accepted.push(proposal);
        }
    }

    let backfill = [
        correct + 1,
        correct + 2,
        correct + 3,
        correct * 2,
        (correct - 1).max(1),
    ];
    for candidate in backfill {
        if accepted.len() >= options.min_wrong {
            break;
        }
        if valid(candidate) && !accepted.contains(&candidate) {
            accepted.push(candidate);
        }
    }

    if accepted.len() < options.min_wrong {
        log::warn!(
            "wrong-answer shortfall for {correct}: wanted {}, found {}",
            options.min_wrong,
            accepted.len()
        );
    }
    accepted.truncate(options.min_wrong);
    accepted
}

/// Exclude-then-fill: walk `primary` then `backfill`, keeping values that are
/// not `correct` and not already kept, until `count` are collected.
pub fn fill_distinct<T, P, B>(correct: &T, primary: P, backfill: B, count: usize) -> Vec<T>
where
    T: Eq + Hash + Clone,
    P: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    seen.insert(correct.clone());
    let mut out = Vec::with_capacity(count);
    for candidate in primary.into_iter().chain(backfill) {
        if out.len() >= count {
            break;
        }
        if seen.insert(candidate.clone()) {
            out.push(candidate);
        }
    }
    out
}

/// Mistake-specific candidates first, synthesized numbers after
pub fn numeric_distractors(
    correct: i64,
    mistakes: impl IntoIterator<Item = i64>,
    grade: f64,
    options: SynthOptions,
    rng: &mut QuizRng,
) -> Vec<i64> {
    let allowed = |n: &i64| !options.require_positive || *n > 0;
    let primary: Vec<i64> = mistakes.into_iter().filter(allowed).collect();
    // Ask for a few extra so overlaps with the mistake list still leave enough
    let fallback = synthesize_wrong_answers(
        correct,
        grade,
        options.with_min_wrong(options.min_wrong + primary.len()),
        rng,
    );
    fill_distinct(&correct, primary, fallback, options.min_wrong)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(correct: i64, wrong: &[i64], require_positive: bool) {
        let mut dedup = wrong.to_vec();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), wrong.len(), "duplicates in {wrong:?}");
        assert!(!wrong.contains(&correct), "{correct} in {wrong:?}");
        if require_positive {
            assert!(wrong.iter().all(|&n| n > 0), "non-positive in {wrong:?}");
        }
    }

    #[test]
    fn test_typical_answers() {
        let mut rng = QuizRng::seeded(11);
        for correct in 0..200 {
            for grade in [0.0, 0.5, 1.0, 2.0, 3.0] {
                let wrong = synthesize_wrong_answers(correct, grade, SynthOptions::default(), &mut rng);
                assert_eq!(wrong.len(), 3, "correct={correct} grade={grade}");
                assert_valid(correct, &wrong, true);
            }
        }
    }

    #[test]
    fn test_stays_near_correct_answer() {
        let mut rng = QuizRng::seeded(12);
        for _ in 0..100 {
            let wrong = synthesize_wrong_answers(50, 1.0, SynthOptions::default(), &mut rng);
            // variation = max(2, 3) = 3; backfill never needed for 50
            assert!(wrong.iter().all(|&n| (47..=53).contains(&n)), "{wrong:?}");
        }
    }

    #[test]
    fn test_max_difference_override() {
        let mut rng = QuizRng::seeded(13);
        let options = SynthOptions::default().with_max_difference(10);
        let mut widest = 0;
        for _ in 0..200 {
            for n in synthesize_wrong_answers(100, 0.0, options, &mut rng) {
                widest = widest.max((n - 100).abs());
            }
        }
        assert!(widest > 2 && widest <= 10, "widest offset {widest}");
    }

    #[test]
    fn test_small_answers_use_alternatives() {
        let mut rng = QuizRng::seeded(14);
        for correct in 0..=3 {
            let wrong = synthesize_wrong_answers(correct, 0.0, SynthOptions::default(), &mut rng);
            assert_eq!(wrong.len(), 3, "correct={correct}");
            assert_valid(correct, &wrong, true);
        }
    }

    #[test]
    fn test_backfill_when_attempts_exhausted() {
        let mut rng = QuizRng::seeded(15);
        let options = SynthOptions::default().with_max_attempts(0);
        assert_eq!(synthesize_wrong_answers(10, 1.0, options, &mut rng), vec![11, 12, 13]);
        assert_eq!(synthesize_wrong_answers(1, 1.0, options, &mut rng), vec![2, 3, 4]);
    }

    #[test]
    fn test_shortfall_is_observable() {
        // Negative correct answer with positives required: the backfill list
        // [-4, -3, -2, -10, 1] only yields one valid value.
        let mut rng = QuizRng::seeded(16);
        let options = SynthOptions::default().with_max_attempts(0);
        let wrong = synthesize_wrong_answers(-5, 0.0, options, &mut rng);
        assert_eq!(wrong, vec![1]);
        assert!(wrong.len() < options.min_wrong);
    }

    #[test]
    fn test_non_positive_allowed() {
        let mut rng = QuizRng::seeded(17);
        let options = SynthOptions::default().allow_non_positive();
        let mut saw_non_positive = false;
        for _ in 0..100 {
            let wrong = synthesize_wrong_answers(1, 0.0, options, &mut rng);
            assert_valid(1, &wrong, false);
            saw_non_positive |= wrong.iter().any(|&n| n <= 0);
        }
        assert!(saw_non_positive);
    }

    #[test]
    fn test_fill_distinct_excludes_correct_and_duplicates() {
        let out = fill_distinct(&25, [30, 25, 20, 30], [26, 27], 3);
        assert_eq!(out, vec![30, 20, 26]);

        let short = fill_distinct(&"a", ["a", "b"], ["b"], 3);
        assert_eq!(short, vec!["b"]);
    }

    #[test]
    fn test_numeric_distractors_prefer_mistakes() {
        let mut rng = QuizRng::seeded(18);
        let out = numeric_distractors(25, [30, 20, 27], 1.0, SynthOptions::default(), &mut rng);
        assert_eq!(out, vec![30, 20, 27]);

        let out = numeric_distractors(25, [30, 25, 30], 1.0, SynthOptions::default(), &mut rng);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], 30);
        assert_valid(25, &out, true);
    }
}
