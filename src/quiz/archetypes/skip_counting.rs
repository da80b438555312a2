//! Skip counting: "What comes next: 10, 15, 20, ___?"
//!
//! Wrong answers encode the three classic slips: counting one stride too
//! far, repeating the last shown term and stepping one and a half strides.

use crate::quiz::distractors::fill_distinct;
use crate::quiz::grade::GradeBand;
use crate::quiz::question::{Answer, Question};
use crate::quiz::rng::QuizRng;
use crate::consts::WRONG_ANSWER_COUNT;

use super::QuestionKind;

/// Strides available in each band. The top band adds counting backwards.
pub fn strides(grade: f64) -> &'static [i64] {
    match GradeBand::of(grade) {
        GradeBand::EarlyK => &[2],
        GradeBand::LateK => &[2, 5, 10],
        GradeBand::MidFirst => &[2, 3, 4, 5, 10],
        GradeBand::Second => &[2, 3, 4, 5, 10, 100],
        GradeBand::MidSecond => &[2, 3, 4, 5, 10, 25, 50, 100],
        GradeBand::Third => &[2, 3, 4, 5, 10, 25, 50, 100, -2, -5, -10],
    }
}

/// Inclusive range the three shown terms must stay inside
pub fn start_range(grade: f64) -> (i64, i64) {
    match GradeBand::of(grade) {
        GradeBand::EarlyK => (0, 10),
        GradeBand::LateK => (0, 20),
        GradeBand::MidFirst => (0, 50),
        GradeBand::Second => (0, 100),
        GradeBand::MidSecond => (0, 200),
        GradeBand::Third => (-50, 500),
    }
}

pub fn generate(grade: f64, rng: &mut QuizRng) -> Question {
    let (lo, hi) = start_range(grade);
    // Every band's range fits at least the stride of 2
    let fitting: Vec<i64> = strides(grade)
        .iter()
        .copied()
        .filter(|s| 2 * s.abs() <= hi - lo)
        .collect();
    let stride = *rng.choose(&fitting);

    // Start on a multiple of the stride so the sequence reads naturally
    let step = stride.abs();
    let (first, last) = if stride > 0 {
        (lo, hi - 2 * stride)
    } else {
        (lo + 2 * step, hi)
    };
    let k_min = first.div_euclid(step) + i64::from(first.rem_euclid(step) != 0);
    let k_max = last.div_euclid(step);
    let start = rng.random_int(k_min, k_max) * step;

    build(grade, start, stride)
}

/// Skip-counting question for an explicit start and stride
pub fn build(grade: f64, start: i64, stride: i64) -> Question {
    let shown = [start, start + stride, start + 2 * stride];
    let correct = start + 3 * stride;

    let overshoot = correct + stride;
    let repeated = shown[2];
    let stride_and_half = start + (3.5 * stride as f64).round() as i64;
    let wrong = fill_distinct(
        &correct,
        [overshoot, repeated, stride_and_half],
        [correct + 1, correct + 2 * stride, correct + stride.abs() + 1],
        WRONG_ANSWER_COUNT,
    );

    let text = format!(
        "What comes next: {}, {}, {}, ___?",
        shown[0], shown[1], shown[2]
    );
    let step = stride.abs();
    let feedback = if grade <= 1.0 {
        format!("Count by {step}s to find what comes next.")
    } else if stride < 0 {
        format!("Count backwards by {step}s to find the pattern.")
    } else if stride >= 100 {
        "Count by hundreds to find the pattern.".to_string()
    } else if stride >= 10 {
        "Count by tens to find the pattern.".to_string()
    } else {
        format!("Look for the pattern: each number goes up by {stride}.")
    };

    Question::new(
        QuestionKind::SkipCounting,
        grade,
        text,
        correct,
        wrong.into_iter().map(Answer::Number).collect(),
    )
    .with_feedback(feedback)
    .with_difficulty(((step + 3) / 4).max(1) as u32)
}
