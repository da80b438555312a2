//! Plain arithmetic archetypes: addition, subtraction, counting, before/after

use crate::quiz::distractors::{SynthOptions, synthesize_wrong_answers};
use crate::quiz::grade::{GradeBand, difficulty_for, number_range};
use crate::quiz::question::{Answer, Question};
use crate::quiz::rng::QuizRng;

use super::QuestionKind;

const COUNTING_GLYPHS: [&str; 4] = ["🔵", "🌟", "❤️", "🎈"];

fn numeric_wrong(correct: i64, grade: f64, rng: &mut QuizRng) -> Vec<Answer> {
    synthesize_wrong_answers(correct, grade, SynthOptions::default(), rng)
        .into_iter()
        .map(Answer::Number)
        .collect()
}

pub fn addition(grade: f64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let a = rng.random_int(range.min, range.max);
    let b = rng.random_int(range.min, range.max);
    build_addition(grade, a, b, rng)
}

pub fn build_addition(grade: f64, a: i64, b: i64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let sum = a + b;
    let feedback = if GradeBand::of(grade) == GradeBand::EarlyK {
        "Count using your fingers!"
    } else {
        "Start with the bigger number and count up."
    };
    Question::new(
        QuestionKind::Addition,
        grade,
        format!("What is {a} + {b}?"),
        sum,
        numeric_wrong(sum, grade, rng),
    )
    .with_feedback(feedback)
    .with_difficulty(difficulty_for(sum, range.max))
}

pub fn subtraction(grade: f64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let a = rng.random_int(range.min, range.max);
    let b = rng.random_int(range.min, range.max);
    build_subtraction(grade, a, b, rng)
}

/// Operands are swapped when needed so the difference is never negative
pub fn build_subtraction(grade: f64, a: i64, b: i64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let (big, small) = if a >= b { (a, b) } else { (b, a) };
    let difference = big - small;
    Question::new(
        QuestionKind::Subtraction,
        grade,
        format!("What is {big} - {small}?"),
        difference,
        numeric_wrong(difference, grade, rng),
    )
    .with_feedback("Count backwards from the larger number.")
    .with_difficulty(difficulty_for(big, range.max))
}

pub fn counting_objects(grade: f64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let count = rng.random_int(range.min, range.max);
    let glyph = if GradeBand::of(grade) == GradeBand::EarlyK {
        COUNTING_GLYPHS[0]
    } else {
        *rng.choose(&COUNTING_GLYPHS)
    };
    let feedback = if count > 10 {
        "Try counting by groups of 2 or 5!"
    } else {
        "Touch each object as you count!"
    };
    Question::new(
        QuestionKind::CountingObjects,
        grade,
        format!("Count the objects: {}", glyph.repeat(count as usize)),
        count,
        numeric_wrong(count, grade, rng),
    )
    .with_feedback(feedback)
    .with_difficulty(difficulty_for(count, range.max))
}

pub fn number_sequence(grade: f64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let n = rng.random_int(range.min, range.max - 1);
    let before = rng.coin_flip();
    let (text, correct, feedback) = if before {
        (
            format!("What number comes before {n}?"),
            n - 1,
            "Count backwards one number.",
        )
    } else {
        (
            format!("What number comes after {n}?"),
            n + 1,
            "Count forward one number.",
        )
    };
    Question::new(
        QuestionKind::NumberSequence,
        grade,
        text,
        correct,
        numeric_wrong(correct, grade, rng),
    )
    .with_feedback(feedback)
}
