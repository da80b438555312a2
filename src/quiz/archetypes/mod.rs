//! Question archetypes
//!
//! Each archetype is a pure function of `(grade, rng)` returning a fully
//! populated [`Question`]. `QuestionKind` is the closed set of archetypes;
//! adding a question type means adding a variant and its generator.

pub mod arithmetic;
pub mod comparison;
pub mod money;
pub mod pattern;
pub mod shapes;
pub mod skip_counting;
pub mod time;
pub mod word_problems;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::question::Question;
use super::rng::QuizRng;
use crate::consts::NEGATIVE_SKIP_GRADE;

/// Every question archetype the engine can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    CountingObjects,
    Addition,
    Subtraction,
    NumberSequence,
    SkipCounting,
    Comparison,
    PatternRecognition,
    ShapeProperties,
    MoneyCounting,
    TimeQuestion,
    WordProblemAdd,
    WordProblemSub,
    WordProblemMul,
    WordProblemDiv,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 14] = [
        QuestionKind::CountingObjects,
        QuestionKind::Addition,
        QuestionKind::Subtraction,
        QuestionKind::NumberSequence,
        QuestionKind::SkipCounting,
        QuestionKind::Comparison,
        QuestionKind::PatternRecognition,
        QuestionKind::ShapeProperties,
        QuestionKind::MoneyCounting,
        QuestionKind::TimeQuestion,
        QuestionKind::WordProblemAdd,
        QuestionKind::WordProblemSub,
        QuestionKind::WordProblemMul,
        QuestionKind::WordProblemDiv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::CountingObjects => "CountingObjects",
            QuestionKind::Addition => "Addition",
            QuestionKind::Subtraction => "Subtraction",
            QuestionKind::NumberSequence => "NumberSequence",
            QuestionKind::SkipCounting => "SkipCounting",
            QuestionKind::Comparison => "Comparison",
            QuestionKind::PatternRecognition => "PatternRecognition",
            QuestionKind::ShapeProperties => "ShapeProperties",
            QuestionKind::MoneyCounting => "MoneyCounting",
            QuestionKind::TimeQuestion => "TimeQuestion",
            QuestionKind::WordProblemAdd => "WordProblemAdd",
            QuestionKind::WordProblemSub => "WordProblemSub",
            QuestionKind::WordProblemMul => "WordProblemMul",
            QuestionKind::WordProblemDiv => "WordProblemDiv",
        }
    }

    /// Whether answers of this kind may be negative at `grade`
    pub fn allows_negative(&self, grade: f64) -> bool {
        matches!(self, QuestionKind::SkipCounting) && grade >= NEGATIVE_SKIP_GRADE
    }

    /// Generate one question of this kind
    pub fn generate(&self, grade: f64, rng: &mut QuizRng) -> Question {
        match self {
            QuestionKind::CountingObjects => arithmetic::counting_objects(grade, rng),
            QuestionKind::Addition => arithmetic::addition(grade, rng),
            QuestionKind::Subtraction => arithmetic::subtraction(grade, rng),
            QuestionKind::NumberSequence => arithmetic::number_sequence(grade, rng),
            QuestionKind::SkipCounting => skip_counting::generate(grade, rng),
            QuestionKind::Comparison => comparison::generate(grade, rng),
            QuestionKind::PatternRecognition => pattern::generate(grade, rng),
            QuestionKind::ShapeProperties => shapes::generate(grade, rng),
            QuestionKind::MoneyCounting => money::generate(grade, rng),
            QuestionKind::TimeQuestion => time::generate(grade, rng),
            QuestionKind::WordProblemAdd => word_problems::addition(grade, rng),
            QuestionKind::WordProblemSub => word_problems::subtraction(grade, rng),
            QuestionKind::WordProblemMul => word_problems::multiplication(grade, rng),
            QuestionKind::WordProblemDiv => word_problems::division(grade, rng),
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
