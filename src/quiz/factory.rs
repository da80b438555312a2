//! Grade-to-archetype selection
//!
//! The factory owns the RNG and a registry of `(kind, min grade, max grade)`
//! rows. `generate` filters the registry by grade, picks one eligible kind
//! uniformly and checks the result before handing it out.

use thiserror::Error;

use super::archetypes::QuestionKind;
use super::question::{Question, QuestionDefect};
use super::rng::QuizRng;
use crate::settings::Settings;

/// Errors surfaced to the caller of [`QuestionFactory::generate`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizError {
    /// Grade is user input; no archetype covers it
    #[error("no question type available for grade {grade}")]
    NoQuestionType { grade: f64 },
    /// An archetype produced a question that breaks the answer invariants
    #[error("{kind} generated an invalid question: {defect}")]
    InvalidQuestion {
        kind: QuestionKind,
        #[source]
        defect: QuestionDefect,
    },
}

/// One registry row: `kind` is eligible for grades in `[min_grade, max_grade]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Registration {
    pub kind: QuestionKind,
    pub min_grade: f64,
    pub max_grade: f64,
}

impl Registration {
    pub const fn new(kind: QuestionKind, min_grade: f64, max_grade: f64) -> Self {
        Self {
            kind,
            min_grade,
            max_grade,
        }
    }

    pub fn covers(&self, grade: f64) -> bool {
        self.min_grade <= grade && grade <= self.max_grade
    }
}

const OPEN: f64 = f64::INFINITY;

/// Grade table for every archetype
pub const DEFAULT_REGISTRY: [Registration; 14] = [
    Registration::new(QuestionKind::CountingObjects, 0.0, 0.5),
    Registration::new(QuestionKind::Addition, 0.0, OPEN),
    Registration::new(QuestionKind::Subtraction, 0.0, OPEN),
    Registration::new(QuestionKind::NumberSequence, 0.0, 2.0),
    Registration::new(QuestionKind::PatternRecognition, 0.0, 2.0),
    Registration::new(QuestionKind::Comparison, 0.5, OPEN),
    Registration::new(QuestionKind::SkipCounting, 0.5, OPEN),
    Registration::new(QuestionKind::ShapeProperties, 0.5, OPEN),
    Registration::new(QuestionKind::TimeQuestion, 0.5, OPEN),
    Registration::new(QuestionKind::WordProblemAdd, 0.5, OPEN),
    Registration::new(QuestionKind::WordProblemSub, 0.5, OPEN),
    Registration::new(QuestionKind::WordProblemMul, 0.5, OPEN),
    Registration::new(QuestionKind::WordProblemDiv, 0.5, OPEN),
    Registration::new(QuestionKind::MoneyCounting, 1.0, OPEN),
];

/// Kinds from the default registry eligible at `grade`
pub fn question_types(grade: f64) -> Vec<QuestionKind> {
    eligible(&DEFAULT_REGISTRY, grade)
}

fn eligible(registry: &[Registration], grade: f64) -> Vec<QuestionKind> {
    if !grade.is_finite() || grade < 0.0 {
        return Vec::new();
    }
    registry
        .iter()
        .filter(|r| r.covers(grade))
        .map(|r| r.kind)
        .collect()
}

/// Produces one question per call for the battle loop
#[derive(Debug, Clone)]
pub struct QuestionFactory {
    rng: QuizRng,
    registry: Vec<Registration>,
}

impl QuestionFactory {
    pub fn new(seed: u64) -> Self {
        Self::with_registry(seed, DEFAULT_REGISTRY.to_vec())
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: QuizRng::from_entropy(),
            registry: DEFAULT_REGISTRY.to_vec(),
        }
    }

    /// Factory over a custom grade table
    pub fn with_registry(seed: u64, registry: Vec<Registration>) -> Self {
        Self {
            rng: QuizRng::seeded(seed),
            registry,
        }
    }

    /// Seeded from the settings when a seed is pinned, otherwise from entropy
    pub fn from_settings(settings: &Settings) -> Self {
        match settings.seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn registry(&self) -> &[Registration] {
        &self.registry
    }

    /// Kinds this factory may pick at `grade`
    pub fn question_types(&self, grade: f64) -> Vec<QuestionKind> {
        eligible(&self.registry, grade)
    }

    /// The RNG, for display shuffles via [`Question::all_answers`]
    pub fn rng_mut(&mut self) -> &mut QuizRng {
        &mut self.rng
    }

    /// Generate one question for `grade`
    pub fn generate(&mut self, grade: f64) -> Result<Question, QuizError> {
        let kinds = self.question_types(grade);
        if kinds.is_empty() {
            log::warn!("no question type registered for grade {grade}");
            return Err(QuizError::NoQuestionType { grade });
        }
        let kind = *self.rng.choose(&kinds);
        let question = kind.generate(grade, &mut self.rng);

        if let Err(defect) = question.validate() {
            log::error!("{kind} at grade {grade} failed validation: {defect}");
            return Err(QuizError::InvalidQuestion { kind, defect });
        }
        log::debug!(
            "generated {kind} (grade {grade}, difficulty {})",
            question.difficulty()
        );
        Ok(question)
    }

    /// Generate `count` questions for `grade`, stopping at the first error
    pub fn generate_many(&mut self, grade: f64, count: usize) -> Result<Vec<Question>, QuizError> {
        (0..count).map(|_| self.generate(grade)).collect()
    }
}

impl Default for QuestionFactory {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_grade_zero_eligible_set() {
        let kinds: HashSet<_> = question_types(0.0).into_iter().collect();
        let expected: HashSet<_> = [
            QuestionKind::CountingObjects,
            QuestionKind::Addition,
            QuestionKind::Subtraction,
            QuestionKind::NumberSequence,
            QuestionKind::PatternRecognition,
        ]
        .into_iter()
        .collect();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn test_boundaries() {
        assert!(question_types(0.5).contains(&QuestionKind::CountingObjects));
        assert!(!question_types(0.75).contains(&QuestionKind::CountingObjects));
        assert!(!question_types(0.75).contains(&QuestionKind::MoneyCounting));
        assert!(question_types(1.0).contains(&QuestionKind::MoneyCounting));
        assert!(question_types(2.0).contains(&QuestionKind::PatternRecognition));
        assert!(!question_types(2.25).contains(&QuestionKind::PatternRecognition));
        assert_eq!(question_types(10.0).len(), 11);
    }

    #[test]
    fn test_grade_zero_never_leaves_eligible_set() {
        let allowed = question_types(0.0);
        let mut factory = QuestionFactory::new(7);
        for _ in 0..1000 {
            let q = factory.generate(0.0).unwrap();
            assert!(allowed.contains(&q.kind()), "{}", q.kind());
        }
    }

    #[test]
    fn test_invalid_grades_are_configuration_errors() {
        let mut factory = QuestionFactory::new(1);
        assert_eq!(
            factory.generate(-0.5),
            Err(QuizError::NoQuestionType { grade: -0.5 })
        );
        assert!(matches!(
            factory.generate(f64::NAN),
            Err(QuizError::NoQuestionType { .. })
        ));
        assert_eq!(
            factory.generate(f64::INFINITY),
            Err(QuizError::NoQuestionType { grade: f64::INFINITY })
        );
        assert!(question_types(f64::INFINITY).is_empty());
        assert!(question_types(f64::NEG_INFINITY).is_empty());
    }

    #[test]
    fn test_empty_registry_reports_error() {
        let mut factory = QuestionFactory::with_registry(1, Vec::new());
        let err = factory.generate(1.0).unwrap_err();
        assert_eq!(err, QuizError::NoQuestionType { grade: 1.0 });
        assert_eq!(err.to_string(), "no question type available for grade 1");
    }

    #[test]
    fn test_custom_registry_restricts_kinds() {
        let registry = vec![Registration::new(QuestionKind::MoneyCounting, 0.0, 5.0)];
        let mut factory = QuestionFactory::with_registry(3, registry);
        for _ in 0..50 {
            assert_eq!(factory.generate(2.0).unwrap().kind(), QuestionKind::MoneyCounting);
        }
        assert!(factory.generate(6.0).is_err());
    }

    #[test]
    fn test_same_seed_same_questions() {
        let mut a = QuestionFactory::new(99);
        let mut b = QuestionFactory::new(99);
        for grade in [0.0, 1.0, 2.5, 3.0] {
            assert_eq!(a.generate_many(grade, 20), b.generate_many(grade, 20));
        }
    }

    #[test]
    fn test_grade_sweep() {
        let mut factory = QuestionFactory::new(2024);
        let mut grade = 0.0;
        while grade <= 3.5 {
            for q in factory.generate_many(grade, 50).unwrap() {
                assert_eq!(q.grade(), grade);
                assert!(q.difficulty() >= 1);
            }
            grade += 0.25;
        }
    }
}
