//! Generated question value and its invariants

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::archetypes::QuestionKind;
use super::rng::QuizRng;
use crate::consts::WRONG_ANSWER_COUNT;

/// A single answer option: a plain number or a formatted string
/// (currency, clock time, comparison statement, shape name, glyph)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    Text(String),
}

impl Answer {
    pub fn text(s: impl Into<String>) -> Self {
        Answer::Text(s.into())
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Answer::Number(n) => Some(*n),
            Answer::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Number(_) => None,
            Answer::Text(s) => Some(s),
        }
    }

    fn is_negative(&self) -> bool {
        matches!(self, Answer::Number(n) if *n < 0)
    }

    fn same_family(&self, other: &Answer) -> bool {
        matches!(
            (self, other),
            (Answer::Number(_), Answer::Number(_)) | (Answer::Text(_), Answer::Text(_))
        )
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Answer {
    fn from(n: i64) -> Self {
        Answer::Number(n)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

/// Invariant violations detected on a generated question
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionDefect {
    #[error("question text is empty")]
    EmptyText,
    #[error("expected {expected} wrong answers, found {found}")]
    WrongAnswerCount { expected: usize, found: usize },
    #[error("wrong answer {0} appears more than once")]
    DuplicateWrongAnswer(String),
    #[error("correct answer {0} is listed as a wrong answer")]
    CorrectAmongWrong(String),
    #[error("negative answer {0} is not allowed for this question type")]
    NegativeAnswer(String),
    #[error("answer {0} is not in the same format as the correct answer")]
    MixedAnswerFormats(String),
    #[error("difficulty must be at least 1")]
    ZeroDifficulty,
}

/// One generated question. Immutable once built; the battle layer reads it,
/// shows it and reports back which answer string was picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    kind: QuestionKind,
    question_text: String,
    correct_answer: Answer,
    wrong_answers: Vec<Answer>,
    feedback: String,
    difficulty: u32,
    grade: f64,
}

impl Question {
    pub fn new(
        kind: QuestionKind,
        grade: f64,
        question_text: impl Into<String>,
        correct_answer: impl Into<Answer>,
        wrong_answers: Vec<Answer>,
    ) -> Self {
        Self {
            kind,
            question_text: question_text.into(),
            correct_answer: correct_answer.into(),
            wrong_answers,
            feedback: String::new(),
            difficulty: 1,
            grade,
        }
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn correct_answer(&self) -> &Answer {
        &self.correct_answer
    }

    pub fn wrong_answers(&self) -> &[Answer] {
        &self.wrong_answers
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    /// Correct and wrong answers in display order (unbiased shuffle)
    pub fn all_answers(&self, rng: &mut QuizRng) -> Vec<Answer> {
        let mut answers = self.wrong_answers.clone();
        answers.push(self.correct_answer.clone());
        rng.shuffle_in_place(&mut answers);
        answers
    }

    /// Check the answer string the player picked
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim() == self.correct_answer.to_string()
    }

    /// Verify the question invariants: non-empty text, exactly
    /// `WRONG_ANSWER_COUNT` distinct wrong answers none of which is correct,
    /// one answer format, and no negatives unless the kind allows them.
    pub fn validate(&self) -> Result<(), QuestionDefect> {
        if self.question_text.trim().is_empty() {
            return Err(QuestionDefect::EmptyText);
        }
        if self.difficulty == 0 {
            return Err(QuestionDefect::ZeroDifficulty);
        }
        if self.wrong_answers.len() != WRONG_ANSWER_COUNT {
            return Err(QuestionDefect::WrongAnswerCount {
                expected: WRONG_ANSWER_COUNT,
                found: self.wrong_answers.len(),
            });
        }

        let allow_negative = self.kind.allows_negative(self.grade);
        if !allow_negative && self.correct_answer.is_negative() {
            return Err(QuestionDefect::NegativeAnswer(self.correct_answer.to_string()));
        }

        let mut seen = HashSet::new();
        for wrong in &self.wrong_answers {
            if wrong == &self.correct_answer {
                return Err(QuestionDefect::CorrectAmongWrong(wrong.to_string()));
            }
            if !wrong.same_family(&self.correct_answer) {
                return Err(QuestionDefect::MixedAnswerFormats(wrong.to_string()));
            }
            if !allow_negative && wrong.is_negative() {
                return Err(QuestionDefect::NegativeAnswer(wrong.to_string()));
            }
            if !seen.insert(wrong) {
                return Err(QuestionDefect::DuplicateWrongAnswer(wrong.to_string()));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.question_text)
    }
}
