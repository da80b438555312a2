//! Math Ninja - grade-scaled math questions for a monster-battle game
//!
//! Core modules:
//! - `quiz`: Deterministic question engine (archetypes, distractors, factory)
//! - `settings`: Persisted player settings
//! - `util`: Text helpers for question templates
//! - `wasm`: Browser bindings for the battle shell (wasm32 only)

pub mod quiz;
pub mod settings;
pub mod util;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use quiz::{Answer, Question, QuestionFactory, QuestionKind, QuizError, QuizRng};
pub use settings::Settings;

/// Engine configuration constants
pub mod consts {
    /// Half-integer grade cutoffs shared by every archetype
    pub const GRADE_CUTOFFS: [f64; 5] = [0.5, 1.0, 1.5, 2.0, 2.5];
    /// Step the battle layer advances the grade by on level-up
    pub const GRADE_STEP: f64 = 0.5;

    /// Wrong answers shown next to the correct one
    pub const WRONG_ANSWER_COUNT: usize = 3;
    /// Random proposals the distractor synthesizer makes before its backfill
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

    /// Skip counting may run below zero from this grade on
    pub const NEGATIVE_SKIP_GRADE: f64 = 2.5;

    /// Questions asked per battle
    pub const DEFAULT_QUESTIONS_PER_BATTLE: u32 = 10;
}
