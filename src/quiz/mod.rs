//! Question generation engine
//!
//! Everything the battle loop needs to ask a question lives here. This module
//! must stay pure and deterministic:
//! - Seeded RNG only, passed explicitly
//! - No rendering, DOM or platform dependencies
//! - Every generated question checked before it leaves the factory

pub mod archetypes;
pub mod distractors;
pub mod factory;
pub mod grade;
pub mod question;
pub mod rng;

pub use archetypes::QuestionKind;
pub use archetypes::money::{format_cents, format_dollars, parse_money};
pub use archetypes::time::{ClockTime, format_elapsed};
pub use distractors::{SynthOptions, fill_distinct, numeric_distractors, synthesize_wrong_answers};
pub use factory::{DEFAULT_REGISTRY, QuestionFactory, QuizError, Registration, question_types};
pub use grade::{GradeBand, NumberRange, difficulty_for, number_range};
pub use question::{Answer, Question, QuestionDefect};
pub use rng::{QuizRng, RngState};
