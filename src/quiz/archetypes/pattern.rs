//! Repeating glyph patterns with one blanked position

use crate::consts::WRONG_ANSWER_COUNT;
use crate::quiz::distractors::fill_distinct;
use crate::quiz::grade::GradeBand;
use crate::quiz::question::{Answer, Question};
use crate::quiz::rng::QuizRng;

use super::QuestionKind;

pub const BLANK: &str = "___";

/// Themed glyph sets. Each has at least five symbols so a base pattern of
/// five distinct symbols can always be drawn from one category.
pub const CATEGORIES: [&[&str]; 19] = [
    &["🔵", "🔴", "🟢", "🟡", "🟣"],
    &["🐶", "🐱", "🐭", "🐹", "🐰", "🐼", "🐨", "🦁"],
    &["☀️", "🌧️", "❄️", "🌈", "🌪️", "🌤️", "🌩️"],
    &["⭐", "🌙", "🌟", "☄️", "💫", "✨", "🌕"],
    &["🟨", "🟥", "🟧", "🟩", "🟦", "⬛", "⬜"],
    &["🍎", "🍊", "🍋", "🍉", "🍇", "🍓", "🍒"],
    &["🎵", "🎶", "🎷", "🎸", "🥁", "🎺", "🎻"],
    &["🚗", "🚙", "🛵", "🚲", "✈️", "🚀", "🛶"],
    &["🌳", "🌲", "🌴", "🌵", "🌾", "🌿", "🍂"],
    &["🍕", "🍔", "🌭", "🌮", "🍩", "🍪", "🍰"],
    &["👗", "👒", "🧥", "👞", "👜", "🕶️", "🎩"],
    &["⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🏓"],
    &["📚", "📖", "📕", "📗", "📘", "📙", "📝"],
    &["⛵", "🚤", "🛳️", "⛴️", "🚢", "⚓", "🪝"],
    &["🐝", "🐞", "🦋", "🐌", "🐜", "🐛", "🦂"],
    &["🦄", "🐉", "🐲", "🦜", "🦩", "🐺", "🦅"],
    &["🍄", "🌸", "🌺", "🌼", "🌻", "🌷", "🌹"],
    &["🎂", "🎉", "🎁", "🎈", "🎊", "🎀", "🪅"],
    &["🔑", "🛡️", "⚔️", "🗡️", "🏹", "🧭", "🗺️"],
];

pub fn generate(grade: f64, rng: &mut QuizRng) -> Question {
    let early = GradeBand::of(grade) == GradeBand::EarlyK;
    let length = if early { 2 } else { rng.random_int(3, 5) as usize };
    let repetitions = if early { 3 } else { 4 };
    let category = *rng.choose(&CATEGORIES);
    let base = rng.sample(category, length);
    let blank = rng.index(length * repetitions);
    build(grade, category, &base, repetitions, blank, rng)
}

/// Repeat `base` and blank out position `blank` of the full sequence
pub fn build(
    grade: f64,
    category: &[&str],
    base: &[&str],
    repetitions: usize,
    blank: usize,
    rng: &mut QuizRng,
) -> Question {
    let full: Vec<&str> = base.iter().copied().cycle().take(base.len() * repetitions).collect();
    let correct = full[blank].to_string();

    let shown: Vec<&str> = full
        .iter()
        .enumerate()
        .map(|(i, s)| if i == blank { BLANK } else { *s })
        .collect();

    // Symbols from the pattern itself are the most tempting wrong picks
    let in_pattern = rng.shuffle(base);
    let others = rng.shuffle(category);
    let wrong = fill_distinct(
        &correct,
        in_pattern.into_iter().map(str::to_string),
        others.into_iter().map(str::to_string),
        WRONG_ANSWER_COUNT,
    );

    Question::new(
        QuestionKind::PatternRecognition,
        grade,
        format!("Complete the repeating pattern: {}", shown.join(" ")),
        correct,
        wrong.into_iter().map(Answer::Text).collect(),
    )
    .with_feedback("Look for the repeated sequence to identify the missing element.")
    .with_difficulty(base.len().div_ceil(3) as u32)
}
