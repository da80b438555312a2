//! Short story problems for the four operations

use crate::quiz::distractors::{SynthOptions, numeric_distractors};
use crate::quiz::grade::{difficulty_for, number_range};
use crate::quiz::question::{Answer, Question};
use crate::quiz::rng::QuizRng;
use crate::util::fill_template;

use super::QuestionKind;

const NAMES: [&str; 8] = ["Maya", "Sam", "Lucas", "Priya", "Omar", "Grace", "Kenji", "Sofia"];
const NOUNS: [&str; 8] = [
    "apples", "stickers", "marbles", "shells", "crayons", "balloons", "cookies", "acorns",
];

/// Narrative with `{name}`, `{noun}`, `{a}` and `{b}` slots
struct Template {
    text: &'static str,
    feedback: &'static str,
}

const ADD: [Template; 3] = [
    Template {
        text: "{name} has {a} {noun} and finds {b} more. How many {noun} does {name} have in total?",
        feedback: "Add the quantities together to find the total.",
    },
    Template {
        text: "There are {a} {noun} in one basket and {b} {noun} in another. How many {noun} are there altogether?",
        feedback: "Combine both groups to get the total.",
    },
    Template {
        text: "{name} collected {a} {noun} in the morning and {b} in the afternoon. How many {noun} did {name} collect?",
        feedback: "Put the two amounts together.",
    },
];

const SUB: [Template; 3] = [
    Template {
        text: "{name} has {a} {noun} and gives away {b}. How many {noun} are left?",
        feedback: "Subtract the ones given away from the total.",
    },
    Template {
        text: "There are {a} {noun} on a table. {b} {noun} are taken away. How many {noun} remain?",
        feedback: "Take away the removed ones to find what remains.",
    },
    Template {
        text: "{name} had {a} {noun}. {b} of them got lost. How many {noun} does {name} still have?",
        feedback: "Start with what {name} had and count back the lost ones.",
    },
];

const MUL: [Template; 3] = [
    Template {
        text: "There are {a} bags with {b} {noun} in each bag. How many {noun} are there in total?",
        feedback: "Multiply the number of bags by the number in each bag.",
    },
    Template {
        text: "{name} makes {a} rows of {noun} with {b} in each row. How many {noun} is that?",
        feedback: "Count the rows, then multiply by how many are in each row.",
    },
    Template {
        text: "{name} buys {a} boxes of {noun}. Each box holds {b}. How many {noun} did {name} buy?",
        feedback: "Equal groups can be added quickly with multiplication.",
    },
];

const DIV: [Template; 3] = [
    Template {
        text: "There are {a} {noun} shared equally among {b} friends. How many {noun} does each friend get?",
        feedback: "Divide the total by the number of friends.",
    },
    Template {
        text: "{name} packs {a} {noun} into bags with {b} in each bag. How many bags does {name} fill?",
        feedback: "Divide the total by how many go in each bag.",
    },
    Template {
        text: "{name} puts {a} {noun} into {b} equal piles. How many {noun} are in each pile?",
        feedback: "Split the total into equal groups by dividing.",
    },
];

#[allow(clippy::too_many_arguments)]
fn story(
    kind: QuestionKind,
    grade: f64,
    templates: &[Template],
    (a, b): (i64, i64),
    answer: i64,
    mistakes: &[i64],
    difficulty: u32,
    rng: &mut QuizRng,
) -> Question {
    let template = rng.choose(templates);
    let name = *rng.choose(&NAMES);
    let noun = *rng.choose(&NOUNS);
    let (a, b) = (a.to_string(), b.to_string());
    let pairs = [("name", name), ("noun", noun), ("a", a.as_str()), ("b", b.as_str())];
    let text = fill_template(template.text, &pairs);
    let feedback = fill_template(template.feedback, &pairs);

    let wrong = numeric_distractors(
        answer,
        mistakes.iter().copied(),
        grade,
        SynthOptions::default(),
        rng,
    );
    Question::new(
        kind,
        grade,
        text,
        answer,
        wrong.into_iter().map(Answer::Number).collect(),
    )
    .with_feedback(feedback)
    .with_difficulty(difficulty)
}

pub fn addition(grade: f64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let a = rng.random_int(range.min, range.max - 1);
    let b = rng.random_int(range.min, range.max - a);
    let sum = a + b;
    story(
        QuestionKind::WordProblemAdd,
        grade,
        &ADD,
        (a, b),
        sum,
        &[(a - b).abs()],
        difficulty_for(sum, range.max),
        rng,
    )
}

pub fn subtraction(grade: f64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let a = rng.random_int(range.min, range.max);
    let b = rng.random_int(1, a);
    let left = a - b;
    story(
        QuestionKind::WordProblemSub,
        grade,
        &SUB,
        (a, b),
        left,
        &[a + b],
        difficulty_for(a, range.max),
        rng,
    )
}

pub fn multiplication(grade: f64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let a = rng.random_int(range.min, (range.max / 2).max(range.min));
    let b = rng.random_int(1, (range.max / a).max(1));
    let product = a * b;
    story(
        QuestionKind::WordProblemMul,
        grade,
        &MUL,
        (a, b),
        product,
        &[a + b, product + a],
        difficulty_for(product, range.max),
        rng,
    )
}

/// The dividend is built as `divisor * quotient` so the answer is always whole
pub fn division(grade: f64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let divisor = rng.random_int(2, range.max.min(5));
    let quotient = rng.random_int(1, (range.max / divisor).max(1));
    let dividend = divisor * quotient;
    story(
        QuestionKind::WordProblemDiv,
        grade,
        &DIV,
        (dividend, divisor),
        quotient,
        &[dividend - divisor, quotient + divisor],
        difficulty_for(quotient, range.max),
        rng,
    )
}
