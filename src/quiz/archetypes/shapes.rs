//! Shape naming, side/corner counting and shape properties

use std::fmt;

use crate::consts::WRONG_ANSWER_COUNT;
use crate::quiz::distractors::fill_distinct;
use crate::quiz::grade::GradeBand;
use crate::quiz::question::{Answer, Question};
use crate::quiz::rng::QuizRng;
use crate::util::number_word;

use super::QuestionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Straight sides
    pub sides: u32,
    pub corners: u32,
    pub equal_sides: bool,
    pub right_angles: u32,
    pub parallel_pairs: u32,
    pub curved: bool,
}

const fn shape(
    name: &'static str,
    symbol: &'static str,
    sides: u32,
    equal_sides: bool,
    right_angles: u32,
    parallel_pairs: u32,
) -> Shape {
    Shape {
        name,
        symbol,
        sides,
        corners: sides,
        equal_sides,
        right_angles,
        parallel_pairs,
        curved: false,
    }
}

pub const SQUARE: Shape = shape("square", "▢", 4, true, 4, 2);
pub const TRIANGLE: Shape = shape("triangle", "△", 3, true, 0, 0);
pub const CIRCLE: Shape = Shape {
    name: "circle",
    symbol: "○",
    sides: 0,
    corners: 0,
    equal_sides: false,
    right_angles: 0,
    parallel_pairs: 0,
    curved: true,
};
pub const RECTANGLE: Shape = shape("rectangle", "▭", 4, false, 4, 2);
pub const DIAMOND: Shape = shape("diamond", "◇", 4, true, 0, 2);
pub const PENTAGON: Shape = shape("pentagon", "⬟", 5, true, 0, 0);
pub const HEXAGON: Shape = shape("hexagon", "⬡", 6, true, 0, 3);
pub const OCTAGON: Shape = shape("octagon", "⯃", 8, true, 0, 4);
pub const SEMICIRCLE: Shape = Shape {
    name: "semicircle",
    symbol: "◠",
    sides: 1,
    corners: 0,
    equal_sides: false,
    right_angles: 0,
    parallel_pairs: 0,
    curved: true,
};
pub const TRAPEZOID: Shape = shape("trapezoid", "⏢", 4, false, 0, 1);

pub const CATALOGUE: [Shape; 10] = [
    SQUARE, TRIANGLE, CIRCLE, RECTANGLE, DIAMOND, PENTAGON, HEXAGON, OCTAGON, SEMICIRCLE,
    TRAPEZOID,
];

/// Shapes in play at `grade`
pub fn available(grade: f64) -> Vec<Shape> {
    match GradeBand::of(grade) {
        GradeBand::EarlyK => vec![SQUARE, TRIANGLE, CIRCLE],
        GradeBand::LateK => vec![SQUARE, TRIANGLE, CIRCLE, RECTANGLE, DIAMOND],
        GradeBand::MidFirst => vec![SQUARE, TRIANGLE, CIRCLE, RECTANGLE, DIAMOND, PENTAGON],
        GradeBand::Second => vec![
            SQUARE, TRIANGLE, CIRCLE, RECTANGLE, DIAMOND, PENTAGON, HEXAGON, TRAPEZOID,
        ],
        GradeBand::MidSecond | GradeBand::Third => CATALOGUE.to_vec(),
    }
}

/// A statement that may or may not hold for a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Sides(u32),
    Corners(u32),
    EqualSides,
    FourRightAngles,
    ParallelPairs(u32),
    NoCorners,
    CurvedSide,
}

impl Property {
    pub fn holds_for(&self, shape: &Shape) -> bool {
        match *self {
            Property::Sides(n) => shape.sides == n,
            Property::Corners(n) => shape.corners == n,
            Property::EqualSides => shape.equal_sides && shape.sides > 0,
            Property::FourRightAngles => shape.right_angles == 4,
            Property::ParallelPairs(n) => shape.parallel_pairs == n,
            Property::NoCorners => shape.corners == 0,
            Property::CurvedSide => shape.curved,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Property::Sides(1) => f.write_str("one straight side"),
            Property::Sides(n) => write!(f, "{} straight sides", number_word(n)),
            Property::Corners(1) => f.write_str("one corner"),
            Property::Corners(n) => write!(f, "{} corners", number_word(n)),
            Property::EqualSides => f.write_str("all sides the same length"),
            Property::FourRightAngles => f.write_str("four right angles"),
            Property::ParallelPairs(1) => f.write_str("exactly one pair of parallel sides"),
            Property::ParallelPairs(n) => {
                write!(f, "exactly {} pairs of parallel sides", number_word(n))
            }
            Property::NoCorners => f.write_str("no corners"),
            Property::CurvedSide => f.write_str("a curved side"),
        }
    }
}

fn true_properties(shape: &Shape) -> Vec<Property> {
    let mut out = Vec::new();
    if shape.sides > 0 {
        out.push(Property::Sides(shape.sides));
    }
    if shape.corners > 0 {
        out.push(Property::Corners(shape.corners));
    }
    out.extend(
        [
            Property::EqualSides,
            Property::FourRightAngles,
            Property::ParallelPairs(shape.parallel_pairs),
            Property::NoCorners,
            Property::CurvedSide,
        ]
        .into_iter()
        .filter(|p| !matches!(p, Property::ParallelPairs(0)) && p.holds_for(shape)),
    );
    out
}

fn false_properties(shape: &Shape) -> Vec<Property> {
    [
        Property::Sides(shape.sides + 1),
        Property::Sides(shape.sides.saturating_sub(1).max(1)),
        Property::Corners(shape.corners + 1),
        Property::EqualSides,
        Property::FourRightAngles,
        Property::ParallelPairs(1),
        Property::ParallelPairs(2),
        Property::NoCorners,
        Property::CurvedSide,
    ]
    .into_iter()
    .filter(|p| !p.holds_for(shape))
    .collect()
}

pub fn generate(grade: f64, rng: &mut QuizRng) -> Question {
    let shapes = available(grade);
    let shape = *rng.choose(&shapes);
    match GradeBand::of(grade) {
        GradeBand::EarlyK => name_question(grade, shape, &shapes, "What shape is this?", rng)
            .with_feedback("Look at the shape carefully."),
        GradeBand::LateK => {
            if rng.coin_flip() {
                count_question(grade, shape, "sides", shape.sides)
            } else {
                count_question(grade, shape, "corners", shape.corners)
            }
        }
        GradeBand::MidFirst | GradeBand::Second => {
            if shape.sides > 0 && rng.coin_flip() {
                count_question(grade, shape, "sides", shape.sides).with_difficulty(2)
            } else {
                name_question(grade, shape, &shapes, "What kind of shape is this?", rng)
                    .with_feedback("Count the sides to identify the shape.")
                    .with_difficulty(2)
            }
        }
        GradeBand::MidSecond | GradeBand::Third => property_question(grade, shape, rng),
    }
}

fn name_question(
    grade: f64,
    shape: Shape,
    in_play: &[Shape],
    prompt: &str,
    rng: &mut QuizRng,
) -> Question {
    let nearby = rng.shuffle(in_play);
    let rest = rng.shuffle(&CATALOGUE);
    let wrong = fill_distinct(
        &shape.name,
        nearby.iter().map(|s| s.name),
        rest.iter().map(|s| s.name),
        WRONG_ANSWER_COUNT,
    );
    Question::new(
        QuestionKind::ShapeProperties,
        grade,
        format!("{prompt} {}", shape.symbol),
        shape.name,
        wrong.into_iter().map(Answer::from).collect(),
    )
}

fn count_question(grade: f64, shape: Shape, what: &str, count: u32) -> Question {
    let count = i64::from(count);
    // Off-by-one first; a circle (zero) still gets three choices
    let mut primary = vec![count + 1];
    if count > 0 {
        primary.push(count - 1);
    }
    primary.push(count + 2);
    let wrong = fill_distinct(&count, primary, [count + 3, count + 4], WRONG_ANSWER_COUNT);
    Question::new(
        QuestionKind::ShapeProperties,
        grade,
        format!("How many {what} does this shape have? {}", shape.symbol),
        count,
        wrong.into_iter().map(Answer::Number).collect(),
    )
    .with_feedback(format!("Count the {what} one by one."))
}

fn property_question(grade: f64, shape: Shape, rng: &mut QuizRng) -> Question {
    let truths = true_properties(&shape);
    let correct = *rng.choose(&truths);
    let falsehoods = rng.shuffle(&false_properties(&shape));
    let wrong = fill_distinct(
        &correct.to_string(),
        falsehoods.iter().map(Property::to_string),
        std::iter::empty(),
        WRONG_ANSWER_COUNT,
    );
    let text = if rng.coin_flip() {
        format!("Which is true about this shape? {}", shape.symbol)
    } else {
        format!("This is a {}. Which is true about it?", shape.name)
    };
    Question::new(
        QuestionKind::ShapeProperties,
        grade,
        text,
        correct.to_string(),
        wrong.into_iter().map(Answer::Text).collect(),
    )
    .with_feedback("Think about the sides and angles of the shape.")
    .with_difficulty(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_by_symbol(text: &str) -> Option<Shape> {
        CATALOGUE
            .into_iter()
            .find(|s| text.ends_with(s.symbol) || text.contains(&format!("a {}.", s.name)))
    }

    #[test]
    fn test_every_shape_has_truths_and_enough_falsehoods() {
        for shape in CATALOGUE {
            let truths = true_properties(&shape);
            assert!(!truths.is_empty(), "{}", shape.name);
            assert!(truths.iter().all(|p| p.holds_for(&shape)));
            let falsehoods = false_properties(&shape);
            assert!(falsehoods.len() >= 3, "{}", shape.name);
            assert!(falsehoods.iter().all(|p| !p.holds_for(&shape)));
        }
    }

    #[test]
    fn test_property_text() {
        assert_eq!(Property::Sides(4).to_string(), "four straight sides");
        assert_eq!(Property::Sides(1).to_string(), "one straight side");
        assert_eq!(Property::ParallelPairs(2).to_string(), "exactly two pairs of parallel sides");
        assert!(Property::FourRightAngles.holds_for(&RECTANGLE));
        assert!(!Property::EqualSides.holds_for(&RECTANGLE));
        assert!(!Property::EqualSides.holds_for(&CIRCLE));
    }

    #[test]
    fn test_availability_grows_with_grade() {
        assert_eq!(available(0.0).len(), 3);
        assert_eq!(available(1.0).len(), 5);
        assert_eq!(available(1.5).len(), 6);
        assert_eq!(available(2.0).len(), 8);
        assert_eq!(available(3.0).len(), 10);
    }

    #[test]
    fn test_early_names_use_whole_catalogue_for_fill() {
        let mut rng = QuizRng::seeded(51);
        for _ in 0..100 {
            let q = generate(0.0, &mut rng);
            assert!(q.correct_answer().as_text().is_some());
            assert!(q.validate().is_ok(), "{q:?}");
        }
    }

    #[test]
    fn test_counts_never_cross_kind() {
        let mut rng = QuizRng::seeded(52);
        for _ in 0..200 {
            let q = generate(1.0, &mut rng);
            let shape = shape_by_symbol(q.question_text()).unwrap();
            let expected = if q.question_text().contains("sides") {
                shape.sides
            } else {
                shape.corners
            };
            assert_eq!(q.correct_answer(), &Answer::Number(i64::from(expected)));
            assert!(q.wrong_answers().iter().all(|a| a.as_number().is_some()));
            assert!(q.validate().is_ok());
        }
    }

    #[test]
    fn test_property_answers_are_true_and_distractors_false() {
        let mut rng = QuizRng::seeded(53);
        for _ in 0..300 {
            let q = generate(3.0, &mut rng);
            let shape = shape_by_symbol(q.question_text()).unwrap();
            let truths: Vec<String> = true_properties(&shape).iter().map(|p| p.to_string()).collect();
            assert!(truths.contains(&q.correct_answer().to_string()));
            for wrong in q.wrong_answers() {
                assert!(!truths.contains(&wrong.to_string()), "{wrong} true for {}", shape.name);
            }
            assert!(q.validate().is_ok());
        }
    }
}
