//! Comparison questions: pick the one true relational statement.
//!
//! Every answer option uses the same two operands. The correct option is
//! computed from the operand values, so exactly one of `<`, `>`, `=` holds
//! and it is always the correct answer.

use std::cmp::Ordering;
use std::fmt;

use crate::quiz::grade::{GradeBand, number_range};
use crate::quiz::question::{Answer, Question};
use crate::quiz::rng::QuizRng;

use super::QuestionKind;

/// One side of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Number(i64),
    Sum(i64, i64),
    Difference(i64, i64),
}

impl Operand {
    pub fn value(&self) -> i64 {
        match *self {
            Operand::Number(n) => n,
            Operand::Sum(a, b) => a + b,
            Operand::Difference(a, b) => a - b,
        }
    }

    /// Parse the display form back ("7", "(3 + 4)", "(9 - 2)")
    pub fn parse(s: &str) -> Option<Operand> {
        let s = s.trim();
        if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
            if let Some((a, b)) = inner.split_once(" + ") {
                return Some(Operand::Sum(a.trim().parse().ok()?, b.trim().parse().ok()?));
            }
            if let Some((a, b)) = inner.split_once(" - ") {
                return Some(Operand::Difference(a.trim().parse().ok()?, b.trim().parse().ok()?));
            }
            return None;
        }
        s.parse().ok().map(Operand::Number)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => write!(f, "{n}"),
            Operand::Sum(a, b) => write!(f, "({a} + {b})"),
            Operand::Difference(a, b) => write!(f, "({a} - {b})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Less,
    Greater,
    Equal,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::Less, Relation::Greater, Relation::Equal];

    pub fn between(left: i64, right: i64) -> Relation {
        match left.cmp(&right) {
            Ordering::Less => Relation::Less,
            Ordering::Greater => Relation::Greater,
            Ordering::Equal => Relation::Equal,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::Less => "<",
            Relation::Greater => ">",
            Relation::Equal => "=",
        }
    }

    pub fn holds(&self, left: i64, right: i64) -> bool {
        Relation::between(left, right) == *self
    }
}

fn statement(left: Operand, relation: Relation, right: Operand) -> String {
    format!("{left} {} {right}", relation.symbol())
}

/// Evaluate a statement such as "(3 + 4) > 6". `None` if it does not parse.
pub fn evaluate_statement(s: &str) -> Option<bool> {
    let mut parts = None;
    for relation in Relation::ALL {
        let sep = format!(" {} ", relation.symbol());
        if let Some((l, r)) = s.split_once(&sep) {
            parts = Some((l, relation, r));
            break;
        }
    }
    let (left, relation, right) = parts?;
    let left = Operand::parse(left)?;
    let right = Operand::parse(right)?;
    Some(relation.holds(left.value(), right.value()))
}

pub fn generate(grade: f64, rng: &mut QuizRng) -> Question {
    let range = number_range(grade);
    let (left, right, difficulty) = if grade <= 1.0 {
        // Plain numbers, always unequal
        let a = rng.random_int(range.min, range.max);
        let mut b = rng.random_int(range.min, range.max - 1);
        if b >= a {
            b += 1;
        }
        (Operand::Number(a), Operand::Number(b), 1)
    } else if grade <= 2.0 {
        let a = rng.random_int(range.min, range.max);
        let b = rng.random_int(1, 5);
        let target = (a + b + rng.random_int(-3, 3)).max(0);
        (Operand::Sum(a, b), Operand::Number(target), 2)
    } else {
        let a = rng.random_int(range.min, range.max / 2);
        let b = rng.random_int(1, 10);
        let c = rng.random_int(range.min, range.max);
        let d = rng.random_int(0, c);
        (Operand::Sum(a, b), Operand::Difference(c, d), 3)
    };
    build(grade, left, right).with_difficulty(difficulty)
}

/// Comparison question over two explicit operands
pub fn build(grade: f64, left: Operand, right: Operand) -> Question {
    let truth = Relation::between(left.value(), right.value());

    let mut wrong: Vec<Answer> = Relation::ALL
        .into_iter()
        .filter(|r| *r != truth)
        .map(|r| Answer::Text(statement(left, r, right)))
        .collect();
    // Same relation with the operands swapped reads plausibly but is false
    let reversed = match truth {
        Relation::Less => statement(right, Relation::Less, left),
        Relation::Greater => statement(right, Relation::Greater, left),
        Relation::Equal => statement(right, Relation::Greater, left),
    };
    wrong.push(Answer::Text(reversed));

    let feedback = if GradeBand::of(grade) <= GradeBand::LateK {
        "The alligator mouth always eats the bigger number!"
    } else {
        "Work out each side first, then compare the values."
    };

    Question::new(
        QuestionKind::Comparison,
        grade,
        format!("Which is correct? Compare {left} and {right}."),
        statement(left, truth, right),
        wrong,
    )
    .with_feedback(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(q: &Question) -> Vec<String> {
        q.wrong_answers().iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_unequal_numbers_offer_equals_as_wrong() {
        let q = build(0.5, Operand::Number(7), Operand::Number(3));
        assert_eq!(q.correct_answer(), &Answer::text("7 > 3"));
        let wrong = texts(&q);
        assert!(wrong.contains(&"7 = 3".to_string()));
        assert!(wrong.contains(&"7 < 3".to_string()));
        assert!(wrong.contains(&"3 > 7".to_string()));
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_equal_expression() {
        let q = build(1.5, Operand::Sum(4, 2), Operand::Number(6));
        assert_eq!(q.correct_answer(), &Answer::text("(4 + 2) = 6"));
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_evaluate_statement() {
        assert_eq!(evaluate_statement("(3 + 4) > 6"), Some(true));
        assert_eq!(evaluate_statement("(3 + 4) = (9 - 2)"), Some(true));
        assert_eq!(evaluate_statement("2 < 1"), Some(false));
        assert_eq!(evaluate_statement("nonsense"), None);
    }

    #[test]
    fn test_exactly_one_true_statement() {
        let mut rng = QuizRng::seeded(31);
        for grade in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            for _ in 0..200 {
                let q = generate(grade, &mut rng);
                assert_eq!(evaluate_statement(&q.correct_answer().to_string()), Some(true));
                for w in texts(&q) {
                    assert_eq!(evaluate_statement(&w), Some(false), "{w} in {q:?}");
                }
                assert!(q.validate().is_ok());
            }
        }
    }

    #[test]
    fn test_early_grades_never_equal() {
        let mut rng = QuizRng::seeded(32);
        for _ in 0..300 {
            let q = generate(0.5, &mut rng);
            assert!(!q.correct_answer().to_string().contains(" = "));
        }
    }
}
