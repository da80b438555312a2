//! Grade bands and the numeric ranges they unlock
//!
//! Grade is a continuous scalar (0.0 = start of kindergarten). Archetypes branch
//! on the half-integer cutoffs in `consts::GRADE_CUTOFFS`; every archetype uses
//! the same cutoffs so pacing stays consistent.

use serde::{Deserialize, Serialize};

use crate::consts::GRADE_CUTOFFS;

/// Coarse tier a grade falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeBand {
    /// grade <= 0.5
    EarlyK,
    /// grade <= 1.0
    LateK,
    /// grade <= 1.5
    MidFirst,
    /// grade <= 2.0
    Second,
    /// grade <= 2.5
    MidSecond,
    /// grade > 2.5
    Third,
}

impl GradeBand {
    pub fn of(grade: f64) -> Self {
        const BANDS: [GradeBand; 5] = [
            GradeBand::EarlyK,
            GradeBand::LateK,
            GradeBand::MidFirst,
            GradeBand::Second,
            GradeBand::MidSecond,
        ];
        GRADE_CUTOFFS
            .iter()
            .zip(BANDS)
            .find(|(cutoff, _)| grade <= **cutoff)
            .map(|(_, band)| band)
            .unwrap_or(GradeBand::Third)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeBand::EarlyK => "early kindergarten",
            GradeBand::LateK => "late kindergarten",
            GradeBand::MidFirst => "mid first grade",
            GradeBand::Second => "second grade",
            GradeBand::MidSecond => "mid second grade",
            GradeBand::Third => "third grade",
        }
    }
}

/// Closed integer interval used for operand selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

impl NumberRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Operand range for arithmetic-style archetypes
pub fn number_range(grade: f64) -> NumberRange {
    match GradeBand::of(grade) {
        GradeBand::EarlyK => NumberRange::new(1, 5),
        GradeBand::LateK => NumberRange::new(1, 10),
        GradeBand::MidFirst => NumberRange::new(1, 20),
        _ => NumberRange::new(1, 100),
    }
}

/// Damage-scaling signal: answer magnitude relative to the grade's range, at least 1
pub fn difficulty_for(value: i64, range_max: i64) -> u32 {
    let scale = range_max.max(1) as f64 * 0.6;
    let raw = (value.unsigned_abs() as f64 / scale).ceil();
    (raw as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_cutoffs_are_inclusive() {
        assert_eq!(GradeBand::of(0.0), GradeBand::EarlyK);
        assert_eq!(GradeBand::of(0.5), GradeBand::EarlyK);
        assert_eq!(GradeBand::of(0.51), GradeBand::LateK);
        assert_eq!(GradeBand::of(1.0), GradeBand::LateK);
        assert_eq!(GradeBand::of(1.5), GradeBand::MidFirst);
        assert_eq!(GradeBand::of(2.0), GradeBand::Second);
        assert_eq!(GradeBand::of(2.5), GradeBand::MidSecond);
        assert_eq!(GradeBand::of(2.75), GradeBand::Third);
        assert_eq!(GradeBand::of(10.0), GradeBand::Third);
    }

    #[test]
    fn test_number_range() {
        assert_eq!(number_range(0.0), NumberRange::new(1, 5));
        assert_eq!(number_range(1.0), NumberRange::new(1, 10));
        assert_eq!(number_range(1.25), NumberRange::new(1, 20));
        assert_eq!(number_range(3.0), NumberRange::new(1, 100));
    }

    #[test]
    fn test_difficulty_never_below_one() {
        assert_eq!(difficulty_for(0, 5), 1);
        assert_eq!(difficulty_for(3, 5), 1);
        assert_eq!(difficulty_for(4, 5), 2);
        assert_eq!(difficulty_for(10, 5), 4);
        assert_eq!(difficulty_for(-7, 10), 2);
    }
}
