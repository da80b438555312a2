//! Telling time and elapsed-time questions.
//!
//! Clock arithmetic happens on [`ClockTime`] (12-hour face, wraps 12 -> 1)
//! and [`DayTime`] (AM/PM). Durations are plain minutes until they are
//! printed with [`format_elapsed`].

use std::fmt;

use crate::consts::WRONG_ANSWER_COUNT;
use crate::quiz::distractors::fill_distinct;
use crate::quiz::grade::GradeBand;
use crate::quiz::question::{Answer, Question};
use crate::quiz::rng::QuizRng;
use crate::util::pluralize;

use super::QuestionKind;

const MINUTES_PER_HALF_DAY: i64 = 12 * 60;
const MINUTES_PER_DAY: i64 = 24 * 60;

const HOUR_EMOJI: [&str; 12] = [
    "🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚", "🕛",
];
const HALF_HOUR_EMOJI: [&str; 12] = [
    "🕜", "🕝", "🕞", "🕟", "🕠", "🕡", "🕢", "🕣", "🕤", "🕥", "🕦", "🕧",
];

/// A reading on a 12-hour clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// `hour` is taken modulo 12 (0 reads as 12), `minute` modulo 60
    pub fn new(hour: u32, minute: u32) -> Self {
        let hour = hour % 12;
        Self {
            hour: if hour == 0 { 12 } else { hour },
            minute: minute % 60,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    fn minutes_from_twelve(&self) -> i64 {
        i64::from(self.hour % 12) * 60 + i64::from(self.minute)
    }

    fn from_minutes(total: i64) -> Self {
        let total = total.rem_euclid(MINUTES_PER_HALF_DAY);
        Self::new((total / 60) as u32, (total % 60) as u32)
    }

    /// Move the hands forward (or back, for negative values)
    pub fn add_minutes(&self, minutes: i64) -> Self {
        Self::from_minutes(self.minutes_from_twelve() + minutes)
    }

    /// Minutes the hands travel forward from `self` to `later`
    pub fn minutes_until(&self, later: &ClockTime) -> i64 {
        (later.minutes_from_twelve() - self.minutes_from_twelve()).rem_euclid(MINUTES_PER_HALF_DAY)
    }

    pub fn next_hour(&self) -> u32 {
        self.hour % 12 + 1
    }

    /// Clock-face emoji, only for times on the hour or half hour
    pub fn emoji(&self) -> Option<&'static str> {
        let i = (self.hour - 1) as usize;
        match self.minute {
            0 => Some(HOUR_EMOJI[i]),
            30 => Some(HALF_HOUR_EMOJI[i]),
            _ => None,
        }
    }

    /// Spoken form: "3 o'clock", "quarter past 3", "half past 3", "quarter to 4"
    pub fn phrase(&self) -> String {
        match self.minute {
            0 => format!("{} o'clock", self.hour),
            15 => format!("quarter past {}", self.hour),
            30 => format!("half past {}", self.hour),
            45 => format!("quarter to {}", self.next_hour()),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn flipped(&self) -> Meridiem {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        })
    }
}

/// Time of day with AM/PM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayTime {
    clock: ClockTime,
    meridiem: Meridiem,
}

impl DayTime {
    pub fn new(clock: ClockTime, meridiem: Meridiem) -> Self {
        Self { clock, meridiem }
    }

    fn minutes_since_midnight(&self) -> i64 {
        let half = match self.meridiem {
            Meridiem::Am => 0,
            Meridiem::Pm => MINUTES_PER_HALF_DAY,
        };
        half + self.clock.minutes_from_twelve()
    }

    pub fn add_minutes(&self, minutes: i64) -> Self {
        let total = (self.minutes_since_midnight() + minutes).rem_euclid(MINUTES_PER_DAY);
        let meridiem = if total < MINUTES_PER_HALF_DAY {
            Meridiem::Am
        } else {
            Meridiem::Pm
        };
        Self {
            clock: ClockTime::from_minutes(total),
            meridiem,
        }
    }

    pub fn clock(&self) -> ClockTime {
        self.clock
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.clock, self.meridiem)
    }
}

/// "2 hours and 15 minutes", "1 hour", "45 minutes", "0 minutes"
pub fn format_elapsed(minutes: i64) -> String {
    let (hours, minutes) = (minutes / 60, minutes % 60);
    match (hours, minutes) {
        (0, m) => pluralize(m, "minute", "minutes"),
        (h, 0) => pluralize(h, "hour", "hours"),
        (h, m) => format!(
            "{} and {}",
            pluralize(h, "hour", "hours"),
            pluralize(m, "minute", "minutes")
        ),
    }
}

fn random_hour(rng: &mut QuizRng) -> u32 {
    rng.random_int(1, 12) as u32
}

/// Five-minute mark strictly inside the hour (5..=55)
fn random_five_minutes(rng: &mut QuizRng) -> u32 {
    rng.random_int(1, 11) as u32 * 5
}

fn question(
    grade: f64,
    text: String,
    correct: String,
    mistakes: impl IntoIterator<Item = String>,
    backfill: impl IntoIterator<Item = String>,
) -> Question {
    let wrong = fill_distinct(&correct, mistakes, backfill, WRONG_ANSWER_COUNT);
    let difficulty = match GradeBand::of(grade) {
        GradeBand::EarlyK | GradeBand::LateK => 1,
        GradeBand::MidFirst | GradeBand::Second => 2,
        GradeBand::MidSecond | GradeBand::Third => 3,
    };
    Question::new(
        QuestionKind::TimeQuestion,
        grade,
        text,
        correct,
        wrong.into_iter().map(Answer::Text).collect(),
    )
    .with_difficulty(difficulty)
}

/// Clock-time answers with clock-time distractors
fn clock_question(
    grade: f64,
    text: String,
    correct: ClockTime,
    mistakes: &[ClockTime],
) -> Question {
    let backfill = [5, -5, 15, -15, 60, -60].map(|m| correct.add_minutes(m).to_string());
    question(
        grade,
        text,
        correct.to_string(),
        mistakes.iter().map(ClockTime::to_string),
        backfill,
    )
}

/// Duration answers with duration distractors
fn duration_question(grade: f64, text: String, minutes: i64, mistakes: &[i64]) -> Question {
    let step = if minutes % 60 == 0 { 60 } else { 5 };
    let backfill = [minutes + step, minutes + 2 * step, minutes + 3 * step];
    question(
        grade,
        text,
        format_elapsed(minutes),
        mistakes.iter().filter(|&&m| m > 0).map(|&m| format_elapsed(m)),
        backfill.map(format_elapsed),
    )
}

pub fn generate(grade: f64, rng: &mut QuizRng) -> Question {
    match GradeBand::of(grade) {
        GradeBand::EarlyK => read_hour(grade, rng),
        GradeBand::LateK => {
            if rng.coin_flip() {
                read_half_hour(grade, rng)
            } else {
                read_hour(grade, rng)
            }
        }
        GradeBand::MidFirst => quarter_phrases(grade, rng),
        GradeBand::Second => {
            if rng.coin_flip() {
                quarter_to(grade, rng)
            } else {
                five_minutes(grade, rng)
            }
        }
        GradeBand::MidSecond => {
            if rng.coin_flip() {
                elapsed_hours(grade, rng)
            } else {
                interval_end(grade, rng)
            }
        }
        GradeBand::Third => match rng.random_int(0, 3) {
            0 => complex_elapsed(grade, rng),
            1 => am_pm(grade, rng),
            2 => schedule_word_problem(grade, rng),
            _ => chained_schedule(grade, rng),
        },
    }
}

pub fn read_hour(grade: f64, rng: &mut QuizRng) -> Question {
    let time = ClockTime::new(random_hour(rng), 0);
    let next = time.add_minutes(60);
    let prev = time.add_minutes(-60);
    let emoji = time.emoji().unwrap_or_default();
    if GradeBand::of(grade) == GradeBand::EarlyK && rng.coin_flip() {
        question(
            grade,
            format!("What time is it when the hour hand points to {}? {emoji}", time.hour()),
            time.phrase(),
            [next.phrase(), prev.phrase(), time.add_minutes(30).phrase()],
            [next.add_minutes(60).phrase()],
        )
        .with_feedback("When we say the hour, we say 'o'clock'.")
    } else {
        clock_question(
            grade,
            format!("What time is shown? {emoji}"),
            time,
            &[time.add_minutes(30), next, prev],
        )
        .with_feedback("When both hands point to a number, it's exactly that hour.")
    }
}

pub fn read_half_hour(grade: f64, rng: &mut QuizRng) -> Question {
    let time = ClockTime::new(random_hour(rng), 30);
    let emoji = time.emoji().unwrap_or_default();
    clock_question(
        grade,
        format!("What time is shown? {emoji}"),
        time,
        &[
            ClockTime::new(time.hour(), 0),
            time.add_minutes(60),
            time.add_minutes(-60),
        ],
    )
    .with_feedback("When the minute hand points to 6, it's half past the hour.")
}

pub fn quarter_phrases(grade: f64, rng: &mut QuizRng) -> Question {
    let hour = random_hour(rng);
    let on_hour = ClockTime::new(hour, 0);
    let quarter_past = ClockTime::new(hour, 15);
    let half_past = ClockTime::new(hour, 30);
    let quarter_to_next = ClockTime::new(hour, 45);
    let (text, correct, feedback) = match rng.random_int(0, 2) {
        0 => (
            format!("What time is it? {}", on_hour.emoji().unwrap_or_default()),
            on_hour,
            "When both hands point to the number, it's o'clock.",
        ),
        1 => (
            format!("When the minute hand points to 3, what time is it after {hour} o'clock?"),
            quarter_past,
            "When the minute hand points to 3, it's quarter past the hour.",
        ),
        _ => (
            format!("What time is shown? {}", half_past.emoji().unwrap_or_default()),
            half_past,
            "When the minute hand points to 6, it's half past the hour.",
        ),
    };
    // Every quarter phrase for the same hour, minus the right one
    let mistakes = [on_hour, quarter_past, half_past, quarter_to_next].map(|t| t.phrase());
    question(
        grade,
        text,
        correct.phrase(),
        mistakes,
        [on_hour.add_minutes(60).phrase()],
    )
    .with_feedback(feedback)
}

pub fn quarter_to(grade: f64, rng: &mut QuizRng) -> Question {
    let time = ClockTime::new(random_hour(rng), 45);
    let next = time.next_hour();
    question(
        grade,
        format!("When the minute hand points to 9, what time is it before {next} o'clock?"),
        time.phrase(),
        [
            ClockTime::new(time.hour(), 15).phrase(),
            format!("quarter to {}", time.hour()),
            ClockTime::new(next, 0).phrase(),
        ],
        [ClockTime::new(time.hour(), 30).phrase()],
    )
    .with_feedback("When the minute hand points to 9, it's quarter to the next hour.")
}

pub fn five_minutes(grade: f64, rng: &mut QuizRng) -> Question {
    let hour = random_hour(rng);
    let minute = random_five_minutes(rng);
    let time = ClockTime::new(hour, minute);
    clock_question(
        grade,
        format!(
            "When the minute hand points to {}, what time is it after {hour} o'clock?",
            minute / 5
        ),
        time,
        &[
            ClockTime::new(hour, minute + 5),
            ClockTime::new(hour, minute - 5),
            time.add_minutes(60),
        ],
    )
    .with_feedback("Count by 5s as you move around the clock face.")
}

pub fn elapsed_hours(grade: f64, rng: &mut QuizRng) -> Question {
    let start = ClockTime::new(random_hour(rng), 0);
    let hours = rng.random_int(1, 3);
    let end = start.add_minutes(hours * 60);
    duration_question(
        grade,
        format!("If an activity starts at {start} and ends at {end}, how long does it last?"),
        start.minutes_until(&end),
        &[
            (hours + 1) * 60,
            (hours - 1) * 60,
            i64::from(end.hour()) * 60,
        ],
    )
    .with_feedback("Count the hours from start to end time.")
}

pub fn interval_end(grade: f64, rng: &mut QuizRng) -> Question {
    let start = ClockTime::new(random_hour(rng), random_five_minutes(rng));
    let interval = rng.random_int(1, 4) * 15;
    let end = start.add_minutes(interval);
    clock_question(
        grade,
        format!("If your dance class starts at {start} and lasts {interval} minutes, what time does it end?"),
        end,
        &[
            // Minutes added but the hour never carried
            ClockTime::new(start.hour(), end.minute()),
            ClockTime::new(end.hour(), start.minute()),
            end.add_minutes(60),
        ],
    )
    .with_feedback("Add the minutes first, then adjust the hour if needed.")
}

pub fn complex_elapsed(grade: f64, rng: &mut QuizRng) -> Question {
    let start = ClockTime::new(rng.random_int(1, 11) as u32, rng.random_int(0, 11) as u32 * 5);
    let hours = rng.random_int(1, 3);
    let minutes = i64::from(random_five_minutes(rng));
    let end = start.add_minutes(hours * 60 + minutes);
    clock_question(
        grade,
        format!(
            "If an event starts at {start} and lasts {}, what time does it end?",
            format_elapsed(hours * 60 + minutes)
        ),
        end,
        &[start.add_minutes(hours * 60), end.add_minutes(-60), end.add_minutes(5)],
    )
    .with_feedback("Add hours and minutes separately, then combine them.")
}

const MORNING: [&str; 3] = ["breakfast", "the morning walk", "school start"];
const EVENING: [&str; 3] = ["dinner", "sunset", "the bedtime story"];

pub fn am_pm(grade: f64, rng: &mut QuizRng) -> Question {
    let meridiem = if rng.coin_flip() { Meridiem::Am } else { Meridiem::Pm };
    let start = DayTime::new(ClockTime::new(random_hour(rng), 0), meridiem);
    let activity = match meridiem {
        Meridiem::Am => *rng.choose(&MORNING),
        Meridiem::Pm => *rng.choose(&EVENING),
    };
    let hours = rng.random_int(2, 4);
    let end = start.add_minutes(hours * 60);
    let flipped = DayTime::new(end.clock(), end.meridiem().flipped());
    question(
        grade,
        format!("If {activity} is at {start}, what time will it be {hours} hours later?"),
        end.to_string(),
        [
            flipped.to_string(),
            end.add_minutes(30).to_string(),
            end.add_minutes(-60).to_string(),
        ],
        [end.add_minutes(60).to_string()],
    )
    .with_feedback("Remember to change from AM to PM when crossing 12 o'clock.")
}

pub fn schedule_word_problem(grade: f64, rng: &mut QuizRng) -> Question {
    if rng.coin_flip() {
        let start = ClockTime::new(rng.random_int(1, 8) as u32, 0);
        let length = rng.random_int(2, 4) * 30;
        let end = start.add_minutes(length);
        clock_question(
            grade,
            format!("A movie starts at {start} and is {length} minutes long. What time does it end?"),
            end,
            &[end.add_minutes(-60), end.add_minutes(15), end.add_minutes(60)],
        )
        .with_feedback("Add the hours and minutes separately, then combine.")
    } else {
        let start = ClockTime::new(rng.random_int(8, 11) as u32, 0);
        let end = ClockTime::new(rng.random_int(1, 3) as u32, 0);
        let minutes = start.minutes_until(&end);
        duration_question(
            grade,
            format!("A train ride starts at {start} and ends at {end}. How long is the ride?"),
            minutes,
            &[minutes + 60, minutes - 60, minutes + 120],
        )
        .with_feedback("Count the hours between start and end time.")
    }
}

const FIRST_LEGS: [&str; 3] = ["Recess", "Art class", "Soccer practice"];
const SECOND_LEGS: [&str; 3] = ["lunch", "snack time", "reading time"];

/// Two back-to-back activities; asks when the second one ends
pub fn chained_schedule(grade: f64, rng: &mut QuizRng) -> Question {
    let start = ClockTime::new(random_hour(rng), rng.random_int(0, 11) as u32 * 5);
    let first = rng.random_int(3, 12) * 5;
    let second = rng.random_int(3, 12) * 5;
    let end = start.add_minutes(first + second);
    let first_leg = *rng.choose(&FIRST_LEGS);
    let second_leg = *rng.choose(&SECOND_LEGS);
    let text = format!(
        "{first_leg} starts at {start} and lasts {first} minutes. Then {second_leg} lasts {second} minutes. What time does {second_leg} end?"
    );
    clock_question(
        grade,
        text,
        end,
        &[
            start.add_minutes(first),
            start.add_minutes(second),
            end.add_minutes(10),
        ],
    )
    .with_feedback("Add the first activity, then add the second one to that time.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_wraps_twelve_to_one() {
        let t = ClockTime::new(11, 45);
        assert_eq!(t.add_minutes(30).to_string(), "12:15");
        assert_eq!(t.add_minutes(90).to_string(), "1:15");
        assert_eq!(ClockTime::new(1, 0).add_minutes(-60).to_string(), "12:00");
        assert_eq!(ClockTime::new(12, 5).add_minutes(-10).to_string(), "11:55");
    }

    #[test]
    fn test_minutes_until_rolls_over() {
        let start = ClockTime::new(10, 0);
        let end = ClockTime::new(2, 30);
        assert_eq!(start.minutes_until(&end), 270);
    }

    #[test]
    fn test_phrases_and_emoji() {
        assert_eq!(ClockTime::new(3, 0).phrase(), "3 o'clock");
        assert_eq!(ClockTime::new(3, 15).phrase(), "quarter past 3");
        assert_eq!(ClockTime::new(12, 45).phrase(), "quarter to 1");
        assert_eq!(ClockTime::new(3, 0).emoji(), Some("🕒"));
        assert_eq!(ClockTime::new(12, 30).emoji(), Some("🕧"));
        assert_eq!(ClockTime::new(3, 10).emoji(), None);
    }

    #[test]
    fn test_am_pm_crossing() {
        let t = DayTime::new(ClockTime::new(11, 0), Meridiem::Am);
        assert_eq!(t.add_minutes(180).to_string(), "2:00 PM");
        let t = DayTime::new(ClockTime::new(10, 0), Meridiem::Pm);
        assert_eq!(t.add_minutes(180).to_string(), "1:00 AM");
        let t = DayTime::new(ClockTime::new(12, 0), Meridiem::Am);
        assert_eq!(t.add_minutes(60).to_string(), "1:00 AM");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0 minutes");
        assert_eq!(format_elapsed(45), "45 minutes");
        assert_eq!(format_elapsed(60), "1 hour");
        assert_eq!(format_elapsed(180), "3 hours");
        assert_eq!(format_elapsed(65), "1 hour and 5 minutes");
        assert_eq!(format_elapsed(135), "2 hours and 15 minutes");
    }

    #[test]
    fn test_interval_end_carries_the_hour() {
        let mut rng = QuizRng::seeded(71);
        for _ in 0..200 {
            let q = interval_end(2.5, &mut rng);
            let text = q.question_text();
            let start = text
                .trim_start_matches("If your dance class starts at ")
                .split(' ')
                .next()
                .unwrap();
            let (h, m) = start.split_once(':').unwrap();
            let interval: i64 = text
                .split("lasts ")
                .nth(1)
                .unwrap()
                .split(' ')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            let expected = ClockTime::new(h.parse().unwrap(), m.parse().unwrap()).add_minutes(interval);
            assert_eq!(q.correct_answer(), &Answer::Text(expected.to_string()));
            assert!(q.validate().is_ok(), "{q:?}");
        }
    }

    #[test]
    fn test_every_band_valid() {
        let mut rng = QuizRng::seeded(72);
        for grade in [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0] {
            for _ in 0..300 {
                let q = generate(grade, &mut rng);
                assert!(q.validate().is_ok(), "{q:?}");
            }
        }
    }
}
