//! Money questions: coin counting, making change, dollars and cents.
//!
//! Amounts are carried as integer cents and only formatted at the edge:
//! below a dollar as `"37¢"`, from a dollar up as `"$1.25"`.

use crate::quiz::distractors::{SynthOptions, fill_distinct, numeric_distractors};
use crate::quiz::grade::{GradeBand, difficulty_for};
use crate::quiz::question::{Answer, Question};
use crate::quiz::rng::QuizRng;
use crate::consts::WRONG_ANSWER_COUNT;
use crate::util::{fill_template, pluralize};

use super::QuestionKind;

pub const PENNY: i64 = 1;
pub const NICKEL: i64 = 5;
pub const DIME: i64 = 10;
pub const QUARTER: i64 = 25;
pub const HALF_DOLLAR: i64 = 50;
pub const DOLLAR: i64 = 100;

/// Denominations and the largest total for one grade band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoneyTier {
    pub denominations: &'static [i64],
    pub max_total: i64,
}

pub fn tier(grade: f64) -> MoneyTier {
    const ALL: &[i64] = &[PENNY, NICKEL, DIME, QUARTER, HALF_DOLLAR, DOLLAR];
    let (denominations, max_total) = match GradeBand::of(grade) {
        GradeBand::EarlyK => (&ALL[..1], 10),
        GradeBand::LateK => (&ALL[..3], 25),
        GradeBand::MidFirst | GradeBand::Second => (&ALL[..4], 100),
        GradeBand::MidSecond => (ALL, 200),
        GradeBand::Third => (ALL, 500),
    };
    MoneyTier {
        denominations,
        max_total,
    }
}

/// `"37¢"` below a dollar, `"$1.25"` from a dollar up
pub fn format_cents(cents: i64) -> String {
    if cents < DOLLAR {
        format!("{cents}¢")
    } else {
        format_dollars(cents)
    }
}

/// Always dollar notation: `"$0.75"`
pub fn format_dollars(cents: i64) -> String {
    format!("${}.{:02}", cents / DOLLAR, cents % DOLLAR)
}

/// Inverse of [`format_cents`] and [`format_dollars`]. Also accepts whole
/// dollars without cents (`"$1"`, as printed on a bill).
pub fn parse_money(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Some(cents) = s.strip_suffix('¢') {
        return cents.parse::<u32>().ok().map(i64::from);
    }
    let amount = s.strip_prefix('$')?;
    let (dollars, cents) = match amount.split_once('.') {
        Some((d, c)) if c.len() == 2 => (d, c.parse::<u32>().ok()?),
        Some(_) => return None,
        None => (amount, 0),
    };
    let dollars = dollars.parse::<u32>().ok()?;
    Some(i64::from(dollars) * DOLLAR + i64::from(cents))
}

/// Display glyph for a coin or bill
pub fn glyph(value: i64) -> String {
    if value == DOLLAR {
        "💵$1".to_string()
    } else {
        format!("🪙{value}¢")
    }
}

fn coin_name(value: i64) -> (&'static str, &'static str) {
    match value {
        PENNY => ("penny", "pennies"),
        NICKEL => ("nickel", "nickels"),
        DIME => ("dime", "dimes"),
        QUARTER => ("quarter", "quarters"),
        HALF_DOLLAR => ("half dollar", "half dollars"),
        _ => ("dollar", "dollars"),
    }
}

fn money_wrong(
    correct: i64,
    mistakes: impl IntoIterator<Item = i64>,
    grade: f64,
    rng: &mut QuizRng,
) -> Vec<Answer> {
    let options = SynthOptions::default().with_max_difference((correct / 2).max(2));
    numeric_distractors(correct, mistakes, grade, options, rng)
        .into_iter()
        .map(|c| Answer::Text(format_cents(c)))
        .collect()
}

pub fn generate(grade: f64, rng: &mut QuizRng) -> Question {
    let q = match GradeBand::of(grade) {
        GradeBand::EarlyK => count_pennies(grade, rng),
        GradeBand::LateK => {
            if rng.coin_flip() {
                single_coin(grade, rng)
            } else {
                mixed_coins(grade, rng)
            }
        }
        GradeBand::MidFirst | GradeBand::Second => match rng.random_int(0, 2) {
            0 => count_quarters(grade, rng),
            1 => mixed_coins(grade, rng),
            _ => simple_change(grade, rng),
        },
        GradeBand::MidSecond => match rng.random_int(0, 2) {
            0 => mixed_coins(grade, rng),
            1 => simple_change(grade, rng),
            _ => cents_to_dollars(grade, rng),
        },
        GradeBand::Third => match rng.random_int(0, 2) {
            0 => complex_change(grade, rng),
            1 => word_problem(grade, rng),
            _ => multi_step(grade, rng),
        },
    };
    log::trace!("money question: {}", q.question_text());
    q
}

/// "How many pennies are there?" answered with a count, not an amount
pub fn count_pennies(grade: f64, rng: &mut QuizRng) -> Question {
    let count = rng.random_int(1, tier(grade).max_total);
    let coins = vec![glyph(PENNY); count as usize].join(" ");
    let mut primary = vec![count + 1, count + 2];
    if count > 1 {
        primary.insert(1, count - 1);
    }
    let wrong = fill_distinct(&count, primary, [count + 3], WRONG_ANSWER_COUNT);
    Question::new(
        QuestionKind::MoneyCounting,
        grade,
        format!("How many pennies are there? {coins}"),
        pluralize(count, "penny", "pennies"),
        wrong
            .into_iter()
            .map(|n| Answer::Text(pluralize(n, "penny", "pennies")))
            .collect(),
    )
    .with_feedback("Count each penny one by one.")
}

/// "How much money is this?" over an explicit set of coins
pub fn count_coins(grade: f64, coins: &[i64], rng: &mut QuizRng) -> Question {
    let total: i64 = coins.iter().sum();
    let visuals: Vec<String> = coins.iter().map(|&c| glyph(c)).collect();
    let distinct_kinds = {
        let mut kinds = coins.to_vec();
        kinds.sort_unstable();
        kinds.dedup();
        kinds
    };

    let (mistakes, feedback) = if let [only] = distinct_kinds[..] {
        // Counting the coins instead of their value is the classic slip
        let (_, plural) = coin_name(only);
        (
            vec![total + only, total - only, coins.len() as i64],
            if only == PENNY {
                "Count each penny one by one.".to_string()
            } else {
                format!("Count the {plural} by {only}s.")
            },
        )
    } else {
        (
            vec![total + NICKEL, total - PENNY, coins.len() as i64],
            "Start with the biggest coins, then count on with the smaller ones.".to_string(),
        )
    };

    Question::new(
        QuestionKind::MoneyCounting,
        grade,
        format!("How much money is this? {}", visuals.join(" + ")),
        format_cents(total),
        money_wrong(total, mistakes, grade, rng),
    )
    .with_feedback(feedback)
    .with_difficulty(difficulty_for(total, tier(grade).max_total))
}

fn single_coin(grade: f64, rng: &mut QuizRng) -> Question {
    let tier = tier(grade);
    let coin = *rng.choose(tier.denominations);
    let count = rng.random_int(1, (tier.max_total / coin).clamp(1, 5));
    count_coins(grade, &vec![coin; count as usize], rng)
}

/// Random coins from the tier, largest first, never above the tier maximum
pub fn pick_coins(grade: f64, rng: &mut QuizRng) -> Vec<i64> {
    let tier = tier(grade);
    let wanted = rng.random_int(2, 5) as usize;
    let mut coins = Vec::with_capacity(wanted);
    let mut total = 0;
    for _ in 0..wanted * 4 {
        if coins.len() >= wanted {
            break;
        }
        let coin = *rng.choose(tier.denominations);
        if total + coin <= tier.max_total {
            coins.push(coin);
            total += coin;
        }
    }
    if coins.is_empty() {
        coins.push(PENNY);
    }
    coins.sort_unstable_by(|a, b| b.cmp(a));
    coins
}

fn mixed_coins(grade: f64, rng: &mut QuizRng) -> Question {
    let coins = pick_coins(grade, rng);
    count_coins(grade, &coins, rng)
}

fn count_quarters(grade: f64, rng: &mut QuizRng) -> Question {
    let count = rng.random_int(1, 3);
    count_coins(grade, &vec![QUARTER; count as usize], rng)
}

/// Change from a dollar for a price under a dollar
pub fn simple_change(grade: f64, rng: &mut QuizRng) -> Question {
    let price = rng.random_int(10, 90);
    let change = DOLLAR - price;
    Question::new(
        QuestionKind::MoneyCounting,
        grade,
        format!(
            "If something costs {} and you pay with {}, how much change should you get back?",
            format_cents(price),
            format_dollars(DOLLAR)
        ),
        format_cents(change),
        money_wrong(change, [change + 5, change - 5, change + 10], grade, rng),
    )
    .with_feedback("Subtract from 100¢ or count up from the price to $1.00.")
    .with_difficulty(2)
}

/// Smallest whole-dollar payment that leaves some change
pub fn payment_for(price: i64) -> i64 {
    (price / DOLLAR + 1) * DOLLAR
}

pub fn complex_change(grade: f64, rng: &mut QuizRng) -> Question {
    let price = rng.random_int(150, 450);
    let payment = payment_for(price);
    let change = payment - price;
    Question::new(
        QuestionKind::MoneyCounting,
        grade,
        format!(
            "If something costs {} and you pay with {}, how much change should you get back?",
            format_dollars(price),
            format_dollars(payment)
        ),
        format_cents(change),
        money_wrong(change, [change + 10, change - 10, change + DOLLAR], grade, rng),
    )
    .with_feedback("Subtract the price from the payment, or count up from the price.")
    .with_difficulty(3)
}

const WORD_SCENARIOS: [&str; 3] = [
    "You have {a} and spend {b} on lunch. How much money do you have left?",
    "You need {a} for a toy. You have saved {b}. How much more do you need?",
    "{name} had {a} in a piggy bank and took out {b} for a book. How much is left in the piggy bank?",
];

const SAVERS: [&str; 5] = ["Ava", "Leo", "Mia", "Noah", "Zoe"];

pub fn word_problem(grade: f64, rng: &mut QuizRng) -> Question {
    let have = rng.random_int(200, 500);
    let spend = rng.random_int(100, have - 1);
    let left = have - spend;
    let scenario = *rng.choose(&WORD_SCENARIOS);
    let name = *rng.choose(&SAVERS);
    let (a, b) = (format_dollars(have), format_dollars(spend));
    let text = fill_template(scenario, &[("a", &a), ("b", &b), ("name", name)]);
    Question::new(
        QuestionKind::MoneyCounting,
        grade,
        text,
        format_cents(left),
        money_wrong(left, [have + spend, left + 10, left - 10], grade, rng),
    )
    .with_feedback("Write out the problem and solve step by step.")
    .with_difficulty(3)
}

pub fn multi_step(grade: f64, rng: &mut QuizRng) -> Question {
    let first = rng.random_int(100, 300);
    let second = rng.random_int(100, 300);
    let total = first + second;
    // Pay with the next five-dollar step
    let payment = (total / 500 + 1) * 500;
    let change = payment - total;
    Question::new(
        QuestionKind::MoneyCounting,
        grade,
        format!(
            "You buy two items at the store: one costs {} and another costs {}. If you pay with {}, how much change should you get back?",
            format_dollars(first),
            format_dollars(second),
            format_dollars(payment)
        ),
        format_cents(change),
        money_wrong(change, [payment - first, payment - second, total], grade, rng),
    )
    .with_feedback("First add the prices, then subtract from the payment amount.")
    .with_difficulty(3)
}

const ITEMS: [&str; 4] = ["toy", "book", "game", "lunch"];

/// Cents to dollar notation. Wrong answers shift the decimal point.
pub fn cents_to_dollars(grade: f64, rng: &mut QuizRng) -> Question {
    let amount = rng.random_int(25, 200);
    let item = rng.choose(&ITEMS);
    Question::new(
        QuestionKind::MoneyCounting,
        grade,
        format!("A {item} costs {amount}¢. How many dollars and cents is that?"),
        format_dollars(amount),
        vec![
            Answer::Text(format_dollars(amount * 10)),
            Answer::Text(format_dollars(amount * DOLLAR)),
            Answer::Text(format!("{amount}¢")),
        ],
    )
    .with_feedback("Divide the cents by 100 to get dollars.")
    .with_difficulty(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin_sum(text: &str) -> i64 {
        text.trim_start_matches("How much money is this? ")
            .split(" + ")
            .map(|g| parse_money(g.trim_start_matches("🪙").trim_start_matches("💵")).unwrap())
            .sum()
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "0¢");
        assert_eq!(format_cents(37), "37¢");
        assert_eq!(format_cents(100), "$1.00");
        assert_eq!(format_cents(125), "$1.25");
        assert_eq!(format_cents(405), "$4.05");
        assert_eq!(format_dollars(75), "$0.75");
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("36¢"), Some(36));
        assert_eq!(parse_money("$1.25"), Some(125));
        assert_eq!(parse_money("$0.05"), Some(5));
        assert_eq!(parse_money("$1"), Some(100));
        assert_eq!(parse_money("$1.5"), None);
        assert_eq!(parse_money("12"), None);
        assert_eq!(parse_money("-3¢"), None);
    }

    #[test]
    fn test_quarter_dime_penny() {
        let mut rng = QuizRng::seeded(61);
        let q = count_coins(2.0, &[25, 10, 1], &mut rng);
        assert_eq!(q.question_text(), "How much money is this? 🪙25¢ + 🪙10¢ + 🪙1¢");
        assert_eq!(q.correct_answer(), &Answer::text("36¢"));
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_single_coin_type_offers_coin_count_mistake() {
        let mut rng = QuizRng::seeded(62);
        let q = count_coins(1.0, &[10, 10, 10], &mut rng);
        assert_eq!(q.correct_answer(), &Answer::text("30¢"));
        assert!(q.wrong_answers().contains(&Answer::text("3¢")));
        assert!(q.wrong_answers().contains(&Answer::text("40¢")));
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_counting_matches_visual_in_every_band() {
        let mut rng = QuizRng::seeded(63);
        for grade in [1.0, 1.5, 2.0, 2.5, 3.0] {
            for _ in 0..300 {
                let q = generate(grade, &mut rng);
                if q.question_text().starts_with("How much money is this?") {
                    let sum = coin_sum(q.question_text());
                    assert!(sum <= tier(grade).max_total);
                    assert_eq!(parse_money(&q.correct_answer().to_string()), Some(sum));
                }
                assert!(q.validate().is_ok(), "{q:?}");
            }
        }
    }

    #[test]
    fn test_first_grade_gets_second_grade_set() {
        assert_eq!(tier(1.25), tier(2.0));
        assert!(tier(1.5).denominations.contains(&QUARTER));
        let mut rng = QuizRng::seeded(67);
        let texts: Vec<String> = (0..300)
            .map(|_| generate(1.25, &mut rng).question_text().to_string())
            .collect();
        assert!(texts.iter().any(|t| t.contains("how much change")));
        assert!(texts.iter().any(|t| t.contains("🪙25¢")));
    }

    #[test]
    fn test_pennies_for_kindergarten() {
        let mut rng = QuizRng::seeded(64);
        for _ in 0..100 {
            let q = generate(0.0, &mut rng);
            let count = q.question_text().matches("🪙1¢").count() as i64;
            assert_eq!(q.correct_answer().to_string(), pluralize(count, "penny", "pennies"));
            assert!(q.validate().is_ok());
        }
    }

    #[test]
    fn test_change_always_positive() {
        assert_eq!(payment_for(150), 200);
        assert_eq!(payment_for(300), 400);
        let mut rng = QuizRng::seeded(65);
        for _ in 0..200 {
            let q = complex_change(3.0, &mut rng);
            let change = parse_money(&q.correct_answer().to_string()).unwrap();
            assert!(change > 0 && change <= DOLLAR);
            assert!(q.validate().is_ok());

            let q = multi_step(3.0, &mut rng);
            assert!(parse_money(&q.correct_answer().to_string()).unwrap() > 0);
            assert!(q.validate().is_ok());
        }
    }

    #[test]
    fn test_cents_to_dollars() {
        let mut rng = QuizRng::seeded(66);
        for _ in 0..100 {
            let q = cents_to_dollars(2.5, &mut rng);
            assert!(q.correct_answer().to_string().starts_with('$'));
            assert!(q.validate().is_ok());
        }
    }
}
