//! Math Ninja native driver
//!
//! Prints a batch of generated questions. The browser build enters through
//! `math_ninja::wasm` instead.
//!
//! Usage: `math-ninja [grade] [count] [--json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();

    match native::run(std::env::args().skip(1).collect()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is math_ninja::wasm::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use math_ninja::quiz::GradeBand;
    use math_ninja::{QuestionFactory, Settings};

    struct Args {
        grade: Option<f64>,
        count: Option<usize>,
        json: bool,
    }

    fn parse(args: Vec<String>) -> Result<Args, String> {
        let mut parsed = Args {
            grade: None,
            count: None,
            json: false,
        };
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--json" {
                parsed.json = true;
            } else {
                positional.push(arg);
            }
        }
        let mut positional = positional.into_iter();
        if let Some(raw) = positional.next() {
            parsed.grade = Some(raw.parse().map_err(|_| format!("invalid grade {raw:?}"))?);
        }
        if let Some(raw) = positional.next() {
            parsed.count = Some(raw.parse().map_err(|_| format!("invalid count {raw:?}"))?);
        }
        if let Some(extra) = positional.next() {
            return Err(format!("unexpected argument {extra:?}"));
        }
        Ok(parsed)
    }

    pub fn run(args: Vec<String>) -> Result<(), String> {
        let args = parse(args)?;
        let settings = Settings::load();
        let grade = args.grade.unwrap_or(settings.grade);
        let count = args
            .count
            .unwrap_or(settings.questions_per_battle as usize);

        let mut factory = QuestionFactory::from_settings(&settings);
        log::info!(
            "Math Ninja (native) - grade {grade} ({}), seed {}",
            GradeBand::of(grade).as_str(),
            factory.seed()
        );

        let questions = factory
            .generate_many(grade, count)
            .map_err(|e| e.to_string())?;

        if args.json {
            let json = serde_json::to_string_pretty(&questions).map_err(|e| e.to_string())?;
            println!("{json}");
            return Ok(());
        }

        for (n, question) in questions.iter().enumerate() {
            println!("{}. {question}", n + 1);
            for (letter, answer) in ('A'..).zip(question.all_answers(factory.rng_mut())) {
                let mark = if question.is_correct(&answer.to_string()) { "*" } else { " " };
                println!("   {mark} {letter}) {answer}");
            }
            if !question.feedback().is_empty() {
                println!("     hint: {}", question.feedback());
            }
            println!();
        }
        Ok(())
    }
}
