//! Browser bindings for the battle shell
//!
//! The JS side owns rendering, monsters and HP. It asks the engine for one
//! question at a time as JSON and reports back the answer the player picked.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::quiz::{Answer, Question, QuestionFactory, RngState};
use crate::settings::Settings;

/// Question plus its answers in display order
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Presented<'a> {
    #[serde(flatten)]
    question: &'a Question,
    answers: Vec<Answer>,
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {e}").into());
    }
    log::info!("Math Ninja engine ready");
}

#[wasm_bindgen]
pub struct QuizEngine {
    factory: QuestionFactory,
    settings: Settings,
    current: Option<Question>,
}

#[wasm_bindgen]
impl QuizEngine {
    /// Engine with a fixed seed, or seeded from the clock when `seed` is absent.
    /// Throws for seeds that are not whole, non-negative safe integers.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> Result<QuizEngine, JsValue> {
        let mut settings = Settings::load();
        if let Some(seed) = seed {
            let state = RngState::from_js_number(seed)
                .ok_or_else(|| JsValue::from_str(&format!("invalid seed {seed}")))?;
            settings.seed = Some(state.seed);
        }
        Ok(QuizEngine {
            factory: QuestionFactory::from_settings(&settings),
            settings,
            current: None,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn grade(&self) -> f64 {
        self.settings.grade
    }

    #[wasm_bindgen(js_name = setGrade)]
    pub fn set_grade(&mut self, grade: f64) {
        self.settings.grade = grade;
        self.settings.save();
    }

    #[wasm_bindgen(getter, js_name = questionsPerBattle)]
    pub fn questions_per_battle(&self) -> u32 {
        self.settings.questions_per_battle
    }

    /// Next question for `grade` as JSON
    pub fn generate(&mut self, grade: f64) -> Result<String, JsValue> {
        let question = self
            .factory
            .generate(grade)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let answers = question.all_answers(self.factory.rng_mut());
        let json = serde_json::to_string(&Presented {
            question: &question,
            answers,
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.current = Some(question);
        Ok(json)
    }

    /// Next question at the saved grade
    #[wasm_bindgen(js_name = nextQuestion)]
    pub fn next_question(&mut self) -> Result<String, JsValue> {
        self.generate(self.settings.grade)
    }

    /// Whether `answer` is correct for the last generated question
    pub fn check(&self, answer: &str) -> bool {
        self.current
            .as_ref()
            .is_some_and(|q| q.is_correct(answer))
    }

    /// Level up after a won battle when auto-advance is on. Returns the grade.
    #[wasm_bindgen(js_name = battleWon)]
    pub fn battle_won(&mut self) -> f64 {
        if self.settings.auto_advance {
            self.settings.advance_grade();
            self.settings.save();
        }
        self.settings.grade
    }
}
