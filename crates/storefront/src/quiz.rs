//! Skincare quiz: three questions, one bundle recommendation.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use skintilla_catalog::ProductId;
use skintilla_core::{DomainError, DomainResult};
use skintilla_routine::{RoutineBuilder, RoutineEvent, TimeOfDay};

macro_rules! answer_enum {
    ($t:ident, $name:literal { $($variant:ident => $value:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $t {
            $($variant),+
        }

        impl $t {
            /// Option value as submitted by the quiz.
            pub fn value(self) -> &'static str {
                match self {
                    $($t::$variant => $value),+
                }
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($t::$variant),)+
                    other => Err(DomainError::validation(format!("unknown {}: {}", $name, other))),
                }
            }
        }
    };
}

answer_enum!(SkinType, "skin type" {
    Dry => "dry",
    Oily => "oily",
    Combination => "combination",
    Sensitive => "sensitive",
});

answer_enum!(Concern, "concern" {
    Dullness => "dullness",
    Aging => "aging",
    Uneven => "uneven",
    Hydration => "hydration",
});

answer_enum!(TimeCommitment, "time commitment" {
    Minimal => "minimal",
    Moderate => "moderate",
    Extensive => "extensive",
    Flexible => "flexible",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: &'static [QuizOption],
}

const fn opt(label: &'static str, value: &'static str, description: &'static str) -> QuizOption {
    QuizOption {
        label,
        value,
        description,
    }
}

pub static QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        id: 1,
        question: "How would you describe your skin type?",
        options: &[
            opt("Dry", "dry", "Tight, flaky, or rough texture"),
            opt("Oily", "oily", "Shiny, enlarged pores, prone to breakouts"),
            opt("Combination", "combination", "Oily T-zone, dry cheeks"),
            opt("Sensitive", "sensitive", "Easily irritated, redness-prone"),
        ],
    },
    QuizQuestion {
        id: 2,
        question: "What is your primary skin concern?",
        options: &[
            opt("Dullness", "dullness", "Lack of radiance and glow"),
            opt("Fine Lines", "aging", "Wrinkles and loss of firmness"),
            opt("Uneven Tone", "uneven", "Dark spots or hyperpigmentation"),
            opt("Hydration", "hydration", "Dehydrated, needs moisture"),
        ],
    },
    QuizQuestion {
        id: 3,
        question: "How much time do you dedicate to skincare daily?",
        options: &[
            opt("5 Minutes", "minimal", "Quick and simple routine"),
            opt("10 Minutes", "moderate", "A balanced, mindful routine"),
            opt("15+ Minutes", "extensive", "Full ritual with multiple steps"),
            opt("Flexible", "flexible", "Varies day to day"),
        ],
    },
];

/// A recommended bundle. `product_ids` refer to the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub name: &'static str,
    pub tagline: &'static str,
    pub product_ids: &'static [&'static str],
    pub routine: &'static str,
}

impl Recommendation {
    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.product_ids.iter().map(|id| ProductId::new(*id))
    }

    /// Load the bundle into one routine through the builder's idempotent add.
    ///
    /// Products already present are skipped; only effective adds produce events.
    pub fn apply_to(
        &self,
        builder: &mut RoutineBuilder<'_>,
        time: TimeOfDay,
    ) -> DomainResult<Vec<RoutineEvent>> {
        let mut events = Vec::new();
        for id in self.product_ids() {
            if let Some(event) = builder.add_product(time, &id)? {
                events.push(event);
            }
        }
        Ok(events)
    }
}

const GLOW_RITUAL: Recommendation = Recommendation {
    name: "The Glow Ritual",
    tagline: "Radiance-boosting essentials for luminous skin",
    product_ids: &["serum", "toner", "moisturizer"],
    routine: "Start with the Botanical Toner to prep and balance, follow with the Radiance Serum for brightening, and seal with the Velvet Moisturizer for lasting hydration.",
};

const COMPLETE_SET: Recommendation = Recommendation {
    name: "The Complete Set",
    tagline: "Comprehensive anti-aging care for youthful radiance",
    product_ids: &["serum", "eye-cream", "moisturizer", "toner"],
    routine: "Cleanse, then apply the Botanical Toner. Layer the Radiance Serum for antioxidant protection, dab the Eye Revival Cream around the eyes, and finish with the Velvet Moisturizer.",
};

const ESSENTIALS: Recommendation = Recommendation {
    name: "The Essentials",
    tagline: "Deep hydration for dry, thirsty skin",
    product_ids: &["moisturizer", "toner"],
    routine: "After cleansing, apply the Botanical Toner to soothe and prep, then generously apply the Velvet Moisturizer to lock in deep, lasting hydration.",
};

/// Pick a bundle for the quiz answers.
///
/// Concern decides: the dry-skin rule is only reached for the hydration
/// concern, which maps to the same bundle, so skin type never changes the result.
pub fn recommend(_skin_type: SkinType, concern: Concern) -> Recommendation {
    match concern {
        Concern::Dullness | Concern::Uneven => GLOW_RITUAL,
        Concern::Aging => COMPLETE_SET,
        Concern::Hydration => ESSENTIALS,
    }
}

/// Where the quiz is after an answer is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizProgress {
    /// Showing the question at this index.
    Question(usize),
    Finished,
}

/// Step-by-step quiz state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quiz {
    step: usize,
    answers: Vec<&'static str>,
    selected: Option<&'static str>,
    finished: bool,
}

impl Quiz {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn answers(&self) -> &[&'static str] {
        &self.answers
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        if self.finished {
            return None;
        }
        QUESTIONS.get(self.step)
    }

    /// Highlight an option of the current question.
    pub fn select(&mut self, value: &str) -> DomainResult<()> {
        let question = self
            .current_question()
            .ok_or_else(|| DomainError::invariant("quiz is already finished"))?;
        let option = question
            .options
            .iter()
            .find(|o| o.value == value)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "{value} is not an option for question {}",
                    question.id
                ))
            })?;
        self.selected = Some(option.value);
        Ok(())
    }

    /// Confirm the selected option and advance.
    pub fn next(&mut self) -> DomainResult<QuizProgress> {
        if self.finished {
            return Ok(QuizProgress::Finished);
        }
        let answer = self
            .selected
            .take()
            .ok_or_else(|| DomainError::validation("select an option before continuing"))?;
        self.answers.push(answer);

        if self.step + 1 < QUESTIONS.len() {
            self.step += 1;
            Ok(QuizProgress::Question(self.step))
        } else {
            self.finished = true;
            tracing::debug!(answers = ?self.answers, "quiz finished");
            Ok(QuizProgress::Finished)
        }
    }

    /// Step back one question, re-selecting the answer given there.
    ///
    /// Returns `false` on the first question or once finished.
    pub fn back(&mut self) -> bool {
        if self.finished || self.step == 0 {
            return false;
        }
        self.step -= 1;
        self.selected = self.answers.pop();
        true
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Progress bar fill: a highlighted option counts as half a step.
    pub fn progress_percent(&self) -> f64 {
        if self.finished {
            return 100.0;
        }
        let half = if self.selected.is_some() { 0.5 } else { 0.0 };
        (self.step as f64 + half) / QUESTIONS.len() as f64 * 100.0
    }

    /// The recommendation, once every question is answered.
    pub fn result(&self) -> DomainResult<Option<Recommendation>> {
        if !self.finished {
            return Ok(None);
        }
        let skin_type: SkinType = self.answers[0].parse()?;
        let concern: Concern = self.answers[1].parse()?;
        Ok(Some(recommend(skin_type, concern)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skintilla_catalog::Catalog;

    fn answer_all(quiz: &mut Quiz, answers: [&str; 3]) {
        for answer in answers {
            quiz.select(answer).unwrap();
            quiz.next().unwrap();
        }
    }

    #[test]
    fn concern_outranks_skin_type() {
        assert_eq!(recommend(SkinType::Dry, Concern::Dullness).name, "The Glow Ritual");
        assert_eq!(recommend(SkinType::Oily, Concern::Uneven), GLOW_RITUAL);
        assert_eq!(recommend(SkinType::Dry, Concern::Aging).name, "The Complete Set");
        assert_eq!(recommend(SkinType::Dry, Concern::Hydration), ESSENTIALS);
        assert_eq!(recommend(SkinType::Sensitive, Concern::Hydration), ESSENTIALS);
    }

    #[test]
    fn recommendations_only_reference_catalog_products() {
        let catalog = Catalog::skintilla();
        for rec in [GLOW_RITUAL, COMPLETE_SET, ESSENTIALS] {
            for id in rec.product_ids() {
                assert!(catalog.contains(&id), "{} references unknown {id}", rec.name);
            }
        }
    }

    #[test]
    fn full_walkthrough() {
        let mut quiz = Quiz::new();
        assert_eq!(quiz.progress_percent(), 0.0);
        assert_eq!(quiz.current_question().unwrap().id, 1);

        quiz.select("oily").unwrap();
        assert!((quiz.progress_percent() - 100.0 / 6.0).abs() < 1e-9);
        assert_eq!(quiz.next().unwrap(), QuizProgress::Question(1));
        assert_eq!(quiz.result().unwrap(), None);

        quiz.select("aging").unwrap();
        quiz.next().unwrap();
        quiz.select("flexible").unwrap();
        assert_eq!(quiz.next().unwrap(), QuizProgress::Finished);

        assert!(quiz.is_finished());
        assert_eq!(quiz.progress_percent(), 100.0);
        assert!(quiz.current_question().is_none());
        assert_eq!(quiz.result().unwrap().unwrap().name, "The Complete Set");
    }

    #[test]
    fn next_requires_selection() {
        let mut quiz = Quiz::new();
        let err = quiz.next().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(quiz.step(), 0);
    }

    #[test]
    fn select_rejects_options_from_other_questions() {
        let mut quiz = Quiz::new();
        assert!(quiz.select("aging").is_err());
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn back_restores_previous_answer() {
        let mut quiz = Quiz::new();
        assert!(!quiz.back());

        quiz.select("dry").unwrap();
        quiz.next().unwrap();
        quiz.select("uneven").unwrap();

        assert!(quiz.back());
        assert_eq!(quiz.step(), 0);
        assert_eq!(quiz.selected(), Some("dry"));
        assert!(quiz.answers().is_empty());
    }

    #[test]
    fn restart_clears_everything() {
        let mut quiz = Quiz::new();
        answer_all(&mut quiz, ["dry", "hydration", "minimal"]);
        assert!(!quiz.back());

        quiz.restart();
        assert_eq!(quiz, Quiz::new());
        assert!(quiz.select("sensitive").is_ok());
    }

    #[test]
    fn select_after_finish_is_rejected() {
        let mut quiz = Quiz::new();
        answer_all(&mut quiz, ["combination", "dullness", "moderate"]);
        assert!(matches!(quiz.select("dry"), Err(DomainError::InvariantViolation(_))));
        assert_eq!(quiz.next().unwrap(), QuizProgress::Finished);
    }

    #[test]
    fn recommendation_loads_into_routine_once() {
        let catalog = Catalog::skintilla();
        let mut builder = RoutineBuilder::new(&catalog);

        let mut quiz = Quiz::new();
        answer_all(&mut quiz, ["dry", "hydration", "minimal"]);
        let rec = quiz.result().unwrap().unwrap();

        let events = rec.apply_to(&mut builder, TimeOfDay::Evening).unwrap();
        assert_eq!(events.len(), 2);
        assert!(rec.apply_to(&mut builder, TimeOfDay::Evening).unwrap().is_empty());

        let evening = builder.view_for(TimeOfDay::Evening);
        let ordered: Vec<&str> = evening
            .selection
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(ordered, vec!["Botanical Toner", "Velvet Moisturizer"]);
        assert!(builder.selection(TimeOfDay::Morning).is_empty());
    }

    #[test]
    fn answer_values_round_trip_through_parse() {
        for question in QUESTIONS.iter() {
            for option in question.options {
                let parsed = match question.id {
                    1 => option.value.parse::<SkinType>().map(|v| v.value()),
                    2 => option.value.parse::<Concern>().map(|v| v.value()),
                    _ => option.value.parse::<TimeCommitment>().map(|v| v.value()),
                };
                assert_eq!(parsed.unwrap(), option.value);
            }
        }
    }
}
