mod importer;
mod standard;

pub use importer::{CatalogImportError, CatalogImporter};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of questions handed to a respondent per session.
pub const SESSION_QUESTION_LIMIT: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    ParentalPerception,
    PersonalityTrait,
    LearningStyle,
    ThinkingReflection,
    MetacognitiveAwareness,
}

impl QuestionCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ParentalPerception,
            Self::PersonalityTrait,
            Self::LearningStyle,
            Self::ThinkingReflection,
            Self::MetacognitiveAwareness,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::ParentalPerception => "parental_perception",
            Self::PersonalityTrait => "personality_trait",
            Self::LearningStyle => "learning_style",
            Self::ThinkingReflection => "thinking_reflection",
            Self::MetacognitiveAwareness => "metacognitive_awareness",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ParentalPerception => "Parental Perception",
            Self::PersonalityTrait => "Personality Trait",
            Self::LearningStyle => "Learning Style",
            Self::ThinkingReflection => "Thinking & Reflection",
            Self::MetacognitiveAwareness => "Metacognitive Awareness",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.key() == value)
    }
}

/// A single survey prompt. `kind` is the scoring tag stored as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub category: QuestionCategory,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Immutable, id-indexed list of questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<u32, usize>,
}

impl QuestionCatalog {
    /// Later questions win when two share an id.
    pub fn new(questions: Vec<Question>) -> Self {
        let index = questions
            .iter()
            .enumerate()
            .map(|(position, question)| (question.id, position))
            .collect();
        Self { questions, index }
    }

    /// The 36-question parent survey.
    pub fn standard() -> Self {
        Self::new(standard::questions())
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.index
            .get(&id)
            .and_then(|position| self.questions.get(*position))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn text_for(&self, id: u32) -> Option<&str> {
        self.get(id).map(|question| question.text.as_str())
    }

    /// Questions for one respondent: unique by text, shuffled, capped at `limit`.
    ///
    /// When texts repeat, the later question replaces the earlier one but keeps
    /// the earlier slot.
    pub fn session_questions<R>(&self, rng: &mut R, limit: usize) -> Vec<Question>
    where
        R: Rng + ?Sized,
    {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut unique: Vec<&Question> = Vec::new();

        for question in &self.questions {
            match slots.get(question.text.as_str()) {
                Some(&slot) => unique[slot] = question,
                None => {
                    slots.insert(question.text.as_str(), unique.len());
                    unique.push(question);
                }
            }
        }

        unique.shuffle(rng);
        unique.into_iter().take(limit).cloned().collect()
    }
}
