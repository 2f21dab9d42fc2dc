mod recommendation;
mod views;

pub use views::{BigFiveTrait, LearningStyle, PerceptionTier, RankedStyle};

use super::scoring::ScoreCard;
use serde::Serialize;
use views::heading;

/// Structured form of the parent-facing insight. [`PersonalityInsight::render`]
/// produces the stored text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityInsight {
    pub perception: PerceptionTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_trait: Option<BigFiveTrait>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learning_styles: Vec<RankedStyle>,
    pub recommendation: String,
}

impl PersonalityInsight {
    pub fn from_scores(scores: &ScoreCard) -> Self {
        Self {
            perception: PerceptionTier::classify(scores),
            dominant_trait: BigFiveTrait::dominant(scores),
            learning_styles: LearningStyle::ranked(scores),
            recommendation: recommendation::recommend(scores),
        }
    }

    /// Four paragraphs separated by blank lines.
    pub fn render(&self) -> String {
        let mut insight = String::new();

        insight.push_str("Parental Perception: ");
        insight.push_str(self.perception.sentence());
        insight.push_str("\n\n");

        match self.dominant_trait {
            Some(dominant) => insight.push_str(&format!(
                "Child's Personality Tendency: Primarily **{}**. ",
                heading(dominant.key())
            )),
            None => insight.push_str("Child's Personality Tendency: A balanced blend of traits."),
        }
        insight.push_str("\n\n");

        match self.learning_styles.as_slice() {
            [] => insight.push_str(
                "Preferred Learning Style: Adaptable and shows no single dominant style.",
            ),
            [first, rest @ ..] => {
                insight.push_str(&format!(
                    "Preferred Learning Style: Strong inclination towards **{}** learning.",
                    heading(first.style.key())
                ));
                if let Some(second) = rest.first() {
                    insight.push_str(&format!(
                        " Also shows strengths in **{}** approaches.",
                        heading(second.style.key())
                    ));
                }
            }
        }
        insight.push_str("\n\n");

        insight.push_str(&format!(
            "Recommended Development Approach: Consider programs that {}.",
            self.recommendation
        ));

        insight
    }
}

/// Insight text for a score card. Pure; the same scores always give the same text.
pub fn generate_insight(scores: &ScoreCard) -> String {
    PersonalityInsight::from_scores(scores).render()
}

/// Single-line form used in journals and e-mails.
pub fn flatten_insight(insight: &str) -> String {
    insight.split_whitespace().collect::<Vec<_>>().join(" ")
}
