use crate::survey::scoring::{ScoreBucket, ScoreCard};
use serde::Serialize;

/// How engaged the parent is with personality development programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerceptionTier {
    HighlyEngaged,
    SomeAwareness,
    NeedsInformation,
}

impl PerceptionTier {
    const ENGAGED_CUTOFF: i32 = 4;
    const AWARE_CUTOFF: i32 = 2;

    pub fn classify(scores: &ScoreCard) -> Self {
        let familiarity = scores.get(ScoreBucket::Familiarity);
        let importance = scores.get(ScoreBucket::Importance);

        if familiarity >= Self::ENGAGED_CUTOFF && importance >= Self::ENGAGED_CUTOFF {
            Self::HighlyEngaged
        } else if familiarity >= Self::AWARE_CUTOFF || importance >= Self::AWARE_CUTOFF {
            Self::SomeAwareness
        } else {
            Self::NeedsInformation
        }
    }

    pub const fn sentence(self) -> &'static str {
        match self {
            Self::HighlyEngaged => {
                "Highly engaged and values personality development for children."
            }
            Self::SomeAwareness => {
                "Shows some awareness and value for personality development."
            }
            Self::NeedsInformation => {
                "May need more information on personality development programs."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BigFiveTrait {
    Extraversion,
    Agreeableness,
    Conscientiousness,
    Neuroticism,
    Openness,
}

impl BigFiveTrait {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Extraversion,
            Self::Agreeableness,
            Self::Conscientiousness,
            Self::Neuroticism,
            Self::Openness,
        ]
    }

    pub const fn bucket(self) -> ScoreBucket {
        match self {
            Self::Extraversion => ScoreBucket::Extraversion,
            Self::Agreeableness => ScoreBucket::Agreeableness,
            Self::Conscientiousness => ScoreBucket::Conscientiousness,
            Self::Neuroticism => ScoreBucket::Neuroticism,
            Self::Openness => ScoreBucket::Openness,
        }
    }

    pub const fn key(self) -> &'static str {
        self.bucket().key()
    }

    /// Highest strictly-positive trait; the earlier trait wins a tie.
    pub fn dominant(scores: &ScoreCard) -> Option<Self> {
        let mut best: Option<(Self, i32)> = None;
        for candidate in Self::ordered() {
            let value = scores.get(candidate.bucket());
            let leads = match best {
                Some((_, top)) => value > top,
                None => true,
            };
            if leads {
                best = Some((candidate, value));
            }
        }

        best.filter(|(_, value)| *value > 0).map(|(candidate, _)| candidate)
    }
}

/// Composite learning styles, in ranking tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    AbstractTheoretical,
    ConcretePractical,
    Reflective,
    Active,
    Analytical,
    Narrative,
    Sequential,
    Global,
}

impl LearningStyle {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::Visual,
            Self::Auditory,
            Self::Kinesthetic,
            Self::AbstractTheoretical,
            Self::ConcretePractical,
            Self::Reflective,
            Self::Active,
            Self::Analytical,
            Self::Narrative,
            Self::Sequential,
            Self::Global,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Auditory => "auditory",
            Self::Kinesthetic => "kinesthetic",
            Self::AbstractTheoretical => "abstract_theoretical",
            Self::ConcretePractical => "concrete_practical",
            Self::Reflective => "reflective",
            Self::Active => "active",
            Self::Analytical => "analytical",
            Self::Narrative => "narrative",
            Self::Sequential => "sequential",
            Self::Global => "global",
        }
    }

    /// Raw buckets summed into this composite.
    pub const fn components(self) -> &'static [ScoreBucket] {
        match self {
            Self::Visual => &[ScoreBucket::Visual],
            Self::Auditory => &[ScoreBucket::Auditory],
            Self::Kinesthetic => &[ScoreBucket::Kinesthetic],
            Self::AbstractTheoretical => &[
                ScoreBucket::AbstractConceptualization,
                ScoreBucket::AbstractTheoretical,
            ],
            Self::ConcretePractical => &[
                ScoreBucket::Kinesthetic,
                ScoreBucket::SituatedLearning,
                ScoreBucket::ConcretePractical,
            ],
            Self::Reflective => &[
                ScoreBucket::Independent,
                ScoreBucket::NarrativeLearning,
                ScoreBucket::Reflective,
            ],
            Self::Active => &[
                ScoreBucket::SocialVerbal,
                ScoreBucket::ActiveExperimentation,
                ScoreBucket::Active,
            ],
            Self::Analytical => &[ScoreBucket::AnalyticalThinking],
            Self::Narrative => &[ScoreBucket::NarrativeLearning],
            Self::Sequential => &[ScoreBucket::SequentialThinking],
            Self::Global => &[ScoreBucket::GlobalThinking],
        }
    }

    pub fn score(self, scores: &ScoreCard) -> i32 {
        self.components()
            .iter()
            .map(|bucket| scores.get(*bucket))
            .fold(0, i32::saturating_add)
    }

    /// Positive composites, highest first; ties keep definition order.
    pub fn ranked(scores: &ScoreCard) -> Vec<RankedStyle> {
        let mut ranked: Vec<RankedStyle> = Self::ordered()
            .into_iter()
            .map(|style| RankedStyle {
                style,
                score: style.score(scores),
            })
            .filter(|entry| entry.score > 0)
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedStyle {
    pub style: LearningStyle,
    pub score: i32,
}

/// `concrete_practical` -> `CONCRETE PRACTICAL`.
pub(crate) fn heading(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}
