use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named accumulators filled while scoring a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBucket {
    // Parental perception
    Familiarity,
    Exposure,
    Importance,
    Belief,
    InvestmentBelief,
    LikelihoodToInvest,
    Prioritization,
    PositiveImpactBelief,
    NecessityBelief,
    InfluencingFactors,
    // Big Five
    Extraversion,
    Agreeableness,
    Conscientiousness,
    Neuroticism,
    Openness,
    // Learning styles
    SocialVerbal,
    Independent,
    Kinesthetic,
    Visual,
    Auditory,
    ActiveExperimentation,
    SituatedLearning,
    AbstractConceptualization,
    // Thinking and reflection
    SequentialThinking,
    GlobalThinking,
    AnalyticalThinking,
    NarrativeLearning,
    // Metacognitive awareness
    Stability,
    EnvironmentalInfluence,
    Flexibility,
    TraitInfluence,
    // Only fed by fan-out routes and the text bonus pass
    AbstractTheoretical,
    ConcretePractical,
    Reflective,
    Active,
}

impl ScoreBucket {
    pub const COUNT: usize = 35;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Familiarity,
        Self::Exposure,
        Self::Importance,
        Self::Belief,
        Self::InvestmentBelief,
        Self::LikelihoodToInvest,
        Self::Prioritization,
        Self::PositiveImpactBelief,
        Self::NecessityBelief,
        Self::InfluencingFactors,
        Self::Extraversion,
        Self::Agreeableness,
        Self::Conscientiousness,
        Self::Neuroticism,
        Self::Openness,
        Self::SocialVerbal,
        Self::Independent,
        Self::Kinesthetic,
        Self::Visual,
        Self::Auditory,
        Self::ActiveExperimentation,
        Self::SituatedLearning,
        Self::AbstractConceptualization,
        Self::SequentialThinking,
        Self::GlobalThinking,
        Self::AnalyticalThinking,
        Self::NarrativeLearning,
        Self::Stability,
        Self::EnvironmentalInfluence,
        Self::Flexibility,
        Self::TraitInfluence,
        Self::AbstractTheoretical,
        Self::ConcretePractical,
        Self::Reflective,
        Self::Active,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Familiarity => "familiarity",
            Self::Exposure => "exposure",
            Self::Importance => "importance",
            Self::Belief => "belief",
            Self::InvestmentBelief => "investment_belief",
            Self::LikelihoodToInvest => "likelihood_to_invest",
            Self::Prioritization => "prioritization",
            Self::PositiveImpactBelief => "positive_impact_belief",
            Self::NecessityBelief => "necessity_belief",
            Self::InfluencingFactors => "influencing_factors",
            Self::Extraversion => "extraversion",
            Self::Agreeableness => "agreeableness",
            Self::Conscientiousness => "conscientiousness",
            Self::Neuroticism => "neuroticism",
            Self::Openness => "openness",
            Self::SocialVerbal => "social_verbal",
            Self::Independent => "independent",
            Self::Kinesthetic => "kinesthetic",
            Self::Visual => "visual",
            Self::Auditory => "auditory",
            Self::ActiveExperimentation => "active_experimentation",
            Self::SituatedLearning => "situated_learning",
            Self::AbstractConceptualization => "abstract_conceptualization",
            Self::SequentialThinking => "sequential_thinking",
            Self::GlobalThinking => "global_thinking",
            Self::AnalyticalThinking => "analytical_thinking",
            Self::NarrativeLearning => "narrative_learning",
            Self::Stability => "stability",
            Self::EnvironmentalInfluence => "environmental_influence",
            Self::Flexibility => "flexibility",
            Self::TraitInfluence => "trait_influence",
            Self::AbstractTheoretical => "abstract_theoretical",
            Self::ConcretePractical => "concrete_practical",
            Self::Reflective => "reflective",
            Self::Active => "active",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.key() == key)
    }

    /// Title-cased display name, e.g. `Investment Belief`.
    pub fn title(self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// One integer per [`ScoreBucket`], all starting at zero.
///
/// Serializes as a JSON object in bucket order. Deserializing ignores unknown
/// keys and leaves missing buckets at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    values: [i32; ScoreBucket::COUNT],
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self {
            values: [0; ScoreBucket::COUNT],
        }
    }
}

impl ScoreCard {
    pub fn get(&self, bucket: ScoreBucket) -> i32 {
        self.values[bucket.index()]
    }

    /// Saturates at the `i32` bounds.
    pub fn add(&mut self, bucket: ScoreBucket, amount: i32) {
        let slot = &mut self.values[bucket.index()];
        *slot = slot.saturating_add(amount);
    }

    pub fn set(&mut self, bucket: ScoreBucket, value: i32) {
        self.values[bucket.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreBucket, i32)> + '_ {
        ScoreBucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|value| *value == 0)
    }

    /// Builds a card from `(bucket, value)` pairs; repeated buckets accumulate.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ScoreBucket, i32)>,
    {
        let mut card = Self::default();
        for (bucket, value) in pairs {
            card.add(bucket, value);
        }
        card
    }
}

impl Serialize for ScoreCard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(ScoreBucket::COUNT))?;
        for (bucket, value) in self.iter() {
            map.serialize_entry(bucket.key(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoreCard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, i32>::deserialize(deserializer)?;
        let mut card = Self::default();
        for (key, value) in raw {
            if let Some(bucket) = ScoreBucket::from_key(&key) {
                card.set(bucket, value);
            }
        }
        Ok(card)
    }
}
