use super::buckets::ScoreBucket;
use crate::survey::catalog::QuestionCategory;

/// Where a response's weight goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Routing {
    /// Add 1 per non-empty answer, ignoring the Likert weight.
    Count(ScoreBucket),
    Single(ScoreBucket),
    FanOut(&'static [ScoreBucket]),
    Ignored,
}

const PRESENCE_COUNTED_TYPE: &str = "influencing_factors";

pub(crate) const LEARNING_STYLE_ROUTES: &[(&str, &[ScoreBucket])] = &[
    (
        "auditory_active",
        &[
            ScoreBucket::SocialVerbal,
            ScoreBucket::Auditory,
            ScoreBucket::ActiveExperimentation,
        ],
    ),
    (
        "independent_reflective",
        &[ScoreBucket::Independent, ScoreBucket::Reflective],
    ),
    (
        "kinesthetic_concrete",
        &[ScoreBucket::Kinesthetic, ScoreBucket::ConcretePractical],
    ),
    ("visual", &[ScoreBucket::Visual]),
    ("auditory", &[ScoreBucket::Auditory]),
    (
        "active_experimentation",
        &[ScoreBucket::ActiveExperimentation],
    ),
    (
        "situated_concrete",
        &[ScoreBucket::SituatedLearning, ScoreBucket::ConcretePractical],
    ),
    (
        "abstract_conceptualization",
        &[ScoreBucket::AbstractConceptualization],
    ),
];

const THINKING_REFLECTION_BUCKETS: &[ScoreBucket] = &[
    ScoreBucket::SequentialThinking,
    ScoreBucket::GlobalThinking,
    ScoreBucket::AnalyticalThinking,
    ScoreBucket::NarrativeLearning,
];

/// Question texts that earn their weight a second time, and where it lands.
/// These fire in addition to the category routing above.
pub(crate) const TEXT_BONUSES: &[(&str, &[ScoreBucket])] = &[
    (
        "I remember things better when I see diagrams, charts, or visual aids.",
        &[ScoreBucket::Visual],
    ),
    (
        "I often think about \u{201c}the big picture\u{201d} rather than focusing only on details.",
        &[ScoreBucket::Visual],
    ),
    (
        "I enjoy listening to lectures, podcasts, or explanations more than reading.",
        &[ScoreBucket::Auditory],
    ),
    (
        "I understand ideas better when I can discuss them with others.",
        &[ScoreBucket::Auditory, ScoreBucket::Active],
    ),
    (
        "I learn best when I can see and touch real objects or do practical activities.",
        &[ScoreBucket::Kinesthetic, ScoreBucket::ConcretePractical],
    ),
    (
        "I like experimenting and trying things out to see what works.",
        &[ScoreBucket::Kinesthetic, ScoreBucket::Active],
    ),
    (
        "I learn best when I can relate the material to real-life situations.",
        &[ScoreBucket::Kinesthetic, ScoreBucket::ConcretePractical],
    ),
    (
        "I enjoy exploring abstract theories and concepts, even without direct application.",
        &[ScoreBucket::AbstractTheoretical],
    ),
    (
        "I prefer to work alone and figure things out by myself before sharing.",
        &[ScoreBucket::Reflective],
    ),
    (
        "I often learn by connecting new ideas to stories or personal experiences.",
        &[ScoreBucket::Reflective],
    ),
];

pub(crate) fn route(category: QuestionCategory, kind: &str) -> Routing {
    match category {
        QuestionCategory::ParentalPerception if kind == PRESENCE_COUNTED_TYPE => {
            Routing::Count(ScoreBucket::InfluencingFactors)
        }
        QuestionCategory::ParentalPerception
        | QuestionCategory::PersonalityTrait
        | QuestionCategory::MetacognitiveAwareness => named_bucket(kind),
        QuestionCategory::LearningStyle => LEARNING_STYLE_ROUTES
            .iter()
            .find(|(route_kind, _)| *route_kind == kind)
            .map(|(_, buckets)| Routing::FanOut(*buckets))
            .unwrap_or(Routing::Ignored),
        QuestionCategory::ThinkingReflection => match ScoreBucket::from_key(kind) {
            Some(bucket) if THINKING_REFLECTION_BUCKETS.contains(&bucket) => {
                Routing::Single(bucket)
            }
            _ => Routing::Ignored,
        },
    }
}

fn named_bucket(kind: &str) -> Routing {
    ScoreBucket::from_key(kind)
        .map(Routing::Single)
        .unwrap_or(Routing::Ignored)
}
