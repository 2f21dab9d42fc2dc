use super::{Question, QuestionCategory};

const FAMILIARITY: &[&str] = &[
    "Not familiar at all",
    "Somewhat familiar",
    "Neutral",
    "Fairly familiar",
    "Very familiar",
];

const FREQUENCY: &[&str] = &["Never", "Rarely", "Occasionally", "Frequently", "Almost Always"];

const IMPORTANCE: &[&str] = &[
    "Not important at all",
    "Somewhat important",
    "Neutral",
    "Fairly important",
    "Very important",
];

const LIKELIHOOD: &[&str] = &[
    "Not likely at all",
    "Somewhat Likely",
    "Neutral",
    "Fairly likely",
    "Very likely",
];

const AGREEMENT: &[&str] = &[
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

// Several perception prompts shipped with lower-cased extremes; those labels weigh 0.
const AGREEMENT_LOWER: &[&str] = &[
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly agree",
];

const AGREEMENT_MIXED: &[&str] = &[
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

const INFLUENCING_FACTORS: &[&str] = &[
    "Quality of instructors",
    "Curriculum content",
    "Cost",
    "Location/Accessibility",
    "Peer recommendations",
    "Child's interest",
    "Other",
];

const SEED: &[(QuestionCategory, &str, &str, &[&str])] = &[
    (
        QuestionCategory::ParentalPerception,
        "familiarity",
        "How familiar are you with the personality development classes that can help your child improve their confidence, communication skills, and overall personality?",
        FAMILIARITY,
    ),
    (
        QuestionCategory::ParentalPerception,
        "exposure",
        "How often do you come across any information regarding personality development classes?",
        FREQUENCY,
    ),
    (
        QuestionCategory::ParentalPerception,
        "importance",
        "How important do you think personality development classes are for your child's overall growth and development?",
        IMPORTANCE,
    ),
    (
        QuestionCategory::ParentalPerception,
        "belief",
        "Do you believe that personality development classes can play significant role in shaping your child's future success?",
        AGREEMENT,
    ),
    (
        QuestionCategory::ParentalPerception,
        "investment_belief",
        "You think that investing in personality development classes for your child is important .",
        AGREEMENT_LOWER,
    ),
    (
        QuestionCategory::ParentalPerception,
        "likelihood_to_invest",
        "How likely are you to invest in personality development classes for your child?",
        LIKELIHOOD,
    ),
    (
        QuestionCategory::ParentalPerception,
        "prioritization",
        "You would prioritize spending on personality development classes over other extra curricular activities for your child",
        AGREEMENT_MIXED,
    ),
    (
        QuestionCategory::ParentalPerception,
        "positive_impact_belief",
        "You do believe that the personality development classes can bring out the best in your child.",
        AGREEMENT_MIXED,
    ),
    (
        QuestionCategory::ParentalPerception,
        "necessity_belief",
        "Personality development classes are a necessity in this highly competitive world. It will make your child more confident and self assured.",
        AGREEMENT_MIXED,
    ),
    (
        QuestionCategory::ParentalPerception,
        "influencing_factors",
        "What factors would influence your decision to enroll your child in  personality development classes?",
        INFLUENCING_FACTORS,
    ),
    (
        QuestionCategory::PersonalityTrait,
        "extraversion",
        "I am outgoing and enjoy being with people.",
        AGREEMENT,
    ),
    (
        QuestionCategory::PersonalityTrait,
        "extraversion",
        "I have a lot of energy and make things exciting.",
        AGREEMENT,
    ),
    (
        QuestionCategory::PersonalityTrait,
        "agreeableness",
        "I am kind and considerate to almost everyone.",
        AGREEMENT,
    ),
    (
        QuestionCategory::PersonalityTrait,
        "agreeableness",
        "I like to cooperate and get along with others.",
        AGREEMENT,
    ),
    (
        QuestionCategory::PersonalityTrait,
        "conscientiousness",
        "I do things carefully and completely.",
        AGREEMENT,
    ),
    (
        QuestionCategory::PersonalityTrait,
        "conscientiousness",
        "I make plans and stick to them.",
        AGREEMENT,
    ),
    (
        QuestionCategory::PersonalityTrait,
        "neuroticism",
        "I get nervous easily.",
        AGREEMENT,
    ),
    (
        QuestionCategory::PersonalityTrait,
        "neuroticism",
        "I worry a lot.",
        AGREEMENT,
    ),
    (
        QuestionCategory::PersonalityTrait,
        "openness",
        "I am curious about many different things.",
        AGREEMENT,
    ),
    (
        QuestionCategory::PersonalityTrait,
        "openness",
        "I am creative and like artistic or imaginative experiences.",
        AGREEMENT,
    ),
    (
        QuestionCategory::LearningStyle,
        "auditory_active",
        "I understand ideas better when I can discuss them with others.",
        AGREEMENT,
    ),
    (
        QuestionCategory::LearningStyle,
        "independent_reflective",
        "I prefer to work alone and figure things out by myself before sharing.",
        AGREEMENT,
    ),
    (
        QuestionCategory::LearningStyle,
        "kinesthetic_concrete",
        "I learn best when I can see and touch real objects or do practical activities.",
        AGREEMENT,
    ),
    (
        QuestionCategory::LearningStyle,
        "visual",
        "I remember things better when I see diagrams, charts, or visual aids.",
        AGREEMENT,
    ),
    (
        QuestionCategory::LearningStyle,
        "auditory",
        "I enjoy listening to lectures, podcasts, or explanations more than reading.",
        AGREEMENT,
    ),
    (
        QuestionCategory::LearningStyle,
        "active_experimentation",
        "I like experimenting and trying things out to see what works.",
        AGREEMENT,
    ),
    (
        QuestionCategory::LearningStyle,
        "situated_concrete",
        "I learn best when I can relate the material to real-life situations.",
        AGREEMENT,
    ),
    (
        QuestionCategory::LearningStyle,
        "abstract_conceptualization",
        "I enjoy exploring abstract theories and concepts, even without direct application.",
        AGREEMENT,
    ),
    (
        QuestionCategory::ThinkingReflection,
        "sequential_thinking",
        "I like to make step-by-step plans before starting a task.",
        AGREEMENT,
    ),
    (
        QuestionCategory::ThinkingReflection,
        "global_thinking",
        "I often think about \u{201c}the big picture\u{201d} rather than focusing only on details.",
        AGREEMENT,
    ),
    (
        QuestionCategory::ThinkingReflection,
        "analytical_thinking",
        "I prefer facts and data over opinions or emotions when learning.",
        AGREEMENT,
    ),
    (
        QuestionCategory::ThinkingReflection,
        "narrative_learning",
        "I often learn by connecting new ideas to stories or personal experiences.",
        AGREEMENT,
    ),
    (
        QuestionCategory::MetacognitiveAwareness,
        "stability",
        "I have learned this way since I was young.",
        AGREEMENT,
    ),
    (
        QuestionCategory::MetacognitiveAwareness,
        "environmental_influence",
        "My teachers or learning environments have shaped how I prefer to learn.",
        AGREEMENT,
    ),
    (
        QuestionCategory::MetacognitiveAwareness,
        "flexibility",
        "I adjust my learning style depending on the subject or task.",
        AGREEMENT,
    ),
    (
        QuestionCategory::MetacognitiveAwareness,
        "trait_influence",
        "My personality affects how I approach learning.",
        AGREEMENT,
    ),
];

/// Seed questions, numbered from 1 in seed order.
pub(super) fn questions() -> Vec<Question> {
    SEED.iter()
        .zip(1u32..)
        .map(|((category, kind, text, options), id)| Question {
            id,
            text: (*text).to_string(),
            category: *category,
            kind: (*kind).to_string(),
            options: options.iter().map(|option| (*option).to_string()).collect(),
        })
        .collect()
}
