use crate::survey::scoring::{ScoreBucket, ScoreCard};

const FALLBACK: &str = "offer a balanced and adaptable learning environment";

/// Clause completing "Consider programs that ...".
pub(crate) fn recommend(scores: &ScoreCard) -> String {
    let extraversion = scores.get(ScoreBucket::Extraversion);
    let independent = scores.get(ScoreBucket::Independent);
    let concrete = scores.get(ScoreBucket::ConcretePractical);
    let abstract_theoretical = scores.get(ScoreBucket::AbstractTheoretical);

    let mut recommendation = String::new();

    if extraversion > independent {
        recommendation.push_str("foster social interaction and collaborative learning");
    } else if independent > extraversion {
        recommendation.push_str("support independent exploration and deep reflection");
    }

    let approach = if concrete > abstract_theoretical {
        Some("emphasize hands-on activities and real-life applications")
    } else if abstract_theoretical > concrete {
        Some("encourage conceptual understanding and theoretical exploration")
    } else {
        None
    };
    if let Some(approach) = approach {
        if !recommendation.is_empty() {
            recommendation.push_str(" and ");
        }
        recommendation.push_str(approach);
    }

    let senses: Vec<&str> = [
        (ScoreBucket::Visual, "visual aids"),
        (ScoreBucket::Auditory, "auditory methods"),
        (ScoreBucket::Kinesthetic, "kinesthetic activities"),
    ]
    .into_iter()
    .filter(|(bucket, _)| scores.get(*bucket) > 0)
    .map(|(_, method)| method)
    .collect();

    if !senses.is_empty() {
        recommendation.push_str(if recommendation.is_empty() {
            "utilizing "
        } else {
            " by utilizing "
        });
        recommendation.push_str(&senses.join(" and "));
    }

    if recommendation.is_empty() {
        recommendation.push_str(FALLBACK);
    }

    recommendation
}
