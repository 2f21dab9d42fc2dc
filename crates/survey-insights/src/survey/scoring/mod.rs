mod buckets;
mod likert;
mod routing;

pub use buckets::{ScoreBucket, ScoreCard};
pub use likert::{likert_weight, LIKERT_WEIGHTS};

use super::catalog::QuestionCatalog;
use routing::{route, Routing, TEXT_BONUSES};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One answered question from a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(alias = "questionId")]
    pub question_id: u32,
    pub response: String,
}

impl Response {
    pub fn new(question_id: u32, response: impl Into<String>) -> Self {
        Self {
            question_id,
            response: response.into(),
        }
    }
}

/// Accumulates a submission's responses into a fresh [`ScoreCard`].
///
/// Nothing here fails: unknown question ids are skipped, unlisted labels weigh
/// 0, and unroutable `(category, type)` pairs contribute nothing. After the
/// category routing, a second pass adds the weight again for the first response
/// to each question in the text bonus table.
pub fn calculate_scores(responses: &[Response], catalog: &QuestionCatalog) -> ScoreCard {
    let mut card = ScoreCard::default();
    let mut skipped = 0usize;

    for response in responses {
        let Some(question) = catalog.get(response.question_id) else {
            skipped += 1;
            continue;
        };
        let weight = likert_weight(&response.response);

        match route(question.category, &question.kind) {
            Routing::Count(bucket) => {
                if !response.response.is_empty() {
                    card.add(bucket, 1);
                }
            }
            Routing::Single(bucket) => card.add(bucket, weight),
            Routing::FanOut(buckets) => {
                for bucket in buckets {
                    card.add(*bucket, weight);
                }
            }
            Routing::Ignored => {}
        }
    }

    for (needle, buckets) in TEXT_BONUSES {
        let matched = responses.iter().find(|response| {
            catalog
                .text_for(response.question_id)
                .is_some_and(|text| text.contains(needle))
        });

        if let Some(response) = matched {
            let weight = likert_weight(&response.response);
            for bucket in *buckets {
                card.add(*bucket, weight);
            }
        }
    }

    debug!(
        responses = responses.len(),
        skipped, "scored survey responses"
    );

    card
}
