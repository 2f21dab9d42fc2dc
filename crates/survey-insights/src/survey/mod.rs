//! Parent survey domain: the question catalog, response scoring, insight text,
//! and the submission workflow that ties them to storage and notifications.

pub mod catalog;
pub mod insight;
pub mod report;
pub mod scoring;
pub mod submissions;

pub use catalog::{CatalogImporter, Question, QuestionCatalog, QuestionCategory};
pub use insight::{generate_insight, PersonalityInsight};
pub use scoring::{calculate_scores, Response, ScoreBucket, ScoreCard};
