//! Submission intake: validation, scoring, storage, journaling, and result
//! notifications, plus the HTTP routes that expose them.

pub mod domain;
mod journal;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    NewSubmission, ResultEmailRequest, SubmissionError, SubmissionId, SubmissionRecord,
    SubmissionRequest, SubmissionView,
};
pub use journal::{JournalError, SubmissionJournal};
pub use repository::{
    MailEnvelope, MailError, OutgoingMail, RepositoryError, ResultMailer, SubmissionRepository,
};
pub use router::survey_router;
pub use service::{SurveyService, SurveyServiceError};
