use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use tracing::{info, warn};

use super::domain::{
    NewSubmission, ResultEmailRequest, SubmissionError, SubmissionId, SubmissionRecord,
    SubmissionRequest,
};
use super::journal::{JournalError, SubmissionJournal};
use super::repository::{
    MailEnvelope, MailError, RepositoryError, ResultMailer, SubmissionRepository,
};
use crate::survey::catalog::{Question, QuestionCatalog};
use crate::survey::insight::{flatten_insight, generate_insight};
use crate::survey::report::{self, ResultDocument};
use crate::survey::scoring::{calculate_scores, Response, ScoreCard};

/// Service composing the catalog, scorer, repository, journal, and mailer.
pub struct SurveyService<R, M> {
    catalog: Arc<QuestionCatalog>,
    repository: Arc<R>,
    mailer: Arc<M>,
    envelope: MailEnvelope,
    journal: Option<SubmissionJournal>,
}

impl<R, M> SurveyService<R, M>
where
    R: SubmissionRepository + 'static,
    M: ResultMailer + 'static,
{
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        repository: Arc<R>,
        mailer: Arc<M>,
        envelope: MailEnvelope,
    ) -> Self {
        Self {
            catalog,
            repository,
            mailer,
            envelope,
            journal: None,
        }
    }

    /// Appends every accepted submission to `journal`.
    pub fn with_journal(mut self, journal: SubmissionJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Questions for a new respondent.
    pub fn questionnaire<G>(&self, rng: &mut G, limit: usize) -> Vec<Question>
    where
        G: Rng + ?Sized,
    {
        self.catalog.session_questions(rng, limit)
    }

    /// Scores, stores, journals, and announces a submission.
    ///
    /// The record is stored before the journal and e-mail steps run, so a
    /// failure there still leaves the submission retrievable.
    pub fn submit(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionRecord, SurveyServiceError> {
        let SubmissionRequest {
            name,
            age,
            responses,
        } = request.validate()?;

        let scores = calculate_scores(&responses, &self.catalog);
        let insight = generate_insight(&scores);
        let calculation_log = calculation_log(&name, age, &responses, &scores, &insight)?;

        let record = self.repository.insert(NewSubmission {
            name,
            age,
            scores,
            insight,
            calculation_log,
            responses,
            submitted_at: Utc::now(),
        })?;

        info!(
            submission_id = %record.id,
            responses = record.responses.len(),
            "survey submission stored"
        );

        let entry = report::journal_entry(&record, &self.catalog)?;
        if let Some(journal) = &self.journal {
            journal.append(&entry)?;
        }

        let mail = self
            .envelope
            .compose(format!("New Quiz Submission from {}", record.name), entry);
        if let Err(err) = self.mailer.send(mail) {
            warn!(submission_id = %record.id, error = %err, "submission notification failed");
            return Err(err.into());
        }

        Ok(record)
    }

    pub fn get(&self, id: SubmissionId) -> Result<SubmissionRecord, SurveyServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Downloadable result document for a stored submission.
    pub fn document(&self, id: SubmissionId) -> Result<ResultDocument, SurveyServiceError> {
        let record = self.get(id)?;
        Ok(report::result_document(&record, &self.catalog))
    }

    /// E-mails a result the respondent already has on screen.
    pub fn send_result(&self, request: ResultEmailRequest) -> Result<(), SurveyServiceError> {
        let body = report::result_email_body(&request.name, request.age, &request.result)?;
        let mail = self.envelope.compose(
            format!("Personality Quiz Result for {}", request.name),
            body,
        );
        self.mailer.send(mail)?;
        info!(name = %request.name, "result e-mail sent");
        Ok(())
    }
}

fn calculation_log(
    name: &str,
    age: u32,
    responses: &[Response],
    scores: &ScoreCard,
    insight: &str,
) -> Result<String, serde_json::Error> {
    Ok(format!(
        "Student Name: {name}, Age: {age}. \nResponses: {}, \nScores: {}. \nInsight Summary: {}",
        serde_json::to_string(responses)?,
        serde_json::to_string(scores)?,
        flatten_insight(insight),
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum SurveyServiceError {
    #[error(transparent)]
    Validation(#[from] SubmissionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Mail(#[from] MailError),
    #[error(transparent)]
    Journal(#[from] JournalError),
    #[error("failed to encode submission: {0}")]
    Encoding(#[from] serde_json::Error),
}
