use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::survey::catalog::QuestionCatalog;
use crate::survey::scoring::Response as SurveyResponse;
use crate::survey::submissions::domain::{
    NewSubmission, SubmissionId, SubmissionRecord, SubmissionRequest,
};
use crate::survey::submissions::repository::{
    MailEnvelope, MailError, OutgoingMail, RepositoryError, ResultMailer, SubmissionRepository,
};
use crate::survey::submissions::SurveyService;

#[derive(Default)]
pub(super) struct MemoryRepository {
    next_id: AtomicU64,
    records: Mutex<HashMap<SubmissionId, SubmissionRecord>>,
}

impl SubmissionRepository for MemoryRepository {
    fn insert(&self, submission: NewSubmission) -> Result<SubmissionRecord, RepositoryError> {
        let id = SubmissionId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let record = submission.into_record(id);
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .insert(id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("repository mutex poisoned")
            .get(&id)
            .cloned())
    }
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn insert(&self, _submission: NewSubmission) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryMailer {
    outbox: Mutex<Vec<OutgoingMail>>,
}

impl ResultMailer for MemoryMailer {
    fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        self.outbox.lock().expect("mailer mutex poisoned").push(mail);
        Ok(())
    }
}

impl MemoryMailer {
    pub(super) fn sent(&self) -> Vec<OutgoingMail> {
        self.outbox.lock().expect("mailer mutex poisoned").clone()
    }
}

pub(super) struct FailingMailer;

impl ResultMailer for FailingMailer {
    fn send(&self, _mail: OutgoingMail) -> Result<(), MailError> {
        Err(MailError::Transport("relay refused connection".to_string()))
    }
}

pub(super) fn envelope() -> MailEnvelope {
    MailEnvelope {
        from: "survey@example.com".to_string(),
        to: "counsellor@example.com".to_string(),
    }
}

pub(super) fn service_with<R, M>(repository: Arc<R>, mailer: Arc<M>) -> SurveyService<R, M>
where
    R: SubmissionRepository + 'static,
    M: ResultMailer + 'static,
{
    SurveyService::new(
        Arc::new(QuestionCatalog::standard()),
        repository,
        mailer,
        envelope(),
    )
}

pub(super) fn build_service() -> (
    Arc<SurveyService<MemoryRepository, MemoryMailer>>,
    Arc<MemoryRepository>,
    Arc<MemoryMailer>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let mailer = Arc::new(MemoryMailer::default());
    let service = Arc::new(service_with(repository.clone(), mailer.clone()));
    (service, repository, mailer)
}

/// A parent who knows the programs well and a sociable, hands-on child.
pub(super) fn submission() -> SubmissionRequest {
    SubmissionRequest {
        name: "Meera".to_string(),
        age: 10,
        responses: vec![
            SurveyResponse::new(1, "Very familiar"),
            SurveyResponse::new(3, "Somewhat important"),
            SurveyResponse::new(10, "Cost"),
            SurveyResponse::new(11, "Strongly Agree"),
            SurveyResponse::new(12, "Agree"),
            SurveyResponse::new(23, "Agree"),
            SurveyResponse::new(24, "Disagree"),
        ],
    }
}

pub(super) fn blank_name_submission() -> SubmissionRequest {
    SubmissionRequest {
        name: "   ".to_string(),
        ..submission()
    }
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
