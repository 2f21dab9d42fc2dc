use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use survey_insights::survey::catalog::CatalogImportError;
use survey_insights::survey::submissions::{
    MailError, NewSubmission, OutgoingMail, RepositoryError, ResultMailer, SubmissionId,
    SubmissionRecord, SubmissionRepository,
};
use survey_insights::survey::{CatalogImporter, QuestionCatalog};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct SubmissionTable {
    last_id: u64,
    records: HashMap<SubmissionId, SubmissionRecord>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    table: Arc<Mutex<SubmissionTable>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn insert(&self, submission: NewSubmission) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self
            .table
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        guard.last_id += 1;
        let record = submission.into_record(SubmissionId(guard.last_id));
        guard.records.insert(record.id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self
            .table
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        Ok(guard.records.get(&id).cloned())
    }
}

/// Appends every outgoing message to a plain-text outbox file.
#[derive(Debug, Clone)]
pub(crate) struct FileOutboxMailer {
    path: PathBuf,
}

impl FileOutboxMailer {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResultMailer for FileOutboxMailer {
    fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let transport = |err: std::io::Error| {
            MailError::Transport(format!("{}: {err}", self.path.display()))
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(transport)?;
        write!(
            file,
            "From: {}\nTo: {}\nSubject: {}\n\n{}\n\n",
            mail.from, mail.to, mail.subject, mail.body
        )
        .map_err(transport)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryMailer {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
}

impl ResultMailer for InMemoryMailer {
    fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let mut guard = self
            .sent
            .lock()
            .map_err(|_| MailError::Transport("mailer mutex poisoned".to_string()))?;
        guard.push(mail);
        Ok(())
    }
}

impl InMemoryMailer {
    pub(crate) fn sent(&self) -> Vec<OutgoingMail> {
        self.sent
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

/// The CSV catalog at `path`, or the built-in questionnaire.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<QuestionCatalog, CatalogImportError> {
    match path {
        Some(path) => CatalogImporter::from_path(path),
        None => Ok(QuestionCatalog::standard()),
    }
}
