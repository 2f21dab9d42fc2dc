use serde::{Deserialize, Serialize};

use super::domain::{NewSubmission, SubmissionId, SubmissionRecord};

/// Storage abstraction so the service can be exercised without a database.
pub trait SubmissionRepository: Send + Sync {
    /// Stores the submission under a freshly assigned id.
    fn insert(&self, submission: NewSubmission) -> Result<SubmissionRecord, RepositoryError>;
    fn fetch(&self, id: SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("submission not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound e-mail hook (SMTP relay, outbox file, test double).
pub trait ResultMailer: Send + Sync {
    fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Fixed sender and recipient for result notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailEnvelope {
    pub from: String,
    pub to: String,
}

impl MailEnvelope {
    pub fn compose(&self, subject: String, body: String) -> OutgoingMail {
        OutgoingMail {
            from: self.from.clone(),
            to: self.to.clone(),
            subject,
            body,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport unavailable: {0}")]
    Transport(String),
}
