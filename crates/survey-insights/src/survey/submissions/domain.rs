use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::survey::scoring::{Response, ScoreCard};

/// Identifier assigned by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload posted by the questionnaire once every answer is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl SubmissionRequest {
    /// Trims the name and rejects blank names or a zero age.
    pub fn validate(mut self) -> Result<Self, SubmissionError> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(SubmissionError::InvalidName);
        }
        if self.age == 0 {
            return Err(SubmissionError::InvalidAge);
        }
        self.name = trimmed.to_string();
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("respondent name is required")]
    InvalidName,
    #[error("respondent age must be greater than zero")]
    InvalidAge,
}

/// Scored submission waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub name: String,
    pub age: u32,
    pub scores: ScoreCard,
    pub insight: String,
    pub calculation_log: String,
    pub responses: Vec<Response>,
    pub submitted_at: DateTime<Utc>,
}

impl NewSubmission {
    pub fn into_record(self, id: SubmissionId) -> SubmissionRecord {
        SubmissionRecord {
            id,
            name: self.name,
            age: self.age,
            scores: self.scores,
            insight: self.insight,
            calculation_log: self.calculation_log,
            responses: self.responses,
            submitted_at: self.submitted_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub name: String,
    pub age: u32,
    pub scores: ScoreCard,
    pub insight: String,
    pub calculation_log: String,
    pub responses: Vec<Response>,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn view(&self) -> SubmissionView {
        SubmissionView {
            id: self.id,
            name: self.name.clone(),
            age: self.age,
            scores: self.scores,
            insight: self.insight.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

/// What the result page reads back; leaves out the raw answers and the calculation log.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub id: SubmissionId,
    pub name: String,
    pub age: u32,
    pub scores: ScoreCard,
    pub insight: String,
    pub submitted_at: DateTime<Utc>,
}

/// Request to e-mail a rendered result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEmailRequest {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub result: Value,
}
