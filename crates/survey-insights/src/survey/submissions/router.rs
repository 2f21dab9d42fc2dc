use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{ResultEmailRequest, SubmissionId, SubmissionRequest};
use super::repository::{RepositoryError, ResultMailer, SubmissionRepository};
use super::service::{SurveyService, SurveyServiceError};
use crate::survey::catalog::SESSION_QUESTION_LIMIT;

/// Router builder exposing the questionnaire, submission, and result endpoints.
pub fn survey_router<R, M>(service: Arc<SurveyService<R, M>>) -> Router
where
    R: SubmissionRepository + 'static,
    M: ResultMailer + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_handler::<R, M>))
        .route("/api/v1/submissions", post(submit_handler::<R, M>))
        .route(
            "/api/v1/submissions/:submission_id",
            get(submission_handler::<R, M>),
        )
        .route(
            "/api/v1/submissions/:submission_id/report",
            get(report_handler::<R, M>),
        )
        .route("/api/v1/results/email", post(email_handler::<R, M>))
        .with_state(service)
}

pub(crate) async fn questions_handler<R, M>(
    State(service): State<Arc<SurveyService<R, M>>>,
) -> Response
where
    R: SubmissionRepository + 'static,
    M: ResultMailer + 'static,
{
    let questions = service.questionnaire(&mut rand::rng(), SESSION_QUESTION_LIMIT);
    (StatusCode::OK, axum::Json(questions)).into_response()
}

pub(crate) async fn submit_handler<R, M>(
    State(service): State<Arc<SurveyService<R, M>>>,
    axum::Json(request): axum::Json<SubmissionRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
    M: ResultMailer + 'static,
{
    match service.submit(request) {
        Ok(record) => {
            let payload = json!({
                "message": "Submission successful",
                "submission_id": record.id,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(SurveyServiceError::Validation(err)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            error!(error = %other, "failed to submit survey");
            let payload = json!({ "error": "Failed to submit quiz" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submission_handler<R, M>(
    State(service): State<Arc<SurveyService<R, M>>>,
    Path(submission_id): Path<u64>,
) -> Response
where
    R: SubmissionRepository + 'static,
    M: ResultMailer + 'static,
{
    match service.get(SubmissionId(submission_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(err) => lookup_failure(err),
    }
}

pub(crate) async fn report_handler<R, M>(
    State(service): State<Arc<SurveyService<R, M>>>,
    Path(submission_id): Path<u64>,
) -> Response
where
    R: SubmissionRepository + 'static,
    M: ResultMailer + 'static,
{
    match service.document(SubmissionId(submission_id)) {
        Ok(document) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", document.filename),
                ),
            ],
            document.body,
        )
            .into_response(),
        Err(err) => lookup_failure(err),
    }
}

pub(crate) async fn email_handler<R, M>(
    State(service): State<Arc<SurveyService<R, M>>>,
    axum::Json(request): axum::Json<ResultEmailRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
    M: ResultMailer + 'static,
{
    match service.send_result(request) {
        Ok(()) => (StatusCode::OK, axum::Json(json!({ "success": true }))).into_response(),
        Err(err) => {
            error!(error = %err, "failed to send result e-mail");
            let payload = json!({ "success": false, "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn lookup_failure(err: SurveyServiceError) -> Response {
    match err {
        SurveyServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "Submission not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => {
            error!(error = %other, "failed to load submission");
            let payload = json!({ "error": "Failed to fetch submission" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
