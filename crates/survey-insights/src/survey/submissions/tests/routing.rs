use super::common::*;
use axum::body::{to_bytes, Body};
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::survey::submissions::router::{
    email_handler, submission_handler, submit_handler,
};
use crate::survey::submissions::{survey_router, ResultEmailRequest};

fn json_request(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn submit_handler_returns_created_with_the_new_id() {
    let (service, _, _) = build_service();

    let response =
        submit_handler::<MemoryRepository, MemoryMailer>(State(service), axum::Json(submission()))
            .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = json_body(response).await;
    assert_eq!(payload["message"], "Submission successful");
    assert_eq!(payload["submission_id"], 1);
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_blank_names() {
    let (service, _, _) = build_service();

    let response = submit_handler::<MemoryRepository, MemoryMailer>(
        State(service),
        axum::Json(blank_name_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(service_with(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryMailer::default()),
    ));

    let response = submit_handler::<UnavailableRepository, MemoryMailer>(
        State(service),
        axum::Json(submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = json_body(response).await;
    assert_eq!(payload, json!({ "error": "Failed to submit quiz" }));
}

#[tokio::test]
async fn submission_handler_returns_not_found_for_unknown_ids() {
    let (service, _, _) = build_service();

    let response =
        submission_handler::<MemoryRepository, MemoryMailer>(State(service), Path(7)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = json_body(response).await;
    assert_eq!(payload, json!({ "error": "Submission not found" }));
}

#[tokio::test]
async fn email_handler_reports_transport_failures() {
    let service = Arc::new(service_with(
        Arc::new(MemoryRepository::default()),
        Arc::new(FailingMailer),
    ));

    let response = email_handler::<MemoryRepository, FailingMailer>(
        State(service),
        axum::Json(ResultEmailRequest {
            name: "Meera".to_string(),
            age: 10,
            result: json!({}),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = json_body(response).await;
    assert_eq!(payload["success"], false);
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("relay refused connection"));
}

#[tokio::test]
async fn questions_route_returns_a_session_questionnaire() {
    let (service, _, _) = build_service();
    let router = survey_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/questions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    let questions = payload.as_array().expect("array of questions");
    assert_eq!(questions.len(), 16);
    assert!(questions[0].get("type").is_some());
    assert!(questions[0].get("options").is_some());
}

#[tokio::test]
async fn submitted_results_can_be_read_back() {
    let (service, _, _) = build_service();
    let router = survey_router(service);

    let created = router
        .clone()
        .oneshot(json_request(
            "/api/v1/submissions",
            json!({
                "name": "Meera",
                "age": 10,
                "responses": [
                    { "questionId": 11, "response": "Strongly Agree" },
                    { "questionId": 1, "response": "Very familiar" }
                ]
            }),
        ))
        .await
        .expect("route executes");
    assert_eq!(created.status(), StatusCode::CREATED);

    let fetched = router
        .oneshot(
            Request::get("/api/v1/submissions/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(fetched.status(), StatusCode::OK);
    let payload = json_body(fetched).await;
    assert_eq!(payload["name"], "Meera");
    assert_eq!(payload["scores"]["extraversion"], 5);
    assert_eq!(payload["scores"]["familiarity"], 5);
    assert!(payload.get("calculation_log").is_none());
}

#[tokio::test]
async fn report_route_serves_a_text_attachment() {
    let (service, _, _) = build_service();
    service.submit(submission()).expect("submission accepted");
    let router = survey_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/submissions/1/report")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"results_Meera.txt\""
    );
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let text = String::from_utf8(body.to_vec()).expect("utf-8 body");
    assert!(text.contains("Detailed Scores:"));
}

#[tokio::test]
async fn report_route_returns_not_found_for_unknown_ids() {
    let (service, _, _) = build_service();
    let router = survey_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/submissions/99/report")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn email_route_acknowledges_sent_results() {
    let (service, _, mailer) = build_service();
    let router = survey_router(service);

    let response = router
        .oneshot(json_request(
            "/api/v1/results/email",
            json!({ "name": "Meera", "age": 10, "result": { "insight": "Curious" } }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "success": true }));
    assert_eq!(mailer.sent().len(), 1);
}
