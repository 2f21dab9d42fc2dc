use super::common::*;
use crate::survey::catalog::SESSION_QUESTION_LIMIT;
use crate::survey::scoring::ScoreBucket;
use crate::survey::submissions::domain::{ResultEmailRequest, SubmissionError, SubmissionId};
use crate::survey::submissions::journal::SubmissionJournal;
use crate::survey::submissions::repository::{RepositoryError, SubmissionRepository};
use crate::survey::submissions::SurveyServiceError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn submit_scores_and_stores_the_submission() {
    let (service, repository, _) = build_service();

    let record = service.submit(submission()).expect("submission accepted");

    assert_eq!(record.id, SubmissionId(1));
    assert_eq!(record.name, "Meera");
    assert_eq!(record.scores.get(ScoreBucket::Familiarity), 5);
    assert_eq!(record.scores.get(ScoreBucket::Importance), 2);
    assert_eq!(record.scores.get(ScoreBucket::InfluencingFactors), 1);
    assert_eq!(record.scores.get(ScoreBucket::Extraversion), 9);
    assert_eq!(record.scores.get(ScoreBucket::Kinesthetic), 8);
    assert_eq!(record.scores.get(ScoreBucket::ConcretePractical), 8);
    assert_eq!(record.scores.get(ScoreBucket::Visual), 4);

    let stored = repository
        .fetch(record.id)
        .expect("fetch succeeds")
        .expect("record stored");
    assert_eq!(stored, record);
}

#[test]
fn submit_renders_insight_and_calculation_log() {
    let (service, _, _) = build_service();

    let record = service.submit(submission()).expect("submission accepted");

    assert!(record.insight.starts_with(
        "Parental Perception: Shows some awareness and value for personality development."
    ));
    assert!(record
        .insight
        .contains("Child's Personality Tendency: Primarily **EXTRAVERSION**. "));
    assert!(record.insight.ends_with(
        "Consider programs that foster social interaction and collaborative learning and \
emphasize hands-on activities and real-life applications by utilizing visual aids and \
kinesthetic activities."
    ));

    assert!(record
        .calculation_log
        .starts_with("Student Name: Meera, Age: 10. \nResponses: ["));
    assert!(record.calculation_log.contains("\"familiarity\":5"));
    assert!(!record
        .calculation_log
        .split("Insight Summary: ")
        .nth(1)
        .expect("summary present")
        .contains('\n'));
}

#[test]
fn submit_notifies_the_counsellor() {
    let (service, _, mailer) = build_service();

    service.submit(submission()).expect("submission accepted");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New Quiz Submission from Meera");
    assert_eq!(sent[0].from, "survey@example.com");
    assert_eq!(sent[0].to, "counsellor@example.com");
    assert!(sent[0].body.starts_with("Student Name: Meera\nAge: 10\n\nQuiz Responses:\n"));
    assert!(sent[0].body.contains("  A: Very familiar"));
}

#[test]
fn submit_appends_to_the_journal() {
    let path = std::env::temp_dir().join(format!(
        "survey-service-journal-{}.txt",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let repository = Arc::new(MemoryRepository::default());
    let mailer = Arc::new(MemoryMailer::default());
    let service = service_with(repository, mailer).with_journal(SubmissionJournal::new(&path));

    service.submit(submission()).expect("first submission");
    service.submit(submission()).expect("second submission");

    let contents = std::fs::read_to_string(&path).expect("journal written");
    assert_eq!(contents.matches("Student Name: Meera\n").count(), 2);
    assert!(contents.contains("Submission Date: "));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn submit_rejects_blank_names_before_storing() {
    let (service, repository, mailer) = build_service();

    match service.submit(blank_name_submission()) {
        Err(SurveyServiceError::Validation(SubmissionError::InvalidName)) => {}
        other => panic!("expected invalid name, got {other:?}"),
    }
    assert_eq!(repository.len(), 0);
    assert!(mailer.sent().is_empty());
}

#[test]
fn submit_surfaces_repository_failures() {
    let service = service_with(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryMailer::default()),
    );

    match service.submit(submission()) {
        Err(SurveyServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected repository failure, got {other:?}"),
    }
}

#[test]
fn mail_failure_is_reported_but_the_record_is_kept() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service_with(repository.clone(), Arc::new(FailingMailer));

    let result = service.submit(submission());

    assert!(matches!(result, Err(SurveyServiceError::Mail(_))));
    assert_eq!(repository.len(), 1);
    assert!(service.get(SubmissionId(1)).is_ok());
}

#[test]
fn get_reports_missing_submissions() {
    let (service, _, _) = build_service();

    match service.get(SubmissionId(42)) {
        Err(SurveyServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn document_names_the_file_after_the_respondent() {
    let (service, _, _) = build_service();
    let record = service.submit(submission()).expect("submission accepted");

    let document = service.document(record.id).expect("document renders");

    assert_eq!(document.filename, "results_Meera.txt");
    assert!(document
        .body
        .starts_with("Personality Development Test Results for Meera\nAge: 10\n"));
    assert!(document.body.contains("Familiarity: 5"));
}

#[test]
fn send_result_mails_the_rendered_result() {
    let (service, _, mailer) = build_service();

    service
        .send_result(ResultEmailRequest {
            name: "Meera".to_string(),
            age: 10,
            result: json!({ "insight": "Curious and social" }),
        })
        .expect("mail sent");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Personality Quiz Result for Meera");
    assert!(sent[0].body.starts_with("Name: Meera\nAge: 10\nResult: {"));
    assert!(sent[0].body.contains("Curious and social"));
}

#[test]
fn send_result_propagates_transport_failures() {
    let service = service_with(
        Arc::new(MemoryRepository::default()),
        Arc::new(FailingMailer),
    );

    let result = service.send_result(ResultEmailRequest {
        name: "Meera".to_string(),
        age: 10,
        result: json!(null),
    });

    assert!(matches!(result, Err(SurveyServiceError::Mail(_))));
}

#[test]
fn questionnaire_draws_distinct_questions() {
    let (service, _, _) = build_service();
    let mut rng = StdRng::seed_from_u64(11);

    let questions = service.questionnaire(&mut rng, SESSION_QUESTION_LIMIT);

    assert_eq!(questions.len(), SESSION_QUESTION_LIMIT);
    let texts: HashSet<_> = questions.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts.len(), SESSION_QUESTION_LIMIT);
}

#[test]
fn journal_failure_keeps_the_record_and_skips_notification() {
    let path = std::env::temp_dir()
        .join(format!("survey-missing-journal-dir-{}", std::process::id()))
        .join("submissions_log.txt");
    let repository = Arc::new(MemoryRepository::default());
    let mailer = Arc::new(MemoryMailer::default());
    let service = service_with(repository.clone(), mailer.clone())
        .with_journal(SubmissionJournal::new(&path));

    let result = service.submit(submission());

    assert!(matches!(result, Err(SurveyServiceError::Journal(_))));
    let stored = service.get(SubmissionId(1)).expect("record kept");
    assert_eq!(stored.name, "Meera");
    assert_eq!(repository.len(), 1);
    assert!(mailer.sent().is_empty());
}
