use super::catalog::QuestionCatalog;
use super::insight::flatten_insight;
use super::submissions::SubmissionRecord;
use serde_json::Value;

const UNKNOWN_QUESTION: &str = "Unknown Question";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Downloadable copy of a submission's results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDocument {
    pub filename: String,
    pub body: String,
}

/// Entry appended to the submission journal; also the notification e-mail body.
pub fn journal_entry(
    record: &SubmissionRecord,
    catalog: &QuestionCatalog,
) -> Result<String, serde_json::Error> {
    let answers = record
        .responses
        .iter()
        .map(|response| {
            let text = catalog
                .text_for(response.question_id)
                .unwrap_or(UNKNOWN_QUESTION);
            format!("Q: {text}\n  A: {}", response.response)
        })
        .collect::<Vec<_>>()
        .join("\n");
    let scores = serde_json::to_string_pretty(&record.scores)?;

    Ok(format!(
        "Student Name: {}\nAge: {}\n\nQuiz Responses:\n{}\n\nScores:\n{}\n\nSimplified Result Summary:\n{}\n\nSubmission Date: {}\n",
        record.name,
        record.age,
        answers,
        scores,
        flatten_insight(&record.insight),
        record.submitted_at.format(DATE_FORMAT),
    ))
}

/// Body of a result e-mail requested by the respondent.
pub fn result_email_body(name: &str, age: u32, result: &Value) -> Result<String, serde_json::Error> {
    let result = serde_json::to_string_pretty(result)?;
    Ok(format!("Name: {name}\nAge: {age}\nResult: {result}"))
}

pub fn result_document(record: &SubmissionRecord, catalog: &QuestionCatalog) -> ResultDocument {
    let mut body = format!(
        "Personality Development Test Results for {}\nAge: {}\nDate: {}\n\n",
        record.name,
        record.age,
        record.submitted_at.format(DATE_FORMAT),
    );
    body.push_str("Summary of Your Child's Learning & Personality Profile:\n");
    body.push_str(&record.insight);
    body.push_str("\n\nYour Answers:\n");
    for (position, response) in record.responses.iter().enumerate() {
        let text = catalog
            .text_for(response.question_id)
            .unwrap_or("[Question not found]");
        body.push_str(&format!(
            "{}. {}\n   Answer: {}\n",
            position + 1,
            text,
            response.response
        ));
    }
    body.push_str("\nDetailed Scores:\n");
    for (bucket, value) in record.scores.iter() {
        body.push_str(&format!("{}: {}\n", bucket.title(), value));
    }

    ResultDocument {
        filename: format!("results_{}.txt", filename_stem(&record.name)),
        body,
    }
}

fn filename_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        "submission".to_string()
    } else {
        stem
    }
}
