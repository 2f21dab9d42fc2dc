use crate::infra::{load_catalog, InMemoryMailer, InMemorySubmissionRepository};
use clap::Args;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use survey_insights::error::AppError;
use survey_insights::survey::submissions::{MailEnvelope, SubmissionRequest, SurveyService};
use survey_insights::survey::{
    calculate_scores, generate_insight, QuestionCatalog, QuestionCategory, Response, ScoreCard,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding `{ "questionId", "response" }` answers, either as a
    /// bare array or wrapped in a submission payload
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Optional catalog CSV export (defaults to the built-in questionnaire)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Optional catalog CSV export (defaults to the built-in questionnaire)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Respondent name used for the sample submission
    #[arg(long, default_value = "Sample Student")]
    pub(crate) name: String,
    /// Respondent age used for the sample submission
    #[arg(long, default_value_t = 10)]
    pub(crate) age: u32,
    /// Skip printing the downloadable result document
    #[arg(long)]
    pub(crate) skip_document: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let responses = load_responses(&args.responses)?;

    let scores = calculate_scores(&responses, &catalog);
    println!(
        "Scored {} responses against {} questions",
        responses.len(),
        catalog.len()
    );
    render_scores(&scores);
    println!("\n{}", generate_insight(&scores));

    Ok(())
}

pub(crate) fn run_catalog_list(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    for category in QuestionCategory::ordered() {
        let questions: Vec<_> = catalog
            .questions()
            .iter()
            .filter(|question| question.category == category)
            .collect();
        if questions.is_empty() {
            continue;
        }

        println!("{} ({})", category.label(), questions.len());
        for question in questions {
            println!("  [{}] {}: {}", question.id, question.kind, question.text);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        name,
        age,
        skip_document,
    } = args;

    let catalog = Arc::new(QuestionCatalog::standard());
    let mailer = Arc::new(InMemoryMailer::default());
    let service = SurveyService::new(
        catalog.clone(),
        Arc::new(InMemorySubmissionRepository::default()),
        mailer.clone(),
        MailEnvelope {
            from: "survey@localhost".to_string(),
            to: "results@localhost".to_string(),
        },
    );

    println!("Survey insights demo");
    let request = SubmissionRequest {
        name,
        age,
        responses: sample_responses(&catalog),
    };
    println!("- Answering {} questions", request.responses.len());

    let record = service.submit(request)?;
    println!("- Stored submission {} for {}", record.id, record.name);
    println!("\nScores");
    render_scores(&record.scores);
    println!("\n{}", record.insight);

    println!("\nNotifications");
    for mail in mailer.sent() {
        println!("- {} -> {}: {}", mail.from, mail.to, mail.subject);
    }

    if !skip_document {
        let document = service.document(record.id)?;
        println!("\nDocument {}\n{}", document.filename, document.body);
    }

    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseFile {
    Answers(Vec<Response>),
    Submission { responses: Vec<Response> },
}

pub(crate) fn load_responses(path: &Path) -> Result<Vec<Response>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let responses = match serde_json::from_str(&raw)? {
        ResponseFile::Answers(responses) | ResponseFile::Submission { responses } => responses,
    };
    Ok(responses)
}

/// Answers every question with one of its own options, cycling by id.
fn sample_responses(catalog: &QuestionCatalog) -> Vec<Response> {
    catalog
        .questions()
        .iter()
        .filter(|question| !question.options.is_empty())
        .map(|question| {
            let option = &question.options[question.id as usize % question.options.len()];
            Response::new(question.id, option.clone())
        })
        .collect()
}

fn render_scores(scores: &ScoreCard) {
    let mut any = false;
    for (bucket, value) in scores.iter().filter(|(_, value)| *value != 0) {
        println!("- {}: {}", bucket.title(), value);
        any = true;
    }
    if !any {
        println!("- all buckets are zero");
    }
}
