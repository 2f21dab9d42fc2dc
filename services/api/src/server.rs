use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, FileOutboxMailer, InMemorySubmissionRepository};
use crate::routes::with_survey_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use survey_insights::config::AppConfig;
use survey_insights::error::AppError;
use survey_insights::survey::submissions::{MailEnvelope, SubmissionJournal, SurveyService};
use survey_insights::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = load_catalog(config.survey.catalog_csv.as_deref())?;
    info!(questions = catalog.len(), "question catalog loaded");

    let envelope = MailEnvelope {
        from: config.mail.from.clone(),
        to: config.mail.to.clone(),
    };
    let survey_service = Arc::new(
        SurveyService::new(
            Arc::new(catalog),
            Arc::new(InMemorySubmissionRepository::default()),
            Arc::new(FileOutboxMailer::new(config.mail.outbox.clone())),
            envelope,
        )
        .with_journal(SubmissionJournal::new(config.survey.submission_log.clone())),
    );

    let app = with_survey_routes(survey_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "survey insights service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
