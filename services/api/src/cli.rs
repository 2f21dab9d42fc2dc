use crate::demo::{run_catalog_list, run_demo, run_score, CatalogArgs, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use survey_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Survey Insights",
    about = "Score parent surveys and serve the questionnaire API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a JSON file of responses and print the insight
    Score(ScoreArgs),
    /// Inspect the question catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Run a sample submission end-to-end against in-memory infrastructure
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List every question with its category and type
    List(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Catalog {
            command: CatalogCommand::List(args),
        } => run_catalog_list(args),
        Command::Demo(args) => run_demo(args),
    }
}
