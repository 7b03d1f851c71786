use crate::report::{run_report, run_score, ReportArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use zengen::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ZenGen Longevity Blueprint",
    about = "Score JDI8 dietary answers and render the longevity blueprint report",
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
    /// Score a set of answers and print the breakdown
    Score(ScoreArgs),
    /// Render the PDF report to a file
    Report(ReportArgs),
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
        Command::Report(args) => run_report(args),
    }
}
