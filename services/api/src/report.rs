use crate::infra::{parse_indicator, InMemoryScoreStore};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use zengen::config::AppConfig;
use zengen::error::AppError;
use zengen::workflows::blueprint::{
    BlueprintService, Catalog, Indicator, IntakeAnswers, ReportRequest, ScoreResponse,
};

#[derive(Args, Debug, Default)]
pub(crate) struct AnswerArgs {
    /// Indicator eaten in high amounts (repeatable, e.g. --high rice --high fish)
    #[arg(long = "high", value_parser = parse_indicator)]
    pub(crate) high: Vec<Indicator>,
}

impl AnswerArgs {
    pub(crate) fn answers(&self) -> IntakeAnswers {
        self.high
            .iter()
            .fold(IntakeAnswers::new(), |answers, indicator| {
                answers.with(*indicator, true)
            })
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) answers: AnswerArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    #[command(flatten)]
    pub(crate) answers: AnswerArgs,
    /// Render for this score instead of scoring the answers (values above 8 clamp)
    #[arg(long)]
    pub(crate) score: Option<u64>,
    /// Destination path for the PDF
    #[arg(long, short)]
    pub(crate) output: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let service = BlueprintService::new(
        Arc::new(InMemoryScoreStore::default()),
        Catalog::standard(),
    );
    let response = service.score(&args.answers.answers());
    print_score(&response);
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        answers,
        score,
        output,
    } = args;

    let config = AppConfig::load()?;
    let service = BlueprintService::new(
        Arc::new(InMemoryScoreStore::default()),
        config.report.catalog(),
    );

    let request = match score {
        Some(value) => ReportRequest::for_score(value),
        None => {
            let response = service.score(&answers.answers());
            print_score(&response);
            ReportRequest::default()
        }
    };

    let report = service.report(request)?;
    std::fs::write(&output, &report.bytes)?;
    println!(
        "Wrote {} ({} bytes) to {}",
        report.filename,
        report.bytes.len(),
        output.display()
    );
    Ok(())
}

fn print_score(response: &ScoreResponse) {
    println!("JDI8 score: {}", response.score);
    println!("Risk reduction tier: {}", response.tier_label);
    println!("Breakdown:");
    for component in &response.components {
        println!("  - {}", component.detail);
    }
}
