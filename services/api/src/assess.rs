use std::path::PathBuf;
use std::sync::Arc;

use crate::infra::load_catalog;
use act_auditor::classification::{ClassificationEngine, SystemProfile};
use act_auditor::config::AppConfig;
use act_auditor::error::AppError;
use act_auditor::reporting::ReportGenerator;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to a JSON file describing the system under assessment
    pub(crate) profile: PathBuf,
    /// Render a full Markdown report instead of the JSON verdict
    #[arg(long)]
    pub(crate) report: bool,
    /// Override the output language (falls back to the default when unsupported)
    #[arg(long)]
    pub(crate) language: Option<String>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = Arc::new(load_catalog(&config.catalog));
    let engine = Arc::new(ClassificationEngine::new(catalog)?);

    let raw = std::fs::read_to_string(&args.profile)?;
    let mut profile: SystemProfile = serde_json::from_str(&raw)?;
    if let Some(language) = args.language {
        profile.language = language;
    }

    if args.report {
        let report = ReportGenerator::new(engine).markdown(&profile);
        println!("{report}");
    } else {
        let verdict = engine.classify(&profile);
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    }

    Ok(())
}
