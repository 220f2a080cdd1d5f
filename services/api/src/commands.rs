use crate::infra::{build_service, read_application};
use chrono::Utc;
use clap::Args;
use hbsa_apply::catalog::{CommitteeCatalog, QuestionKind};
use hbsa_apply::config::AppConfig;
use hbsa_apply::error::AppError;
use hbsa_apply::forwarder::WebhookPayload;
use hbsa_apply::telemetry;
use hbsa_apply::wizard::{ApplicationDraft, StepError, WizardStep};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Print the catalog as JSON instead of a listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Application JSON file, shaped like the submit endpoint body
    pub(crate) file: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct SubmitArgs {
    /// Application JSON file, shaped like the submit endpoint body
    pub(crate) file: PathBuf,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = CommitteeCatalog::standard();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }
    print!("{}", render_catalog(&catalog));
    Ok(())
}

fn render_catalog(catalog: &CommitteeCatalog) -> String {
    let mut out = format!(
        "Committee catalog {} ({} committees)\n",
        catalog.version(),
        catalog.committees().len()
    );
    for committee in catalog.committees() {
        out.push_str(&format!("\n{} [{}]\n", committee.label, committee.id));
        for question in &committee.questions {
            let marker = if question.required { "*" } else { " " };
            let detail = match &question.kind {
                QuestionKind::Text => String::new(),
                QuestionKind::LongText { word_limit: Some(limit) } => {
                    format!(" ({limit} words max)")
                }
                QuestionKind::LongText { word_limit: None } => String::new(),
                QuestionKind::Url => " (link)".to_string(),
                QuestionKind::Select { options } | QuestionKind::MultiSelect { options } => {
                    format!(" [{}]", options.join(", "))
                }
            };
            out.push_str(&format!("  {marker} {}: {}{detail}\n", question.id, question.label));
        }
    }
    out
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let catalog = CommitteeCatalog::standard();
    let application = read_application(&args.file)?;

    let draft = match ApplicationDraft::replay(&application, &catalog) {
        Ok(draft) => draft,
        Err(err) => {
            report_step_error(&err);
            return Err(err.into());
        }
    };

    for committee_id in draft.selected() {
        println!(
            "- {} questions: step {} of {}",
            committee_id,
            draft
                .step_number(&WizardStep::Questions(committee_id.clone()))
                .unwrap_or_default(),
            draft.total_steps()
        );
    }

    let application = draft.finish(&catalog, Utc::now())?;
    println!("Application is complete. Webhook payload preview:");
    println!(
        "{}",
        serde_json::to_string_pretty(&WebhookPayload::from(&application))?
    );
    Ok(())
}

fn report_step_error(err: &StepError) {
    match err {
        StepError::Invalid { step, errors } => {
            println!("The {step} page has problems:");
            for error in errors {
                println!("  - {}: {}", error.field, error.message);
            }
        }
        other => println!("Application incomplete: {other}"),
    }
}

pub(crate) async fn run_submit(args: SubmitArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;

    let application = read_application(&args.file)?;
    let service = build_service(&config)?;
    let receipt = service.submit(application).await?;

    println!(
        "Submitted {} after {} attempt(s){}",
        receipt.submission_id,
        receipt.attempts,
        if receipt.assigned_by_webhook {
            ""
        } else {
            " (id derived locally)"
        }
    );
    Ok(())
}
